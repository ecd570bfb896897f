use std::fs::File;
use std::process::ExitCode;

use campus::core::config::{self, CampusConfig, CliOverrides};
use campus::core::navigation::NavigationTree;
use campus::core::search;
use campus::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "campus", about = "Terminal portal for Pandit Shambhunath Shukla Vishwavidyalaya")]
struct Args {
    /// Route to open on startup (e.g. /library)
    #[arg(short, long)]
    start: Option<String>,

    /// Resolve a search query, print the matching route, and exit
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Print the navigation menu as JSON and exit
    #[arg(long)]
    dump_tree: bool,

    /// Start with the screen reader on
    #[arg(long)]
    screen_reader: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to campus.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("campus.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Campus starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}, using defaults");
        log::warn!("Config load failed: {}", e);
        CampusConfig::default()
    });
    let cli = CliOverrides {
        start_route: args.start.as_deref(),
        screen_reader: args.screen_reader,
    };
    let resolved = config::resolve(&file_config, &cli);

    if args.dump_tree {
        let json = serde_json::to_string_pretty(&NavigationTree::university())
            .map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(query) = args.search {
        let report = search::report(&NavigationTree::university(), &query);
        if let Some(output) = report.output {
            println!("{output}");
        }
        return Ok(if report.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    tui::run(resolved)?;
    Ok(ExitCode::SUCCESS)
}
