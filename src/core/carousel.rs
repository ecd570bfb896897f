//! # Hero Carousel
//!
//! The rotating banner at the top of the home page. Holds only the current
//! slide index; the autoplay timer lives in the TUI adapter and feeds
//! `Action::AutoAdvance` through the action channel.

use std::time::Duration;

pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_secs(7);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide {
        image: "8.jpg",
        title: "Education is the Key to Success",
        subtitle: "Pandit Shambhu Nath Shukla Vishwavidyalaya is committed to creating a vibrant and ethical campus culture, fostering academic excellence.",
    },
    Slide {
        image: "9.jpg",
        title: "Empowering Minds, Enriching Future",
        subtitle: "State-of-the-art laboratories and research facilities designed to push the boundaries of knowledge in Science and Arts.",
    },
    Slide {
        image: "10.jpg",
        title: "A Legacy of Academic Leadership",
        subtitle: "Join a diverse community of scholars and leaders dedicated to serving society through education and integrity.",
    },
];

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: &'static [Slide],
    current: usize,
}

impl Carousel {
    pub fn new(slides: &'static [Slide]) -> Self {
        Self { slides, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.current = (self.current + 1) % self.slides.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.slides.is_empty() {
            self.current = (self.current + self.slides.len() - 1) % self.slides.len();
        }
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current = index;
            true
        } else {
            false
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(SLIDES)
    }
}
