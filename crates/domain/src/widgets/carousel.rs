//! Hero image carousel state machine.
//!
//! The host renders the slides and owns the interval timer; the machine owns
//! the current index and the paused flag. Ticks arriving while paused are
//! ignored rather than queued.

/// Interval between automatic slide advances.
pub const ROTATION_INTERVAL_MS: u64 = 5_000;

/// Rotating slide deck, paused while the pointer hovers it.
#[derive(Debug, Clone)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current: 0,
            paused: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Interval timer fired. Advances one slide, wrapping at the end;
    /// does nothing while paused or when there is nothing to rotate.
    pub fn tick(&mut self) -> usize {
        if !self.paused && self.slide_count > 1 {
            self.current = (self.current + 1) % self.slide_count;
        }
        self.current
    }

    /// Pointer entered the carousel.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Pointer left the carousel.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Navigation dot clicked. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.slide_count {
            self.current = index;
        }
    }
}
