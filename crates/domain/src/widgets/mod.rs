//! Headless state machines for the site's client-side widgets.
//!
//! The browser layer owns rendering, timers, and actual DOM focus; these
//! machines own the state transitions and tell the host which side effect
//! to perform. Each widget instance is independent.

pub mod carousel;
pub mod dropdown;

pub use carousel::Carousel;
pub use dropdown::{DropdownMenu, MenuEffect, MenuEvent};
