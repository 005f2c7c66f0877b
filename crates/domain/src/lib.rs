//! Domain layer for the church site backend.
//!
//! This crate contains:
//! - Domain models (SiteSettings, Message, Event, Ministry, ...)
//! - The site navigation tree
//! - Headless state machines for the client-side widgets

pub mod models;
pub mod navigation;
pub mod widgets;
