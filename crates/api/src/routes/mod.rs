//! HTTP route handlers.

pub mod alpha;
pub mod events;
pub mod groups;
pub mod health;
pub mod home;
pub mod messages;
pub mod ministries;
pub mod navigation;
pub mod prayer;
pub mod settings;
pub mod staff;
pub mod support;
