//! Persistence layer for the church site backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations (read-mostly; prayer requests are the one write)

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
