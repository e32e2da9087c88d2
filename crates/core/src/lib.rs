//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Domain types for budget records and year statistics live here, together
//! with the aggregation rules the storage layer must honor.
//!
//! # Modules
//!
//! - `budget` - Budget records, categories, and year statistics

pub mod budget;
