//! Shared types for schedule generation.
//!
//! This module provides:
//! - `error`: Structured error types for generator construction and policy validation
//!
//! # Re-exports
//!
//! - [`ScheduleError`] from `error`

pub mod error;

pub use error::ScheduleError;
