//! Utility functions and helpers.
//!
//! - [`error`] - The shared error type
//! - [`hash`] - Fast hash map and set aliases

pub mod error;
pub mod hash;
