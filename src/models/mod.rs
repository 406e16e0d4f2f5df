//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod contest;
pub mod entry;

pub use contest::*;
pub use entry::*;
