//! Utility functions

pub mod text;
pub mod validation;

pub use text::{format_score, ordinal, round_to_hundredths};
pub use validation::{first_validation_message, validate_score};
