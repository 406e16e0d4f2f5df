//! Command hooks
//!
//! Poise runs these around every slash command invocation.

pub mod logging;

pub use logging::{post_command, pre_command};
