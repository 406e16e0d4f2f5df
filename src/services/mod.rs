//! Business logic services
//!
//! Services are synchronous transitions over [`ContestState`](crate::models::ContestState).
//! Handlers lock the state, call one service function, release the lock and only
//! then talk to Discord or the spreadsheet.

pub mod contest_service;
pub mod scoring_service;
pub mod submission_service;

pub use contest_service::ContestService;
pub use scoring_service::{Placement, Podium, ScoreReceipt, ScoringService};
pub use submission_service::{SubmissionReceipt, SubmissionService};
