//! Best-effort row mirroring with retry and exponential backoff

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::{SheetMirror, SheetRow};
use crate::{config::SheetsConfig, constants::MAX_SHEETS_RETRY_DELAY_MS, error::AppResult};

/// How often and how patiently a row write is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, first try included (at least 1)
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &SheetsConfig) -> Self {
        Self {
            max_attempts: config.retry_attempts.max(1),
            base_delay: config.retry_base_delay,
            max_delay: Duration::from_millis(MAX_SHEETS_RETRY_DELAY_MS),
        }
    }

    /// Delay before attempt `attempt + 1`, given that `attempt` (1-based) just failed
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Writes rows to a [`SheetMirror`], retrying transient failures
#[derive(Clone)]
pub struct MirrorWriter {
    sheet: Arc<dyn SheetMirror>,
    policy: RetryPolicy,
}

impl MirrorWriter {
    pub fn new(sheet: Arc<dyn SheetMirror>, policy: RetryPolicy) -> Self {
        Self { sheet, policy }
    }

    /// Append a row, retrying until it succeeds or attempts run out.
    ///
    /// Returns the last error when every attempt failed.
    pub async fn write(&self, row: &SheetRow) -> AppResult<()> {
        let mut attempt = 1;
        loop {
            match self.sheet.append_row(row).await {
                Ok(()) => {
                    tracing::debug!(attempt, level_id = %row.level_id, "Row mirrored to spreadsheet");
                    return Ok(());
                }
                Err(e) if attempt < self.policy.max_attempts => {
                    let delay = self.policy.delay_after(attempt);
                    tracing::warn!(
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "Spreadsheet append failed, retrying: {}",
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Mirror a row in the background; the caller never waits on the spreadsheet
    pub fn spawn(&self, row: SheetRow) -> JoinHandle<()> {
        let writer = self.clone();
        tokio::spawn(async move {
            if let Err(e) = writer.write(&row).await {
                tracing::error!(
                    submitter = %row.submitter,
                    level_id = %row.level_id,
                    "Giving up on mirroring submission to spreadsheet: {}",
                    e
                );
            }
        })
    }
}
