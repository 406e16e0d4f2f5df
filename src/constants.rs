//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// LOGGING DEFAULTS
// =============================================================================

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_RUST_LOG: &str = "info";

// =============================================================================
// SPREADSHEET DEFAULTS
// =============================================================================

/// Default worksheet that receives submission rows
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Default location of the Google service-account key file
pub const DEFAULT_CREDENTIALS_PATH: &str = "google_credentials.json";

/// Default number of attempts per mirrored row (first try included)
pub const DEFAULT_SHEETS_RETRY_ATTEMPTS: u32 = 3;

/// Default delay before the first retry, doubled on every further retry
pub const DEFAULT_SHEETS_RETRY_BASE_DELAY_MS: u64 = 500;

/// Upper bound for a single backoff delay
pub const MAX_SHEETS_RETRY_DELAY_MS: u64 = 10_000;

/// Google Sheets API endpoints and scopes
pub mod google {
    pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
    pub const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
    pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
    pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

    /// Lifetime requested for service-account assertions, in seconds
    pub const ASSERTION_LIFETIME_SECS: i64 = 3600;

    /// Refresh cached access tokens this many seconds before they expire
    pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

    /// HTTP timeout for Sheets and token requests, in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
}

// =============================================================================
// CONTEST ENTRIES
// =============================================================================

/// Stored in place of optional entry fields left blank
pub const PLACEHOLDER: &str = "None";

/// Number of placements shown on the podium
pub const PODIUM_SIZE: usize = 3;

/// Medal markers for podium positions 1-3
pub const MEDALS: [&str; PODIUM_SIZE] = ["🥇", "🥈", "🥉"];

// =============================================================================
// INTERACTION IDENTIFIERS
// =============================================================================

/// Custom id of the persistent "Submit Entry" button
pub const SUBMIT_BUTTON_ID: &str = "contest:submit_entry";

/// Custom id of the submission modal
pub const SUBMIT_FORM_ID: &str = "contest:submit_form";

// =============================================================================
// EMBED COLOURS
// =============================================================================

/// Announcement embed colour (green)
pub const ANNOUNCEMENT_COLOUR: u32 = 0x00ff00;

/// Review notification embed colour (orange)
pub const REVIEW_COLOUR: u32 = 0xff9900;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum level id length accepted by the submission form
pub const MAX_LEVEL_ID_LENGTH: u64 = 32;

/// Maximum level name length accepted by the submission form
pub const MAX_LEVEL_NAME_LENGTH: u64 = 100;

/// Maximum description length accepted by the submission form
pub const MAX_DESCRIPTION_LENGTH: u64 = 1000;

/// Maximum video link length accepted by the submission form
pub const MAX_LINK_LENGTH: u64 = 200;

/// Maximum contest title length; the announcement embed title is capped at 256
pub const MAX_CONTEST_TITLE_LENGTH: u64 = 200;

/// Maximum length of the theme, deadline and judging texts (one embed field each)
pub const MAX_CONTEST_FIELD_LENGTH: u64 = 1024;
