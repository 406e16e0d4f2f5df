//! Google Sheets client authenticated with a service account.
//!
//! Access tokens are obtained with the OAuth 2.0 JWT bearer grant: an RS256
//! assertion signed with the service account's private key is exchanged at the
//! token endpoint. Tokens are cached until shortly before they expire.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{SheetMirror, SheetRow};
use crate::{
    config::SheetsConfig,
    constants::google::{
        ASSERTION_LIFETIME_SECS, HTTP_TIMEOUT_SECS, JWT_BEARER_GRANT, SHEETS_API_BASE,
        SHEETS_SCOPE, TOKEN_REFRESH_MARGIN_SECS, TOKEN_URI,
    },
    error::{AppError, AppResult},
};

/// Fields of a Google service-account key file that the client needs
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

fn default_token_uri() -> String {
    TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    /// Load a key file downloaded from the Google Cloud console
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!(
                "cannot read service-account key {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::Configuration(format!("invalid service-account key: {}", e)))
    }
}

/// Claims of the service-account assertion
#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + chrono::Duration::seconds(TOKEN_REFRESH_MARGIN_SECS) < self.expires_at
    }
}

#[derive(Debug, Serialize)]
struct AppendBody<'a> {
    values: [[&'a str; 5]; 1],
}

/// Appends rows to one worksheet of one spreadsheet
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    append_url: Url,
    token: Mutex<Option<CachedToken>>,
}

impl GoogleSheetsClient {
    pub fn new(key: ServiceAccountKey, spreadsheet_id: &str, sheet_name: &str) -> AppResult<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| AppError::Configuration(format!("invalid service-account private key: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            key,
            encoding_key,
            append_url: append_url(SHEETS_API_BASE, spreadsheet_id, sheet_name)?,
            token: Mutex::new(None),
        })
    }

    /// Build a client from configuration; `None` when no spreadsheet is configured
    pub fn from_config(config: &SheetsConfig) -> AppResult<Option<Self>> {
        let Some(spreadsheet_id) = config.spreadsheet_id.as_deref() else {
            return Ok(None);
        };
        let key = ServiceAccountKey::from_file(&config.credentials_path)?;
        Self::new(key, spreadsheet_id, &config.sheet_name).map(Some)
    }

    async fn access_token(&self) -> AppResult<String> {
        let mut cached = self.token.lock().await;
        let now = Utc::now();
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(now)) {
            return Ok(token.value.clone());
        }

        let token = self.fetch_token(now).await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    async fn fetch_token(&self, now: DateTime<Utc>) -> AppResult<CachedToken> {
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.key.token_uri,
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
        };
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Sheets(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response.json().await?;
        tracing::debug!(expires_in = token.expires_in, "Obtained Google access token");

        Ok(CachedToken {
            value: token.access_token,
            expires_at: now + chrono::Duration::seconds(token.expires_in),
        })
    }
}

#[async_trait]
impl SheetMirror for GoogleSheetsClient {
    async fn append_row(&self, row: &SheetRow) -> AppResult<()> {
        let token = self.access_token().await?;

        let response = self
            .http
            .post(self.append_url.clone())
            .bearer_auth(token)
            .json(&AppendBody { values: [row.values()] })
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 {
            // Revoked or clock-skewed token; force a refresh on the next attempt
            *self.token.lock().await = None;
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Sheets(format!("append returned {}: {}", status, body)));
        }

        Ok(())
    }
}

/// `{base}/{spreadsheet}/values/{sheet}:append?valueInputOption=USER_ENTERED`
fn append_url(base: &str, spreadsheet_id: &str, sheet_name: &str) -> AppResult<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| AppError::Configuration(format!("invalid Sheets API base url: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| AppError::Configuration("Sheets API base url cannot be a base".to_string()))?
        .push(spreadsheet_id)
        .push("values")
        .push(&format!("{}:append", sheet_name));
    url.query_pairs_mut()
        .append_pair("valueInputOption", "USER_ENTERED")
        .append_pair("insertDataOption", "INSERT_ROWS");
    Ok(url)
}
