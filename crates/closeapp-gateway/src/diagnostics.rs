//! `GET /test` — backend/database availability report.
//!
//! The database is never queried; a reachable host:port from `DATABASE_URL` is
//! reported as available. `collections` stays empty.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpStream;

use crate::config::GatewayConfig;

const DEFAULT_DB_PORT: u16 = 27017;
const DETAIL_LIMIT: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ReachError {
    #[error("invalid database url: {0}")]
    InvalidUrl(String),
    #[error("database url has no host")]
    MissingHost,
    #[error(transparent)]
    Connect(#[from] std::io::Error),
    #[error("timed out after {0}ms")]
    Timeout(u64),
}

/// Opens (and immediately drops) a TCP connection to the database host.
pub async fn check_database(url: &str, timeout_ms: u64) -> Result<(), ReachError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ReachError::InvalidUrl(e.to_string()))?;
    let host = parsed.host_str().ok_or(ReachError::MissingHost)?;
    // IPv6 literals come back bracketed (`[::1]`), which the resolver rejects.
    let host = host.trim_start_matches('[').trim_end_matches(']');
    let port = parsed.port().unwrap_or(DEFAULT_DB_PORT);

    let connect = TcpStream::connect((host, port));
    match tokio::time::timeout(Duration::from_millis(timeout_ms), connect).await {
        Ok(stream) => {
            stream?;
            Ok(())
        }
        Err(_) => Err(ReachError::Timeout(timeout_ms)),
    }
}

pub async fn run_diagnostics(config: &GatewayConfig) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_marker(config.database_url.is_some()),
        database_name: set_marker(config.database_name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(url) = config.database_url.as_deref() {
        match check_database(url, config.connect_timeout_ms).await {
            Ok(()) => {
                report.database = "✅ Available".to_string();
                report.connection_status = "Connected".to_string();
            }
            Err(e) => {
                tracing::warn!("database unreachable: {}", e);
                report.database = format!("❌ Error: {}", truncate(&e.to_string(), DETAIL_LIMIT));
            }
        }
    }

    report
}

fn set_marker(present: bool) -> String {
    let marker = if present { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn truncate(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}
