use chrono::{Duration, TimeDelta};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Minutes a pending reservation holds its tickets when not configured otherwise.
const DEFAULT_RESERVATION_TIMEOUT_MINUTES: i64 = 25;

/// Longest accepted reservation timeout, one week.
const MAX_RESERVATION_TIMEOUT_MINUTES: i64 = 7 * 24 * 60;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// How long a pending reservation stays valid before it can no longer be confirmed.
    pub reservation_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let reservation_timeout = match std::env::var("RESERVATION_TIMEOUT_MINUTES") {
            Ok(value) => parse_reservation_timeout(value)?,
            Err(_) => Duration::minutes(DEFAULT_RESERVATION_TIMEOUT_MINUTES),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            reservation_timeout,
        })
    }
}

/// Parses the reservation timeout in minutes.
///
/// # Returns
/// - `Ok(Duration)` - Timeout between one minute and one week
/// - `Err(ConfigError::InvalidEnvVar)` - Not a number or out of range
fn parse_reservation_timeout(value: String) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|minutes| (1..=MAX_RESERVATION_TIMEOUT_MINUTES).contains(minutes))
        .and_then(TimeDelta::try_minutes)
        .ok_or(ConfigError::InvalidEnvVar {
            name: "RESERVATION_TIMEOUT_MINUTES".to_string(),
            value,
        })
}
