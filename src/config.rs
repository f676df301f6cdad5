use std::env;
use std::str::FromStr;

use chrono::TimeDelta;
use thiserror::Error;

use crate::domain::status::StatusTimings;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_max_size: u32,
    pub status_timings: StatusTimings,
}

impl Settings {
    /// Read settings from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let pool_max_size = parse_or(&lookup, "DB_POOL_MAX_SIZE", 10u32)?;
        if pool_max_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_POOL_MAX_SIZE",
                value: "0".to_string(),
            });
        }

        let defaults = StatusTimings::default();
        let status_timings = StatusTimings {
            preparation: seconds_or(&lookup, "ORDER_PREPARATION_SECS", defaults.preparation)?,
            delivery: seconds_or(&lookup, "ORDER_DELIVERY_SECS", defaults.delivery)?,
        };

        Ok(Settings {
            database_url,
            host,
            port,
            pool_max_size,
            status_timings,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn seconds_or<F>(lookup: &F, key: &'static str, default: TimeDelta) -> Result<TimeDelta, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<u32>()
            .ok()
            .map(|secs| TimeDelta::seconds(i64::from(secs)))
            .ok_or(ConfigError::Invalid { key, value }),
    }
}
