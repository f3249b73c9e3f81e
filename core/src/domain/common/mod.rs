use std::time::Duration;

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod retry;
pub mod services;
pub mod tone;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug)]
pub struct MorselConfig {
    pub database: DatabaseConfig,
    pub llm: Option<LLMConfig>,
    pub suggestion: SuggestionConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Credentials and database name are percent-encoded.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            urlencoding::encode(&self.name)
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

/// Time bound applied to the pluggable suggestion backend before falling back
/// to the rule table.
#[derive(Clone, Debug)]
pub struct SuggestionConfig {
    pub backend_timeout: Duration,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            backend_timeout: Duration::from_secs(8),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Monday of the ISO week containing `date`.
pub fn week_start_date(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Trims surrounding whitespace and collapses inner runs of whitespace, so
/// "  Chicken   nuggets " and "Chicken nuggets" land on the same row.
pub fn normalize_food_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
