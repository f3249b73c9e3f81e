use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    frequency::entities::FrequencySnapshot,
};

/// `count_7d` at which a pattern opens.
pub const ACTIVATION_THRESHOLD: i32 = 5;

const DAYS_PER_WINDOW: f64 = 7.0;

/// A neutral record of one food being eaten repeatedly. At most one row per
/// `(user, food)` is active at a time; closure is always explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Hyperfixation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub frequency_count: i32,
    pub peak_frequency_per_day: f64,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What a qualifying snapshot contributes to an active record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperfixationSignal {
    pub frequency_count: i32,
    pub frequency_per_day: f64,
}

impl HyperfixationSignal {
    pub fn from_count_7d(count_7d: i32) -> Self {
        Self {
            frequency_count: count_7d,
            frequency_per_day: f64::from(count_7d) / DAYS_PER_WINDOW,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HyperfixationTransition {
    /// Inactive -> Active
    Activated(Hyperfixation),
    /// Active -> Active
    Updated(Hyperfixation),
}

impl HyperfixationTransition {
    #[cfg(test)]
    pub fn hyperfixation(&self) -> &Hyperfixation {
        match self {
            HyperfixationTransition::Activated(h) | HyperfixationTransition::Updated(h) => h,
        }
    }
}

/// Threshold rule applied to each refreshed frequency snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyperfixationRule {
    pub activation_threshold: i32,
}

impl Default for HyperfixationRule {
    fn default() -> Self {
        Self {
            activation_threshold: ACTIVATION_THRESHOLD,
        }
    }
}

impl HyperfixationRule {
    /// Returns a signal when the snapshot qualifies, `None` otherwise. A
    /// snapshot that stops qualifying never closes an active record.
    pub fn evaluate(&self, snapshot: &FrequencySnapshot) -> Option<HyperfixationSignal> {
        (snapshot.count_7d >= self.activation_threshold)
            .then(|| HyperfixationSignal::from_count_7d(snapshot.count_7d))
    }
}

impl Hyperfixation {
    /// Opens a record from a qualifying signal.
    pub fn open(user_id: Uuid, food_name: String, signal: HyperfixationSignal) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            food_name,
            started_at: now,
            ended_at: None,
            frequency_count: signal.frequency_count,
            peak_frequency_per_day: signal.frequency_per_day,
            is_active: true,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Opens a record outside the threshold path, seeded with a single
    /// occurrence.
    pub fn manual(user_id: Uuid, food_name: String, notes: Option<String>) -> Self {
        let mut hyperfixation = Self::open(user_id, food_name, HyperfixationSignal::from_count_7d(1));
        hyperfixation.notes = notes;
        hyperfixation
    }

    /// Active -> Active. The peak never decreases.
    pub fn observe(&mut self, signal: HyperfixationSignal) {
        self.frequency_count = signal.frequency_count;
        self.peak_frequency_per_day = self.peak_frequency_per_day.max(signal.frequency_per_day);
        self.updated_at = Utc::now();
    }

    /// Active -> Ended.
    pub fn end(&mut self) -> Result<(), CoreError> {
        if !self.is_active {
            return Err(CoreError::validation("hyperfixation already ended"));
        }

        let now = Utc::now();
        self.is_active = false;
        self.ended_at = Some(now);
        self.updated_at = now;
        Ok(())
    }
}
