use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, normalize_food_name},
    hyperfixation::entities::HyperfixationTransition,
};

/// How far past the server clock an `eaten_at` may sit before it is rejected.
pub const MAX_CLOCK_SKEW_MINUTES: i64 = 5;

/// Rejects timestamps beyond `now` plus the allowed skew. A future event
/// would become the window anchor and push every real event out of it.
pub fn ensure_not_in_future(eaten_at: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), CoreError> {
    if eaten_at > now + Duration::minutes(MAX_CLOCK_SKEW_MINUTES) {
        return Err(CoreError::validation("eaten_at is in the future"));
    }
    Ok(())
}

/// A "food eaten" event emitted by the meal-logging subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumptionEvent {
    pub user_id: Uuid,
    pub food_name: String,
    pub eaten_at: DateTime<Utc>,
}

impl ConsumptionEvent {
    pub fn new(user_id: Uuid, food_name: &str, eaten_at: DateTime<Utc>) -> Result<Self, CoreError> {
        let food_name = normalize_food_name(food_name);
        if food_name.is_empty() {
            return Err(CoreError::validation("food_name is required"));
        }
        ensure_not_in_future(eaten_at, Utc::now())?;

        Ok(Self {
            user_id,
            food_name,
            eaten_at,
        })
    }
}

/// Rolling counts for one `(user, food)` pair. Both counts are recounted from
/// the event log relative to `last_eaten_at` every time an event is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FrequencySnapshot {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub last_eaten_at: DateTime<Utc>,
    pub count_7d: i32,
    pub count_30d: i32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyWindow {
    SevenDays,
    ThirtyDays,
}

impl FrequencyWindow {
    pub fn days(&self) -> i64 {
        match self {
            FrequencyWindow::SevenDays => 7,
            FrequencyWindow::ThirtyDays => 30,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::days(self.days())
    }

    /// Exclusive lower bound of the window anchored at `anchor`.
    pub fn start(&self, anchor: DateTime<Utc>) -> DateTime<Utc> {
        anchor - self.duration()
    }

    /// `anchor - window < at <= anchor`
    pub fn contains(&self, anchor: DateTime<Utc>, at: DateTime<Utc>) -> bool {
        at > self.start(anchor) && at <= anchor
    }

    pub fn count<'a>(
        &self,
        anchor: DateTime<Utc>,
        timestamps: impl IntoIterator<Item = &'a DateTime<Utc>>,
    ) -> i32 {
        timestamps
            .into_iter()
            .filter(|at| self.contains(anchor, **at))
            .count() as i32
    }
}

/// Occurrences of one food inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodCount {
    pub food_name: String,
    pub count: i64,
}

/// Result of recording one consumption event: the refreshed snapshot and the
/// hyperfixation transition it triggered, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionOutcome {
    pub snapshot: FrequencySnapshot,
    pub hyperfixation: Option<HyperfixationTransition>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use proptest::prelude::*;

    use super::*;

    fn at(day: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap() + Duration::days(day)
    }

    #[test]
    fn test_window_bounds() {
        let anchor = at(10);
        let window = FrequencyWindow::SevenDays;

        assert!(window.contains(anchor, anchor));
        assert!(window.contains(anchor, at(4)));
        assert!(!window.contains(anchor, at(3)), "exactly 7 days back is outside");
        assert!(!window.contains(anchor, at(11)), "future events are outside");
    }

    #[test]
    fn test_event_rejects_blank_food_name() {
        let result = ConsumptionEvent::new(Uuid::new_v4(), "   ", at(0));
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_event_normalizes_food_name() {
        let event = ConsumptionEvent::new(Uuid::new_v4(), " Chicken  nuggets", at(0)).unwrap();
        assert_eq!(event.food_name, "Chicken nuggets");
    }

    #[test]
    fn test_event_rejects_future_timestamp() {
        let tomorrow = Utc::now() + Duration::days(1);
        let result = ConsumptionEvent::new(Uuid::new_v4(), "Toast", tomorrow);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_clock_skew_tolerance() {
        let now = at(0);
        assert!(ensure_not_in_future(now + Duration::minutes(MAX_CLOCK_SKEW_MINUTES), now).is_ok());
        assert!(ensure_not_in_future(now + Duration::minutes(MAX_CLOCK_SKEW_MINUTES + 1), now).is_err());
    }

    proptest! {
        #[test]
        fn prop_thirty_day_count_bounds_seven_day_count(offsets in prop::collection::vec(-60i64..60, 0..40)) {
            let anchor = at(0);
            let timestamps: Vec<DateTime<Utc>> = offsets.iter().map(|h| anchor + Duration::hours(*h * 12)).collect();

            let seven = FrequencyWindow::SevenDays.count(anchor, &timestamps);
            let thirty = FrequencyWindow::ThirtyDays.count(anchor, &timestamps);

            prop_assert!(seven <= thirty);
            prop_assert!(thirty as usize <= timestamps.len());
        }
    }
}
