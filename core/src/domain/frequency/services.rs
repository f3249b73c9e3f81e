use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    chain_suggestion::ports::{ChainSuggestionRepository, SuggestionBackend},
    common::{entities::app_errors::CoreError, retry::retry_idempotent, services::Service},
    food_profile::ports::FoodProfileRepository,
    food_variation::ports::FoodVariationRepository,
    frequency::{
        entities::{ConsumptionEvent, ConsumptionOutcome, FrequencySnapshot},
        ports::{FrequencyRepository, FrequencyService},
        value_objects::RecordConsumptionInput,
    },
    health::ports::HealthCheckRepository,
    hyperfixation::{entities::HyperfixationTransition, ports::HyperfixationRepository},
    insight::ports::WeeklyInsightRepository,
    nutrition_settings::ports::NutritionSettingsRepository,
    rotation::ports::RotationScheduleRepository,
};

impl<F, H, CS, FP, FV, RS, WI, NS, HC, SB> FrequencyService
    for Service<F, H, CS, FP, FV, RS, WI, NS, HC, SB>
where
    F: FrequencyRepository,
    H: HyperfixationRepository,
    CS: ChainSuggestionRepository,
    FP: FoodProfileRepository,
    FV: FoodVariationRepository,
    RS: RotationScheduleRepository,
    WI: WeeklyInsightRepository,
    NS: NutritionSettingsRepository,
    HC: HealthCheckRepository,
    SB: SuggestionBackend,
{
    #[instrument(skip(self, input), fields(user_id = %input.user_id, food_name = %input.food_name))]
    async fn record_consumption(
        &self,
        input: RecordConsumptionInput,
    ) -> Result<ConsumptionOutcome, CoreError> {
        let event = ConsumptionEvent::new(input.user_id, &input.food_name, input.eaten_at)?;

        let outcome = self
            .frequency_repository
            .record_consumption(event, self.hyperfixation_rule)
            .await?;

        if let Some(HyperfixationTransition::Activated(h)) = &outcome.hyperfixation {
            info!(
                hyperfixation_id = %h.id,
                frequency_count = h.frequency_count,
                "repeat-food pattern opened"
            );
        }

        Ok(outcome)
    }

    async fn get_frequencies(&self, user_id: Uuid) -> Result<Vec<FrequencySnapshot>, CoreError> {
        retry_idempotent("get_frequencies", || {
            self.frequency_repository.get_by_user(user_id)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use proptest::prelude::*;

    use super::*;
    use crate::domain::{
        chain_suggestion::rules::RuleBasedSuggestionBackend,
        common::test_support::{InMemoryDb, test_service},
        frequency::entities::FrequencyWindow,
        hyperfixation::ports::HyperfixationService,
    };

    fn input(user_id: Uuid, food_name: &str, hours_ago: i64) -> RecordConsumptionInput {
        RecordConsumptionInput {
            user_id,
            food_name: food_name.to_string(),
            eaten_at: Utc::now() - Duration::hours(hours_ago),
        }
    }

    #[tokio::test]
    async fn test_six_servings_open_one_pattern_with_count_six() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        for day in (0..6).rev() {
            service
                .record_consumption(input(user_id, "Chicken nuggets", day * 24))
                .await
                .unwrap();
        }

        let active = service.get_active_hyperfixations(user_id).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].food_name, "Chicken nuggets");
        assert_eq!(active[0].frequency_count, 6);
    }

    #[tokio::test]
    async fn test_activation_fires_exactly_at_fifth_event() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        let mut transitions = Vec::new();
        for hour in (0..6).rev() {
            let outcome = service
                .record_consumption(input(user_id, "Pizza", hour))
                .await
                .unwrap();
            transitions.push(outcome.hyperfixation);
        }

        assert!(transitions[..4].iter().all(Option::is_none));
        assert!(matches!(transitions[4], Some(HyperfixationTransition::Activated(_))));
        assert!(matches!(transitions[5], Some(HyperfixationTransition::Updated(_))));
    }

    #[tokio::test]
    async fn test_concurrent_records_are_not_lost() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();
        let eaten_at = Utc::now();

        let first = RecordConsumptionInput {
            user_id,
            food_name: "Pizza".to_string(),
            eaten_at,
        };
        let (a, b) = tokio::join!(
            service.record_consumption(first.clone()),
            service.record_consumption(first)
        );
        a.unwrap();
        b.unwrap();

        let snapshots = service.get_frequencies(user_id).await.unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].count_7d, 2);
        assert_eq!(snapshots[0].count_30d, 2);
    }

    #[tokio::test]
    async fn test_backfilled_event_keeps_latest_anchor() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        let latest = service.record_consumption(input(user_id, "Toast", 0)).await.unwrap();
        let backfilled = service
            .record_consumption(input(user_id, "Toast", 24 * 10))
            .await
            .unwrap();

        assert_eq!(backfilled.snapshot.last_eaten_at, latest.snapshot.last_eaten_at);
        assert_eq!(backfilled.snapshot.count_7d, 1);
        assert_eq!(backfilled.snapshot.count_30d, 2);
    }

    #[tokio::test]
    async fn test_blank_food_name_is_rejected_before_write() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);

        let result = service.record_consumption(input(Uuid::new_v4(), "  ", 0)).await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(db.lock().events.is_empty());
    }

    #[tokio::test]
    async fn test_future_event_does_not_pin_the_window() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        let result = service
            .record_consumption(input(user_id, "Chicken nuggets", -24 * 365))
            .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(db.lock().events.is_empty());

        let mut last = None;
        for hour in (0..6).rev() {
            last = Some(
                service
                    .record_consumption(input(user_id, "Chicken nuggets", hour))
                    .await
                    .unwrap(),
            );
        }

        assert_eq!(last.unwrap().snapshot.count_7d, 6);
        let active = service.get_active_hyperfixations(user_id).await.unwrap();
        assert_eq!(active.len(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_seven_day_count_matches_window_recount(hours_ago in prop::collection::vec(0i64..24 * 40, 1..25)) {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
            runtime.block_on(async {
                let db = InMemoryDb::new();
                let service = test_service(&db, RuleBasedSuggestionBackend);
                let user_id = Uuid::new_v4();
                let base = Utc::now();

                let mut timestamps = Vec::new();
                let mut last = None;
                for h in &hours_ago {
                    let eaten_at = base - Duration::hours(*h);
                    timestamps.push(eaten_at);
                    let outcome = service
                        .record_consumption(RecordConsumptionInput {
                            user_id,
                            food_name: "Rice".to_string(),
                            eaten_at,
                        })
                        .await
                        .unwrap();
                    last = Some(outcome.snapshot);
                }

                let snapshot = last.unwrap();
                let anchor = timestamps.iter().copied().max().unwrap();
                assert_eq!(snapshot.last_eaten_at, anchor);
                assert_eq!(snapshot.count_7d, FrequencyWindow::SevenDays.count(anchor, &timestamps));
                assert_eq!(snapshot.count_30d, FrequencyWindow::ThirtyDays.count(anchor, &timestamps));
            });
        }
    }
}
