use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    chain_suggestion::ports::{ChainSuggestionRepository, SuggestionBackend},
    common::{
        entities::app_errors::CoreError, normalize_food_name, retry::retry_idempotent,
        services::Service,
    },
    food_profile::ports::FoodProfileRepository,
    food_variation::ports::FoodVariationRepository,
    frequency::ports::FrequencyRepository,
    health::ports::HealthCheckRepository,
    hyperfixation::{
        entities::Hyperfixation,
        ports::{HyperfixationRepository, HyperfixationService},
        value_objects::{EndHyperfixationInput, RecordHyperfixationInput},
    },
    insight::ports::WeeklyInsightRepository,
    nutrition_settings::ports::NutritionSettingsRepository,
    rotation::ports::RotationScheduleRepository,
};

impl<F, H, CS, FP, FV, RS, WI, NS, HC, SB> HyperfixationService
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
    async fn get_active_hyperfixations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Hyperfixation>, CoreError> {
        retry_idempotent("get_active_hyperfixations", || {
            self.hyperfixation_repository.get_active_by_user(user_id)
        })
        .await
    }

    async fn get_hyperfixation_history(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Hyperfixation>, CoreError> {
        retry_idempotent("get_hyperfixation_history", || {
            self.hyperfixation_repository.get_by_user(user_id)
        })
        .await
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, food_name = %input.food_name))]
    async fn record_hyperfixation(
        &self,
        input: RecordHyperfixationInput,
    ) -> Result<Hyperfixation, CoreError> {
        let food_name = normalize_food_name(&input.food_name);
        if food_name.is_empty() {
            return Err(CoreError::validation("food_name is required"));
        }

        let notes = input
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let hyperfixation = self
            .hyperfixation_repository
            .create_or_get_active(Hyperfixation::manual(input.user_id, food_name, notes))
            .await?;

        info!(hyperfixation_id = %hyperfixation.id, "repeat-food pattern recorded manually");
        Ok(hyperfixation)
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, hyperfixation_id = %input.hyperfixation_id))]
    async fn end_hyperfixation(
        &self,
        input: EndHyperfixationInput,
    ) -> Result<Hyperfixation, CoreError> {
        let mut hyperfixation = self
            .hyperfixation_repository
            .get_by_id(input.hyperfixation_id, input.user_id)
            .await?
            .ok_or(CoreError::NotFoundOrForbidden)?;

        hyperfixation.end()?;

        let ended = self
            .hyperfixation_repository
            .end(hyperfixation)
            .await?
            .ok_or_else(|| CoreError::validation("hyperfixation already ended"))?;

        info!("repeat-food pattern ended");
        Ok(ended)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{
        chain_suggestion::rules::RuleBasedSuggestionBackend,
        common::test_support::{InMemoryDb, test_service},
        frequency::{ports::FrequencyService, value_objects::RecordConsumptionInput},
    };

    fn record(user_id: Uuid, food_name: &str, notes: Option<&str>) -> RecordHyperfixationInput {
        RecordHyperfixationInput {
            user_id,
            food_name: food_name.to_string(),
            notes: notes.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_manual_record_is_seeded_and_listed() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        let h = service
            .record_hyperfixation(record(user_id, "Mac and cheese", Some("comfort food")))
            .await
            .unwrap();

        assert_eq!(h.frequency_count, 1);
        assert_eq!(h.notes.as_deref(), Some("comfort food"));
        assert_eq!(service.get_active_hyperfixations(user_id).await.unwrap(), vec![h]);
    }

    #[tokio::test]
    async fn test_manual_record_reuses_active_row() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        let first = service.record_hyperfixation(record(user_id, "Toast", None)).await.unwrap();
        let second = service
            .record_hyperfixation(record(user_id, "Toast", Some("every morning")))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.notes.as_deref(), Some("every morning"));
        assert_eq!(service.get_active_hyperfixations(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_end_is_manual_and_one_way() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();
        let h = service.record_hyperfixation(record(user_id, "Toast", None)).await.unwrap();

        let ended = service
            .end_hyperfixation(EndHyperfixationInput {
                user_id,
                hyperfixation_id: h.id,
            })
            .await
            .unwrap();
        assert!(!ended.is_active);
        assert!(ended.ended_at.is_some());

        let again = service
            .end_hyperfixation(EndHyperfixationInput {
                user_id,
                hyperfixation_id: h.id,
            })
            .await;
        assert!(matches!(again, Err(CoreError::Validation(_))));

        assert!(service.get_active_hyperfixations(user_id).await.unwrap().is_empty());
        assert_eq!(service.get_hyperfixation_history(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_end_of_foreign_or_missing_row_is_not_found() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let owner = Uuid::new_v4();
        let h = service.record_hyperfixation(record(owner, "Toast", None)).await.unwrap();

        for (user_id, hyperfixation_id) in [(Uuid::new_v4(), h.id), (owner, Uuid::new_v4())] {
            let result = service
                .end_hyperfixation(EndHyperfixationInput {
                    user_id,
                    hyperfixation_id,
                })
                .await;
            assert_eq!(result, Err(CoreError::NotFoundOrForbidden));
        }
        assert!(db.lock().hyperfixations[0].is_active);
    }

    #[tokio::test]
    async fn test_pattern_reopens_after_end_with_fresh_row() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();
        let log = |food: &str| RecordConsumptionInput {
            user_id,
            food_name: food.to_string(),
            eaten_at: Utc::now(),
        };

        for _ in 0..5 {
            service.record_consumption(log("Pizza")).await.unwrap();
        }
        let first = service.get_active_hyperfixations(user_id).await.unwrap().remove(0);
        service
            .end_hyperfixation(EndHyperfixationInput {
                user_id,
                hyperfixation_id: first.id,
            })
            .await
            .unwrap();

        service.record_consumption(log("Pizza")).await.unwrap();

        let active = service.get_active_hyperfixations(user_id).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_ne!(active[0].id, first.id);
        assert_eq!(active[0].frequency_count, 6);
        assert_eq!(service.get_hyperfixation_history(user_id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_peak_never_decreases_across_updates() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        let mut last_peak = 0.0;
        for days_ago in [0, 0, 0, 0, 0, 0, 20] {
            let outcome = service
                .record_consumption(RecordConsumptionInput {
                    user_id,
                    food_name: "Yogurt".to_string(),
                    eaten_at: Utc::now() - chrono::Duration::days(days_ago),
                })
                .await
                .unwrap();
            if let Some(transition) = outcome.hyperfixation {
                let peak = transition.hyperfixation().peak_frequency_per_day;
                assert!(peak >= last_peak);
                last_peak = peak;
            }
        }
        assert!((last_peak - 6.0 / 7.0).abs() < 1e-9);
    }
}
