use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    chain_suggestion::{
        entities::{ChainSuggestion, SuggestionCandidate, SuggestionRequest},
        ports::{ChainSuggestionRepository, ChainSuggestionService, SuggestionBackend},
        rules::RuleBasedSuggestionBackend,
        value_objects::{
            GenerateSuggestionsInput, GetSuggestionHistoryFilter, RecordFeedbackInput,
            SuggestionFeedback,
        },
    },
    common::{
        entities::app_errors::CoreError,
        normalize_food_name,
        retry::retry_idempotent,
        services::Service,
        tone::{is_gentle, mentions_sensory_trait},
    },
    food_profile::ports::FoodProfileRepository,
    food_variation::ports::FoodVariationRepository,
    frequency::ports::FrequencyRepository,
    health::ports::HealthCheckRepository,
    hyperfixation::ports::HyperfixationRepository,
    insight::ports::WeeklyInsightRepository,
    nutrition_settings::ports::NutritionSettingsRepository,
    rotation::ports::RotationScheduleRepository,
};

const DEFAULT_HISTORY_LIMIT: u32 = 50;
const MAX_HISTORY_LIMIT: u32 = 200;

/// Keeps the candidates that can be shown as-is: named, scored in [0, 1],
/// gently worded, grounded in a sensory trait, not the current food and not
/// already waiting untried for this user.
fn usable_candidates(
    current_food_name: &str,
    existing: &[ChainSuggestion],
    candidates: Vec<SuggestionCandidate>,
) -> Vec<SuggestionCandidate> {
    let mut seen: HashSet<String> = existing
        .iter()
        .map(|s| s.suggested_food_name.to_lowercase())
        .collect();
    seen.insert(current_food_name.to_lowercase());

    candidates
        .into_iter()
        .filter_map(|c| {
            let food_name = normalize_food_name(&c.food_name);
            let reasoning = c.reasoning.trim().to_string();
            let usable = !food_name.is_empty()
                && !reasoning.is_empty()
                && (0.0..=1.0).contains(&c.similarity_score)
                && is_gentle(&food_name)
                && is_gentle(&reasoning)
                && mentions_sensory_trait(&reasoning)
                && seen.insert(food_name.to_lowercase());

            usable.then(|| SuggestionCandidate::new(food_name, c.similarity_score, reasoning))
        })
        .collect()
}

fn by_score_desc(a: &ChainSuggestion, b: &ChainSuggestion) -> std::cmp::Ordering {
    b.similarity_score.total_cmp(&a.similarity_score)
}

impl<F, H, CS, FP, FV, RS, WI, NS, HC, SB> ChainSuggestionService
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
    #[instrument(
        skip(self, input),
        fields(user_id = %input.user_id, food_name = %input.food_name, count = input.count)
    )]
    async fn generate_suggestions(
        &self,
        input: GenerateSuggestionsInput,
    ) -> Result<Vec<ChainSuggestion>, CoreError> {
        input.validate()?;

        let food_name = normalize_food_name(&input.food_name);
        let count = input.count as usize;

        // 1. Serve the untried cache when it covers the request
        let mut existing = retry_idempotent("get_untried_suggestions", || {
            self.chain_suggestion_repository
                .get_untried(input.user_id, food_name.clone())
        })
        .await?;

        if existing.len() >= count {
            info!(cached = existing.len(), "serving cached suggestions");
            existing.sort_by(by_score_desc);
            existing.truncate(count);
            return Ok(existing);
        }

        // 2. Ask the backend, falling back to the rule table on failure
        let profile = retry_idempotent("get_food_profile", || {
            self.food_profile_repository.get_by_name(food_name.clone())
        })
        .await?;

        let request = SuggestionRequest {
            food_name: food_name.clone(),
            profile,
            count,
        };

        let candidates = match self.suggestion_backend.generate(request.clone()).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("suggestion backend failed, using rule table: {}", e);
                Vec::new()
            }
        };

        let mut fresh = usable_candidates(&food_name, &existing, candidates);
        if fresh.is_empty() {
            warn!("suggestion backend returned nothing usable, using rule table");
            fresh = usable_candidates(
                &food_name,
                &existing,
                RuleBasedSuggestionBackend::new().suggest(&request),
            );
        }

        fresh.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        fresh.truncate(count - existing.len());

        // 3. Persist the new batch and merge it with what was cached
        let rows = fresh
            .into_iter()
            .map(|c| ChainSuggestion::new(input.user_id, food_name.clone(), c))
            .collect::<Vec<_>>();

        let created = if rows.is_empty() {
            Vec::new()
        } else {
            self.chain_suggestion_repository.create_batch(rows).await?
        };

        info!(created = created.len(), cached = existing.len(), "suggestions generated");

        let mut suggestions = existing;
        suggestions.extend(created);
        suggestions.sort_by(by_score_desc);
        suggestions.truncate(count);

        Ok(suggestions)
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, suggestion_id = %input.suggestion_id))]
    async fn record_feedback(&self, input: RecordFeedbackInput) -> Result<ChainSuggestion, CoreError> {
        let feedback = SuggestionFeedback {
            was_liked: input.was_liked,
            feedback: input
                .feedback
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
            tried_at: Utc::now(),
        };

        if let Some(suggestion) = self
            .chain_suggestion_repository
            .record_feedback(input.suggestion_id, input.user_id, feedback)
            .await?
        {
            return Ok(suggestion);
        }

        match self
            .chain_suggestion_repository
            .get_by_id(input.suggestion_id, input.user_id)
            .await?
        {
            Some(_) => Err(CoreError::validation("feedback already recorded")),
            None => Err(CoreError::NotFoundOrForbidden),
        }
    }

    async fn get_suggestion_history(
        &self,
        user_id: Uuid,
        filter: GetSuggestionHistoryFilter,
    ) -> Result<Vec<ChainSuggestion>, CoreError> {
        let filter = GetSuggestionHistoryFilter {
            food_name: filter
                .food_name
                .map(|f| normalize_food_name(&f))
                .filter(|f| !f.is_empty()),
            limit: Some(
                filter
                    .limit
                    .unwrap_or(DEFAULT_HISTORY_LIMIT)
                    .clamp(1, MAX_HISTORY_LIMIT),
            ),
        };

        retry_idempotent("get_suggestion_history", || {
            self.chain_suggestion_repository
                .get_history(user_id, filter.clone())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chain_suggestion::ports::MockChainSuggestionRepository,
        common::{
            test_support::{InMemoryDb, ScriptedBackend, test_service},
            tone::BANNED_PHRASES,
        },
        food_profile::entities::FoodProfile,
    };

    fn generate(user_id: Uuid, food_name: &str, count: u32) -> GenerateSuggestionsInput {
        GenerateSuggestionsInput {
            user_id,
            food_name: food_name.to_string(),
            count,
        }
    }

    fn feedback(user_id: Uuid, suggestion_id: Uuid) -> RecordFeedbackInput {
        RecordFeedbackInput {
            suggestion_id,
            user_id,
            was_liked: true,
            feedback: Some("crunchy, liked it".to_string()),
        }
    }

    #[tokio::test]
    async fn test_chicken_nuggets_yield_close_chicken_match() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        let suggestions = service
            .generate_suggestions(generate(user_id, "Chicken nuggets", 5))
            .await
            .unwrap();

        assert_eq!(suggestions.len(), 5);
        assert!(suggestions.iter().any(|s| {
            s.suggested_food_name.to_lowercase().contains("chicken") && s.similarity_score >= 0.8
        }));
        assert!(suggestions.iter().all(|s| !s.reasoning.is_empty() && !s.was_tried));
        assert!(suggestions.windows(2).all(|w| w[0].similarity_score >= w[1].similarity_score));
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let db = InMemoryDb::new();
        let backend = ScriptedBackend::returning(
            RuleBasedSuggestionBackend::new().suggest(&SuggestionRequest {
                food_name: "Pizza".to_string(),
                profile: None,
                count: 5,
            }),
        );
        let service = test_service(&db, backend.clone());
        let user_id = Uuid::new_v4();

        let first = service.generate_suggestions(generate(user_id, "Pizza", 5)).await.unwrap();
        let second = service.generate_suggestions(generate(user_id, "Pizza", 5)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(backend.calls(), 1);
        assert_eq!(db.lock().suggestions.len(), 5);
    }

    #[tokio::test]
    async fn test_feedback_on_all_allows_fresh_generation() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        let first = service
            .generate_suggestions(generate(user_id, "Chicken nuggets", 5))
            .await
            .unwrap();
        for s in &first {
            service.record_feedback(feedback(user_id, s.id)).await.unwrap();
        }

        let third = service
            .generate_suggestions(generate(user_id, "Chicken nuggets", 5))
            .await
            .unwrap();

        assert!(!third.is_empty());
        assert!(third.iter().all(|s| first.iter().all(|f| f.id != s.id)));
        assert!(third.iter().all(|s| !s.was_tried));
    }

    #[tokio::test]
    async fn test_partial_cache_is_topped_up_without_duplicates() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        let first = service
            .generate_suggestions(generate(user_id, "Chicken nuggets", 2))
            .await
            .unwrap();
        let second = service
            .generate_suggestions(generate(user_id, "Chicken nuggets", 5))
            .await
            .unwrap();

        assert_eq!(second.len(), 5);
        assert!(first.iter().all(|f| second.iter().any(|s| s.id == f.id)));

        let mut names: Vec<String> = second
            .iter()
            .map(|s| s.suggested_food_name.to_lowercase())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back_to_rules() {
        let db = InMemoryDb::new();
        let backend = ScriptedBackend::failing();
        let service = test_service(&db, backend.clone());

        let suggestions = service
            .generate_suggestions(generate(Uuid::new_v4(), "Dragon fruit", 3))
            .await
            .unwrap();

        assert_eq!(backend.calls(), 1);
        assert_eq!(suggestions.len(), 3);
    }

    #[tokio::test]
    async fn test_unusable_candidates_are_discarded() {
        let db = InMemoryDb::new();
        let backend = ScriptedBackend::returning(vec![
            SuggestionCandidate::new("Pizza", 0.99, "Same cheesy flavor"),
            SuggestionCandidate::new("Flatbread", 0.9, "You should eat this, warm and crisp"),
            SuggestionCandidate::new("Calzone", 0.85, "Very similar"),
            SuggestionCandidate::new("Garlic bread", 1.4, "Warm and buttery"),
            SuggestionCandidate::new("Cheesy bread", 0.8, "Warm, cheesy and soft"),
            SuggestionCandidate::new("cheesy  bread", 0.7, "Soft and cheesy"),
        ]);
        let service = test_service(&db, backend);

        let suggestions = service
            .generate_suggestions(generate(Uuid::new_v4(), "Pizza", 5))
            .await
            .unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggested_food_name, "Cheesy bread");
    }

    #[tokio::test]
    async fn test_profile_reaches_the_backend() {
        let db = InMemoryDb::new()
            .with_profile(FoodProfile::new("Veggie straws").with_texture("crunchy"));
        let service = test_service(&db, RuleBasedSuggestionBackend);

        let suggestions = service
            .generate_suggestions(generate(Uuid::new_v4(), "Veggie straws", 1))
            .await
            .unwrap();

        assert_eq!(suggestions[0].suggested_food_name, "Pretzels");
    }

    #[tokio::test]
    async fn test_generated_text_is_gentle_for_any_food() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        for food in ["Chicken nuggets", "Mac and cheese", "Yogurt", "Mystery stew", "x"] {
            let suggestions = service
                .generate_suggestions(generate(user_id, food, 10))
                .await
                .unwrap();
            assert!(!suggestions.is_empty(), "{food}");
            for s in suggestions {
                for text in [&s.suggested_food_name, &s.reasoning] {
                    let lowered = text.to_lowercase();
                    assert!(BANNED_PHRASES.iter().all(|p| !lowered.contains(p)), "{text}");
                }
            }
        }
    }

    #[tokio::test]
    async fn test_invalid_count_is_rejected_before_any_store_access() {
        let db = InMemoryDb::new();
        let service = Service::new(
            db.clone(),
            db.clone(),
            MockChainSuggestionRepository::new(),
            db.clone(),
            db.clone(),
            db.clone(),
            db.clone(),
            db.clone(),
            db,
            RuleBasedSuggestionBackend,
        );

        for count in [0, 11] {
            let result = service
                .generate_suggestions(generate(Uuid::new_v4(), "Pizza", count))
                .await;
            assert!(matches!(result, Err(CoreError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_feedback_ownership_and_single_use() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let owner = Uuid::new_v4();
        let suggestion = service
            .generate_suggestions(generate(owner, "Toast", 1))
            .await
            .unwrap()
            .remove(0);

        let stranger = service.record_feedback(feedback(Uuid::new_v4(), suggestion.id)).await;
        assert_eq!(stranger, Err(CoreError::NotFoundOrForbidden));

        let missing = service.record_feedback(feedback(owner, Uuid::new_v4())).await;
        assert_eq!(missing, Err(CoreError::NotFoundOrForbidden));

        let tried = service.record_feedback(feedback(owner, suggestion.id)).await.unwrap();
        assert!(tried.was_tried);
        assert_eq!(tried.was_liked, Some(true));
        assert!(tried.tried_at.is_some());

        let again = service.record_feedback(feedback(owner, suggestion.id)).await;
        assert!(matches!(again, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_history_filters_by_food() {
        let db = InMemoryDb::new();
        let service = test_service(&db, RuleBasedSuggestionBackend);
        let user_id = Uuid::new_v4();

        service.generate_suggestions(generate(user_id, "Toast", 2)).await.unwrap();
        service.generate_suggestions(generate(user_id, "Pizza", 3)).await.unwrap();

        let all = service
            .get_suggestion_history(user_id, GetSuggestionHistoryFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 5);

        let toast = service
            .get_suggestion_history(
                user_id,
                GetSuggestionHistoryFilter {
                    food_name: Some(" Toast ".to_string()),
                    limit: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(toast.len(), 2);
        assert!(toast.iter().all(|s| s.current_food_name == "Toast"));
    }
}
