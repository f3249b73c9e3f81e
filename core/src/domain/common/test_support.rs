//! In-memory port implementations for service tests. A single [`InMemoryDb`]
//! implements every repository trait over shared tables, so one mutex guard
//! plays the role of a database transaction.

use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicUsize, Ordering},
};

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{
    chain_suggestion::{
        entities::{ChainSuggestion, SuggestionCandidate, SuggestionRequest},
        ports::{ChainSuggestionRepository, SuggestionBackend},
        value_objects::{GetSuggestionHistoryFilter, SuggestionFeedback},
    },
    common::{entities::app_errors::CoreError, services::Service},
    food_profile::{entities::FoodProfile, ports::FoodProfileRepository},
    food_variation::{entities::FoodVariation, ports::FoodVariationRepository},
    frequency::{
        entities::{ConsumptionEvent, ConsumptionOutcome, FoodCount, FrequencySnapshot, FrequencyWindow},
        ports::FrequencyRepository,
    },
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    hyperfixation::{
        entities::{Hyperfixation, HyperfixationRule, HyperfixationTransition},
        ports::HyperfixationRepository,
    },
    insight::{entities::WeeklyInsight, ports::WeeklyInsightRepository},
    nutrition_settings::{entities::NutritionSettings, ports::NutritionSettingsRepository},
    rotation::{
        entities::RotationSchedule, ports::RotationScheduleRepository,
        value_objects::GetRotationSchedulesFilter,
    },
};

#[derive(Debug, Default)]
pub struct Tables {
    pub events: Vec<ConsumptionEvent>,
    pub frequencies: Vec<FrequencySnapshot>,
    pub hyperfixations: Vec<Hyperfixation>,
    pub profiles: Vec<FoodProfile>,
    pub variations: Vec<FoodVariation>,
    pub suggestions: Vec<ChainSuggestion>,
    pub rotations: Vec<RotationSchedule>,
    pub insights: Vec<WeeklyInsight>,
    pub nutrition_settings: Vec<NutritionSettings>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDb {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, profile: FoodProfile) -> Self {
        self.lock().profiles.push(profile);
        self
    }

    pub fn with_variation(self, variation: FoodVariation) -> Self {
        self.lock().variations.push(variation);
        self
    }

    pub fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }
}

pub type TestService<SB> = Service<
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    InMemoryDb,
    SB,
>;

pub fn test_service<SB: SuggestionBackend>(db: &InMemoryDb, backend: SB) -> TestService<SB> {
    Service::new(
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        db.clone(),
        backend,
    )
}

/// Backend that counts calls and answers from a fixed list (or fails).
#[derive(Debug, Clone)]
pub struct ScriptedBackend {
    calls: Arc<AtomicUsize>,
    response: Result<Vec<SuggestionCandidate>, CoreError>,
}

impl ScriptedBackend {
    pub fn returning(candidates: Vec<SuggestionCandidate>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            response: Ok(candidates),
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            response: Err(CoreError::ExternalServiceError("provider unreachable".into())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SuggestionBackend for ScriptedBackend {
    async fn generate(
        &self,
        _request: SuggestionRequest,
    ) -> Result<Vec<SuggestionCandidate>, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

fn same_pair(user_id: Uuid, food_name: &str) -> impl Fn(&&ConsumptionEvent) -> bool + '_ {
    move |e| e.user_id == user_id && e.food_name == food_name
}

fn window_events(tables: &Tables, user_id: Uuid, window: FrequencyWindow, as_of: DateTime<Utc>) -> Vec<&ConsumptionEvent> {
    tables
        .events
        .iter()
        .filter(|e| e.user_id == user_id && window.contains(as_of, e.eaten_at))
        .collect()
}

impl FrequencyRepository for InMemoryDb {
    async fn record_consumption(
        &self,
        event: ConsumptionEvent,
        rule: HyperfixationRule,
    ) -> Result<ConsumptionOutcome, CoreError> {
        let mut tables = self.lock();
        tables.events.push(event.clone());

        let timestamps: Vec<DateTime<Utc>> = tables
            .events
            .iter()
            .filter(same_pair(event.user_id, &event.food_name))
            .map(|e| e.eaten_at)
            .collect();

        let now = Utc::now();
        let position = tables
            .frequencies
            .iter()
            .position(|s| s.user_id == event.user_id && s.food_name == event.food_name);
        let index = match position {
            Some(index) => index,
            None => {
                tables.frequencies.push(FrequencySnapshot {
                    id: Uuid::new_v4(),
                    user_id: event.user_id,
                    food_name: event.food_name.clone(),
                    last_eaten_at: event.eaten_at,
                    count_7d: 0,
                    count_30d: 0,
                    updated_at: now,
                });
                tables.frequencies.len() - 1
            }
        };

        let snapshot = {
            let s = &mut tables.frequencies[index];
            s.last_eaten_at = s.last_eaten_at.max(event.eaten_at);
            s.count_7d = FrequencyWindow::SevenDays.count(s.last_eaten_at, &timestamps);
            s.count_30d = FrequencyWindow::ThirtyDays.count(s.last_eaten_at, &timestamps);
            s.updated_at = now;
            s.clone()
        };

        let hyperfixation = rule.evaluate(&snapshot).map(|signal| {
            match tables
                .hyperfixations
                .iter_mut()
                .find(|h| h.is_active && h.user_id == event.user_id && h.food_name == event.food_name)
            {
                Some(active) => {
                    active.observe(signal);
                    HyperfixationTransition::Updated(active.clone())
                }
                None => {
                    let opened = Hyperfixation::open(event.user_id, event.food_name.clone(), signal);
                    tables.hyperfixations.push(opened.clone());
                    HyperfixationTransition::Activated(opened)
                }
            }
        });

        Ok(ConsumptionOutcome {
            snapshot,
            hyperfixation,
        })
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<FrequencySnapshot>, CoreError> {
        let mut snapshots: Vec<FrequencySnapshot> = self
            .lock()
            .frequencies
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        snapshots.sort_by(|a, b| b.count_30d.cmp(&a.count_30d));
        Ok(snapshots)
    }

    async fn count_unique_foods(
        &self,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
    ) -> Result<i64, CoreError> {
        let tables = self.lock();
        let mut names: Vec<&str> = window_events(&tables, user_id, window, as_of)
            .into_iter()
            .map(|e| e.food_name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        Ok(names.len() as i64)
    }

    async fn count_events(
        &self,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
    ) -> Result<i64, CoreError> {
        Ok(window_events(&self.lock(), user_id, window, as_of).len() as i64)
    }

    async fn top_foods(
        &self,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<FoodCount>, CoreError> {
        let tables = self.lock();
        let mut counts: Vec<FoodCount> = Vec::new();
        for event in window_events(&tables, user_id, window, as_of) {
            match counts.iter_mut().find(|c| c.food_name == event.food_name) {
                Some(c) => c.count += 1,
                None => counts.push(FoodCount {
                    food_name: event.food_name.clone(),
                    count: 1,
                }),
            }
        }
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.food_name.cmp(&b.food_name)));
        counts.truncate(limit as usize);
        Ok(counts)
    }
}

impl HyperfixationRepository for InMemoryDb {
    async fn get_active_by_user(&self, user_id: Uuid) -> Result<Vec<Hyperfixation>, CoreError> {
        Ok(self
            .lock()
            .hyperfixations
            .iter()
            .filter(|h| h.user_id == user_id && h.is_active)
            .cloned()
            .collect())
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Hyperfixation>, CoreError> {
        let mut rows: Vec<Hyperfixation> = self
            .lock()
            .hyperfixations
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(rows)
    }

    async fn get_by_id(
        &self,
        hyperfixation_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Hyperfixation>, CoreError> {
        Ok(self
            .lock()
            .hyperfixations
            .iter()
            .find(|h| h.id == hyperfixation_id && h.user_id == user_id)
            .cloned())
    }

    async fn create_or_get_active(
        &self,
        hyperfixation: Hyperfixation,
    ) -> Result<Hyperfixation, CoreError> {
        let mut tables = self.lock();
        if let Some(active) = tables.hyperfixations.iter_mut().find(|h| {
            h.is_active && h.user_id == hyperfixation.user_id && h.food_name == hyperfixation.food_name
        }) {
            if hyperfixation.notes.is_some() {
                active.notes = hyperfixation.notes;
            }
            return Ok(active.clone());
        }

        tables.hyperfixations.push(hyperfixation.clone());
        Ok(hyperfixation)
    }

    async fn end(&self, hyperfixation: Hyperfixation) -> Result<Option<Hyperfixation>, CoreError> {
        let mut tables = self.lock();
        let Some(row) = tables
            .hyperfixations
            .iter_mut()
            .find(|h| h.id == hyperfixation.id && h.user_id == hyperfixation.user_id && h.is_active)
        else {
            return Ok(None);
        };
        *row = hyperfixation.clone();
        Ok(Some(hyperfixation))
    }
}

impl FoodProfileRepository for InMemoryDb {
    async fn get_by_name(&self, food_name: String) -> Result<Option<FoodProfile>, CoreError> {
        Ok(self
            .lock()
            .profiles
            .iter()
            .find(|p| p.food_name.eq_ignore_ascii_case(&food_name))
            .cloned())
    }
}

impl FoodVariationRepository for InMemoryDb {
    async fn get_by_food_name(&self, food_name: String) -> Result<Vec<FoodVariation>, CoreError> {
        Ok(self
            .lock()
            .variations
            .iter()
            .filter(|v| v.base_food_name.eq_ignore_ascii_case(&food_name))
            .cloned()
            .collect())
    }
}

impl ChainSuggestionRepository for InMemoryDb {
    async fn get_untried(
        &self,
        user_id: Uuid,
        current_food_name: String,
    ) -> Result<Vec<ChainSuggestion>, CoreError> {
        let mut rows: Vec<ChainSuggestion> = self
            .lock()
            .suggestions
            .iter()
            .filter(|s| s.user_id == user_id && s.current_food_name == current_food_name && !s.was_tried)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        Ok(rows)
    }

    async fn create_batch(
        &self,
        suggestions: Vec<ChainSuggestion>,
    ) -> Result<Vec<ChainSuggestion>, CoreError> {
        self.lock().suggestions.extend(suggestions.iter().cloned());
        Ok(suggestions)
    }

    async fn get_by_id(
        &self,
        suggestion_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ChainSuggestion>, CoreError> {
        Ok(self
            .lock()
            .suggestions
            .iter()
            .find(|s| s.id == suggestion_id && s.user_id == user_id)
            .cloned())
    }

    async fn record_feedback(
        &self,
        suggestion_id: Uuid,
        user_id: Uuid,
        feedback: SuggestionFeedback,
    ) -> Result<Option<ChainSuggestion>, CoreError> {
        let mut tables = self.lock();
        let Some(row) = tables
            .suggestions
            .iter_mut()
            .find(|s| s.id == suggestion_id && s.user_id == user_id && !s.was_tried)
        else {
            return Ok(None);
        };
        row.was_tried = true;
        row.was_liked = Some(feedback.was_liked);
        row.feedback = feedback.feedback;
        row.tried_at = Some(feedback.tried_at);
        Ok(Some(row.clone()))
    }

    async fn get_history(
        &self,
        user_id: Uuid,
        filter: GetSuggestionHistoryFilter,
    ) -> Result<Vec<ChainSuggestion>, CoreError> {
        let mut rows: Vec<ChainSuggestion> = self
            .lock()
            .suggestions
            .iter()
            .filter(|s| s.user_id == user_id)
            .filter(|s| filter.food_name.as_ref().is_none_or(|f| &s.current_food_name == f))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = filter.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }
}

impl RotationScheduleRepository for InMemoryDb {
    async fn create(&self, schedule: RotationSchedule) -> Result<RotationSchedule, CoreError> {
        self.lock().rotations.push(schedule.clone());
        Ok(schedule)
    }

    async fn get_by_id(
        &self,
        schedule_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<RotationSchedule>, CoreError> {
        Ok(self
            .lock()
            .rotations
            .iter()
            .find(|s| s.id == schedule_id && s.user_id == user_id)
            .cloned())
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetRotationSchedulesFilter,
    ) -> Result<Vec<RotationSchedule>, CoreError> {
        Ok(self
            .lock()
            .rotations
            .iter()
            .filter(|s| s.user_id == user_id && (!filter.active_only || s.is_active))
            .cloned()
            .collect())
    }

    async fn update(&self, schedule: RotationSchedule) -> Result<Option<RotationSchedule>, CoreError> {
        let mut tables = self.lock();
        let Some(row) = tables
            .rotations
            .iter_mut()
            .find(|s| s.id == schedule.id && s.user_id == schedule.user_id)
        else {
            return Ok(None);
        };
        *row = schedule.clone();
        Ok(Some(schedule))
    }

    async fn delete(&self, schedule_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let mut tables = self.lock();
        let before = tables.rotations.len();
        tables
            .rotations
            .retain(|s| !(s.id == schedule_id && s.user_id == user_id));
        Ok(tables.rotations.len() < before)
    }
}

impl WeeklyInsightRepository for InMemoryDb {
    async fn upsert(&self, insight: WeeklyInsight) -> Result<WeeklyInsight, CoreError> {
        let mut tables = self.lock();
        if let Some(row) = tables.insights.iter_mut().find(|i| {
            i.user_id == insight.user_id
                && i.week_start_date == insight.week_start_date
                && i.insight_type == insight.insight_type
        }) {
            row.message = insight.message;
            row.updated_at = insight.updated_at;
            return Ok(row.clone());
        }

        tables.insights.push(insight.clone());
        Ok(insight)
    }

    async fn get_by_week(
        &self,
        user_id: Uuid,
        week_start_date: NaiveDate,
    ) -> Result<Vec<WeeklyInsight>, CoreError> {
        Ok(self
            .lock()
            .insights
            .iter()
            .filter(|i| i.user_id == user_id && i.week_start_date == week_start_date && !i.is_dismissed)
            .cloned()
            .collect())
    }

    async fn dismiss(&self, insight_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let mut tables = self.lock();
        let Some(row) = tables
            .insights
            .iter_mut()
            .find(|i| i.id == insight_id && i.user_id == user_id)
        else {
            return Ok(false);
        };
        row.is_dismissed = true;
        Ok(true)
    }
}

impl NutritionSettingsRepository for InMemoryDb {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<NutritionSettings>, CoreError> {
        Ok(self
            .lock()
            .nutrition_settings
            .iter()
            .find(|s| s.user_id == user_id)
            .cloned())
    }

    async fn upsert(&self, settings: NutritionSettings) -> Result<NutritionSettings, CoreError> {
        let mut tables = self.lock();
        tables.nutrition_settings.retain(|s| s.user_id != settings.user_id);
        tables.nutrition_settings.push(settings.clone());
        Ok(settings)
    }
}

impl HealthCheckRepository for InMemoryDb {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            database: "in-memory".to_string(),
            status: "healthy".to_string(),
            response_time_ms: 0,
        })
    }
}
