use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Order,
    QueryFilter, QueryOrder, Statement, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        frequency::{
            entities::{
                ConsumptionEvent, ConsumptionOutcome, FoodCount, FrequencySnapshot, FrequencyWindow,
            },
            ports::FrequencyRepository,
        },
        hyperfixation::entities::HyperfixationRule,
    },
    entity::{
        food_consumption_events::{ActiveModel as EventActiveModel, Entity as EventEntity},
        food_frequencies::{Column, Entity},
    },
    infrastructure::{
        hyperfixation::repositories::hyperfixation_repository::observe_active, store_error,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresFrequencyRepository {
    pub db: DatabaseConnection,
}

impl PostgresFrequencyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn window_statement(
        sql: &str,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
    ) -> Statement {
        Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            sql,
            [
                user_id.into(),
                window.start(as_of).fixed_offset().into(),
                as_of.fixed_offset().into(),
            ],
        )
    }

    async fn count_in_window(
        &self,
        sql: &str,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
    ) -> Result<i64, CoreError> {
        let row = self
            .db
            .query_one(Self::window_statement(sql, user_id, window, as_of))
            .await
            .map_err(|e| store_error("count consumption events", e))?;

        row.ok_or_else(|| CoreError::StoreUnavailable("count query returned no row".to_string()))?
            .try_get::<i64>("", "count")
            .map_err(|e| store_error("read consumption count", e))
    }
}

impl FrequencyRepository for PostgresFrequencyRepository {
    async fn record_consumption(
        &self,
        event: ConsumptionEvent,
        rule: HyperfixationRule,
    ) -> Result<ConsumptionOutcome, CoreError> {
        let (now, timestamp) = generate_timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| store_error("begin consumption transaction", e))?;

        // Upserting the snapshot row first takes its row lock, so concurrent
        // events for the same pair recount one after the other.
        let upsert = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            INSERT INTO food_frequencies
                (id, user_id, food_name, last_eaten_at, count_7d, count_30d, created_at, updated_at)
            VALUES ($1, $2, $3, $4, 0, 0, $5, $5)
            ON CONFLICT (user_id, food_name) DO UPDATE
            SET last_eaten_at = GREATEST(food_frequencies.last_eaten_at, EXCLUDED.last_eaten_at),
                updated_at = EXCLUDED.updated_at
            "#,
            [
                Uuid::new_v7(timestamp).into(),
                event.user_id.into(),
                event.food_name.clone().into(),
                event.eaten_at.fixed_offset().into(),
                now.fixed_offset().into(),
            ],
        );
        txn.execute(upsert)
            .await
            .map_err(|e| store_error("upsert food frequency", e))?;

        EventEntity::insert(EventActiveModel {
            id: Set(Uuid::new_v7(timestamp)),
            user_id: Set(event.user_id),
            food_name: Set(event.food_name.clone()),
            eaten_at: Set(event.eaten_at.fixed_offset()),
            created_at: Set(now.fixed_offset()),
        })
        .exec(&txn)
        .await
        .map_err(|e| store_error("insert consumption event", e))?;

        let recount = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            UPDATE food_frequencies f
            SET count_7d = (
                    SELECT COUNT(*) FROM food_consumption_events e
                    WHERE e.user_id = f.user_id AND e.food_name = f.food_name
                      AND e.eaten_at > f.last_eaten_at - make_interval(days => $3::int)
                      AND e.eaten_at <= f.last_eaten_at
                ),
                count_30d = (
                    SELECT COUNT(*) FROM food_consumption_events e
                    WHERE e.user_id = f.user_id AND e.food_name = f.food_name
                      AND e.eaten_at > f.last_eaten_at - make_interval(days => $4::int)
                      AND e.eaten_at <= f.last_eaten_at
                )
            WHERE f.user_id = $1 AND f.food_name = $2
            RETURNING f.*
            "#,
            [
                event.user_id.into(),
                event.food_name.clone().into(),
                (FrequencyWindow::SevenDays.days() as i32).into(),
                (FrequencyWindow::ThirtyDays.days() as i32).into(),
            ],
        );
        let snapshot: FrequencySnapshot = Entity::find()
            .from_raw_sql(recount)
            .one(&txn)
            .await
            .map_err(|e| store_error("recount food frequency", e))?
            .ok_or_else(|| CoreError::StoreUnavailable("food frequency row vanished".to_string()))?
            .into();

        let hyperfixation = match rule.evaluate(&snapshot) {
            Some(signal) => {
                Some(observe_active(&txn, event.user_id, &event.food_name, signal).await?)
            }
            None => None,
        };

        txn.commit()
            .await
            .map_err(|e| store_error("commit consumption transaction", e))?;

        Ok(ConsumptionOutcome {
            snapshot,
            hyperfixation,
        })
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<FrequencySnapshot>, CoreError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by(Column::Count30d, Order::Desc)
            .order_by(Column::FoodName, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| store_error("get food frequencies", e))?;

        Ok(rows.into_iter().map(FrequencySnapshot::from).collect())
    }

    async fn count_unique_foods(
        &self,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
    ) -> Result<i64, CoreError> {
        self.count_in_window(
            r#"
            SELECT COUNT(DISTINCT food_name) AS count
            FROM food_consumption_events
            WHERE user_id = $1 AND eaten_at > $2 AND eaten_at <= $3
            "#,
            user_id,
            window,
            as_of,
        )
        .await
    }

    async fn count_events(
        &self,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
    ) -> Result<i64, CoreError> {
        self.count_in_window(
            r#"
            SELECT COUNT(*) AS count
            FROM food_consumption_events
            WHERE user_id = $1 AND eaten_at > $2 AND eaten_at <= $3
            "#,
            user_id,
            window,
            as_of,
        )
        .await
    }

    async fn top_foods(
        &self,
        user_id: Uuid,
        window: FrequencyWindow,
        as_of: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<FoodCount>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT food_name, COUNT(*) AS count
            FROM food_consumption_events
            WHERE user_id = $1 AND eaten_at > $2 AND eaten_at <= $3
            GROUP BY food_name
            ORDER BY count DESC, food_name ASC
            LIMIT $4
            "#,
            [
                user_id.into(),
                window.start(as_of).fixed_offset().into(),
                as_of.fixed_offset().into(),
                (limit as i64).into(),
            ],
        );

        let rows = self
            .db
            .query_all(stmt)
            .await
            .map_err(|e| store_error("get top foods", e))?;

        rows.into_iter()
            .map(|row| {
                Ok(FoodCount {
                    food_name: row
                        .try_get("", "food_name")
                        .map_err(|e| store_error("read top foods", e))?,
                    count: row
                        .try_get("", "count")
                        .map_err(|e| store_error("read top foods", e))?,
                })
            })
            .collect()
    }
}
