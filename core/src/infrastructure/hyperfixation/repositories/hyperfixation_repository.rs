use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Order,
    QueryFilter, QueryOrder, QueryResult, Statement,
};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        hyperfixation::{
            entities::{Hyperfixation, HyperfixationSignal, HyperfixationTransition},
            ports::HyperfixationRepository,
        },
    },
    entity::hyperfixations::{ActiveModel, Column, Entity},
    infrastructure::store_error,
};

/// Opens the active record for the pair, or folds `signal` into the one that
/// is already open. Runs on the caller's connection so it can join the
/// consumption transaction.
pub(crate) async fn observe_active<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    food_name: &str,
    signal: HyperfixationSignal,
) -> Result<HyperfixationTransition, CoreError> {
    let opened = Hyperfixation::open(user_id, food_name.to_string(), signal);
    let stmt = Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Postgres,
        r#"
        INSERT INTO hyperfixations
            (id, user_id, food_name, started_at, ended_at, frequency_count,
             peak_frequency_per_day, is_active, notes, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NULL, $5, $6, TRUE, NULL, $4, $4)
        ON CONFLICT (user_id, food_name) WHERE is_active
        DO UPDATE SET
            frequency_count = EXCLUDED.frequency_count,
            peak_frequency_per_day = GREATEST(
                hyperfixations.peak_frequency_per_day,
                EXCLUDED.peak_frequency_per_day
            ),
            updated_at = EXCLUDED.updated_at
        RETURNING id, (xmax = 0) AS inserted
        "#,
        [
            opened.id.into(),
            opened.user_id.into(),
            opened.food_name.clone().into(),
            opened.started_at.fixed_offset().into(),
            opened.frequency_count.into(),
            opened.peak_frequency_per_day.into(),
        ],
    );

    let row = conn
        .query_one(stmt)
        .await
        .map_err(|e| store_error("upsert active hyperfixation", e))?
        .ok_or_else(|| CoreError::StoreUnavailable("hyperfixation upsert returned no row".to_string()))?;
    let id = returned_id(&row)?;
    let inserted = row
        .try_get::<bool>("", "inserted")
        .map_err(|e| store_error("read hyperfixation upsert outcome", e))?;

    let hyperfixation = find_by_id(conn, id).await?;
    Ok(if inserted {
        HyperfixationTransition::Activated(hyperfixation)
    } else {
        HyperfixationTransition::Updated(hyperfixation)
    })
}

fn returned_id(row: &QueryResult) -> Result<Uuid, CoreError> {
    row.try_get::<Uuid>("", "id")
        .map_err(|e| store_error("read hyperfixation id", e))
}

async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Hyperfixation, CoreError> {
    Entity::find_by_id(id)
        .one(conn)
        .await
        .map_err(|e| store_error("get hyperfixation", e))?
        .map(Hyperfixation::from)
        .ok_or_else(|| CoreError::StoreUnavailable(format!("hyperfixation {} vanished", id)))
}

#[derive(Debug, Clone)]
pub struct PostgresHyperfixationRepository {
    pub db: DatabaseConnection,
}

impl PostgresHyperfixationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HyperfixationRepository for PostgresHyperfixationRepository {
    async fn get_active_by_user(&self, user_id: Uuid) -> Result<Vec<Hyperfixation>, CoreError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsActive.eq(true))
            .order_by(Column::StartedAt, Order::Desc)
            .all(&self.db)
            .await
            .map_err(|e| store_error("get active hyperfixations", e))?;

        Ok(rows.into_iter().map(Hyperfixation::from).collect())
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Hyperfixation>, CoreError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by(Column::StartedAt, Order::Desc)
            .all(&self.db)
            .await
            .map_err(|e| store_error("get hyperfixation history", e))?;

        Ok(rows.into_iter().map(Hyperfixation::from).collect())
    }

    async fn get_by_id(
        &self,
        hyperfixation_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Hyperfixation>, CoreError> {
        let row = Entity::find()
            .filter(Column::Id.eq(hyperfixation_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| store_error("get hyperfixation", e))?;

        Ok(row.map(Hyperfixation::from))
    }

    async fn create_or_get_active(
        &self,
        hyperfixation: Hyperfixation,
    ) -> Result<Hyperfixation, CoreError> {
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            INSERT INTO hyperfixations
                (id, user_id, food_name, started_at, ended_at, frequency_count,
                 peak_frequency_per_day, is_active, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NULL, $5, $6, TRUE, $7, $8, $9)
            ON CONFLICT (user_id, food_name) WHERE is_active
            DO UPDATE SET
                notes = COALESCE(EXCLUDED.notes, hyperfixations.notes),
                updated_at = EXCLUDED.updated_at
            RETURNING id
            "#,
            [
                hyperfixation.id.into(),
                hyperfixation.user_id.into(),
                hyperfixation.food_name.clone().into(),
                hyperfixation.started_at.fixed_offset().into(),
                hyperfixation.frequency_count.into(),
                hyperfixation.peak_frequency_per_day.into(),
                hyperfixation.notes.clone().into(),
                hyperfixation.created_at.fixed_offset().into(),
                hyperfixation.updated_at.fixed_offset().into(),
            ],
        );

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(|e| store_error("create hyperfixation", e))?
            .ok_or_else(|| CoreError::StoreUnavailable("hyperfixation insert returned no row".to_string()))?;
        let id = returned_id(&row)?;

        find_by_id(&self.db, id).await
    }

    async fn end(&self, hyperfixation: Hyperfixation) -> Result<Option<Hyperfixation>, CoreError> {
        let result = Entity::update_many()
            .set(ActiveModel {
                is_active: Set(false),
                ended_at: Set(hyperfixation.ended_at.map(|t| t.fixed_offset())),
                updated_at: Set(hyperfixation.updated_at.fixed_offset()),
                ..Default::default()
            })
            .filter(Column::Id.eq(hyperfixation.id))
            .filter(Column::UserId.eq(hyperfixation.user_id))
            .filter(Column::IsActive.eq(true))
            .exec(&self.db)
            .await
            .map_err(|e| store_error("end hyperfixation", e))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        find_by_id(&self.db, hyperfixation.id).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};

    use super::*;
    use crate::entity::hyperfixations::Model;

    fn active_row(id: Uuid, user_id: Uuid, frequency_count: i32, peak: f64) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            user_id,
            food_name: "Pizza".to_string(),
            started_at: now,
            ended_at: None,
            frequency_count,
            peak_frequency_per_day: peak,
            is_active: true,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn upsert_result(id: Uuid, inserted: Option<bool>) -> BTreeMap<&'static str, Value> {
        let mut row = BTreeMap::from([("id", Value::from(id))]);
        if let Some(inserted) = inserted {
            row.insert("inserted", Value::from(inserted));
        }
        row
    }

    fn executed_sql(db: DatabaseConnection) -> Vec<String> {
        db.into_transaction_log()
            .iter()
            .flat_map(|t| t.statements().iter().map(|s| s.sql.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_first_threshold_crossing_activates() {
        let (id, user_id) = (Uuid::new_v4(), Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[upsert_result(id, Some(true))]])
            .append_query_results([[active_row(id, user_id, 5, 5.0 / 7.0)]])
            .into_connection();

        let transition = observe_active(&db, user_id, "Pizza", HyperfixationSignal::from_count_7d(5))
            .await
            .unwrap();

        match transition {
            HyperfixationTransition::Activated(h) => {
                assert_eq!(h.id, id);
                assert_eq!(h.frequency_count, 5);
            }
            other => panic!("expected activation, got {other:?}"),
        }

        let sql = executed_sql(db);
        assert!(sql[0].contains("ON CONFLICT (user_id, food_name) WHERE is_active"));
        assert!(sql[0].contains("GREATEST("));
        assert!(sql[0].contains("RETURNING id, (xmax = 0) AS inserted"));
    }

    #[tokio::test]
    async fn test_existing_active_row_is_updated() {
        let (id, user_id) = (Uuid::new_v4(), Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[upsert_result(id, Some(false))]])
            .append_query_results([[active_row(id, user_id, 6, 6.0 / 7.0)]])
            .into_connection();

        let transition = observe_active(&db, user_id, "Pizza", HyperfixationSignal::from_count_7d(6))
            .await
            .unwrap();

        assert!(matches!(transition, HyperfixationTransition::Updated(ref h) if h.frequency_count == 6));
    }

    #[tokio::test]
    async fn test_missing_upsert_outcome_is_a_store_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[upsert_result(Uuid::new_v4(), None)]])
            .into_connection();

        let result =
            observe_active(&db, Uuid::new_v4(), "Pizza", HyperfixationSignal::from_count_7d(5)).await;

        assert!(matches!(result, Err(CoreError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_end_on_inactive_row_returns_none() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([sea_orm::MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repository = PostgresHyperfixationRepository::new(db);

        let mut hyperfixation = Hyperfixation::from(active_row(Uuid::new_v4(), user_id, 5, 0.7));
        hyperfixation.end().unwrap();

        assert_eq!(repository.end(hyperfixation).await.unwrap(), None);
    }
}
