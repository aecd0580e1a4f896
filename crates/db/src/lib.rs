pub mod models;
pub mod repositories;
pub mod schema;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use eyre::Result;
use robotops_core::errors::{OpsError, OpsResult};
use robotops_core::models::{
    Booking, BookingCandidate, BookingId, NewOperator, NewRobot, Operator, OperatorId, Robot,
    RobotId, ScheduleView,
};
use robotops_core::store::EntityStore;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

use crate::models::readable_operators;
use crate::repositories::{operator, robot, schedule};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Maps a repository failure onto the domain taxonomy.
///
/// Lost connectivity becomes `StoreUnavailable` and foreign-key violations
/// become `ReferenceConflict`; everything else is carried as `Store`.
pub fn classify(report: eyre::Report) -> OpsError {
    if let Some(err) = report.downcast_ref::<sqlx::Error>() {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => {
                return OpsError::StoreUnavailable(err.to_string());
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                return OpsError::ReferenceConflict(db.message().to_string());
            }
            _ => {}
        }
    }
    OpsError::Store(report)
}

/// [`EntityStore`] backed by the Postgres tables created in [`schema`].
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn insert_robot(&self, new: NewRobot) -> OpsResult<Robot> {
        let row = robot::create_robot(&self.pool, &new.name, new.model.as_deref())
            .await
            .map_err(classify)?;
        Ok(row.into())
    }

    async fn get_robot(&self, id: RobotId) -> OpsResult<Option<Robot>> {
        let row = robot::get_robot_by_id(&self.pool, id)
            .await
            .map_err(classify)?;
        Ok(row.map(Robot::from))
    }

    async fn list_robots(&self) -> OpsResult<Vec<Robot>> {
        let rows = robot::get_all_robots(&self.pool).await.map_err(classify)?;
        Ok(rows.into_iter().map(Robot::from).collect())
    }

    async fn robot_models(&self) -> OpsResult<Vec<String>> {
        robot::get_distinct_models(&self.pool)
            .await
            .map_err(classify)
    }

    async fn delete_robot(&self, id: RobotId) -> OpsResult<()> {
        let (references, deleted) = robot::delete_robot(&self.pool, id)
            .await
            .map_err(classify)?;

        if references > 0 {
            return Err(OpsError::ReferenceConflict(format!(
                "Robot {} is referenced by {} schedule entries",
                id, references
            )));
        }
        if deleted == 0 {
            return Err(OpsError::NotFound(format!("Robot with ID {} not found", id)));
        }
        Ok(())
    }

    async fn insert_operator(&self, new: NewOperator) -> OpsResult<Operator> {
        let row = operator::create_operator(
            &self.pool,
            &new.name,
            new.role.as_str(),
            &new.qualified_models.to_column(),
        )
        .await
        .map_err(classify)?;
        Ok(Operator::try_from(row)?)
    }

    async fn get_operator(&self, id: OperatorId) -> OpsResult<Option<Operator>> {
        let row = operator::get_operator_by_id(&self.pool, id)
            .await
            .map_err(classify)?;
        Ok(row.map(Operator::try_from).transpose()?)
    }

    async fn list_operators(&self) -> OpsResult<Vec<Operator>> {
        let rows = operator::get_all_operators(&self.pool)
            .await
            .map_err(classify)?;
        Ok(readable_operators(rows))
    }

    async fn insert_booking(&self, booking: BookingCandidate) -> OpsResult<Booking> {
        let row = schedule::create_booking(
            &self.pool,
            booking.robot_id,
            booking.operator_id,
            &booking.project_name,
            booking.start_time,
            booking.end_time,
        )
        .await
        .map_err(classify)?;
        Ok(Booking::try_from(row)?)
    }

    async fn bookings_for_robot(&self, robot_id: RobotId) -> OpsResult<Vec<Booking>> {
        let rows = schedule::get_bookings_by_robot_id(&self.pool, robot_id)
            .await
            .map_err(classify)?;
        let bookings = rows
            .into_iter()
            .map(Booking::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(bookings)
    }

    async fn delete_booking(&self, id: BookingId) -> OpsResult<()> {
        let deleted = schedule::delete_booking(&self.pool, id)
            .await
            .map_err(classify)?;

        if deleted == 0 {
            return Err(OpsError::NotFound(format!(
                "Schedule entry with ID {} not found",
                id
            )));
        }
        Ok(())
    }

    async fn schedule_view(&self) -> OpsResult<Vec<ScheduleView>> {
        let rows = schedule::get_schedule_view(&self.pool)
            .await
            .map_err(classify)?;
        let view = rows
            .into_iter()
            .map(ScheduleView::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(view)
    }

    async fn schedule_entry(&self, id: BookingId) -> OpsResult<Option<ScheduleView>> {
        let row = schedule::get_schedule_row_by_id(&self.pool, id)
            .await
            .map_err(classify)?;
        Ok(row.map(ScheduleView::try_from).transpose()?)
    }

    async fn count_robots(&self) -> OpsResult<i64> {
        robot::count_robots(&self.pool).await.map_err(classify)
    }

    async fn count_engaged(&self, at: NaiveDateTime) -> OpsResult<i64> {
        schedule::count_engaged(&self.pool, at)
            .await
            .map_err(classify)
    }

    async fn engaged_robot_ids(&self, at: NaiveDateTime) -> OpsResult<Vec<RobotId>> {
        schedule::get_engaged_robot_ids(&self.pool, at)
            .await
            .map_err(classify)
    }
}
