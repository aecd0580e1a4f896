use crate::models::{DbBooking, DbScheduleRow};
use chrono::NaiveDateTime;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_booking(
    pool: &Pool<Postgres>,
    robot_id: i32,
    operator_id: i32,
    project_name: &str,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
) -> Result<DbBooking> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO schedule (robot_id, operator_id, project_name, start_time, end_time)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, robot_id, operator_id, project_name, start_time, end_time
        "#,
    )
    .bind(robot_id)
    .bind(operator_id)
    .bind(project_name)
    .bind(start_time)
    .bind(end_time)
    .fetch_one(pool)
    .await?;

    Ok(booking)
}

pub async fn get_bookings_by_robot_id(
    pool: &Pool<Postgres>,
    robot_id: i32,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, robot_id, operator_id, project_name, start_time, end_time
        FROM schedule
        WHERE robot_id = $1
        ORDER BY start_time ASC, id ASC
        "#,
    )
    .bind(robot_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn delete_booking(pool: &Pool<Postgres>, id: i32) -> Result<u64> {
    let deleted = sqlx::query(
        r#"
        DELETE FROM schedule
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(deleted)
}

pub async fn get_schedule_view(pool: &Pool<Postgres>) -> Result<Vec<DbScheduleRow>> {
    let rows = sqlx::query_as::<_, DbScheduleRow>(
        r#"
        SELECT s.id, r.name AS robot, o.name AS operator, s.project_name, s.start_time, s.end_time
        FROM schedule s
        JOIN robots r ON s.robot_id = r.id
        JOIN operators o ON s.operator_id = o.id
        ORDER BY s.start_time DESC, s.id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_schedule_row_by_id(
    pool: &Pool<Postgres>,
    id: i32,
) -> Result<Option<DbScheduleRow>> {
    let row = sqlx::query_as::<_, DbScheduleRow>(
        r#"
        SELECT s.id, r.name AS robot, o.name AS operator, s.project_name, s.start_time, s.end_time
        FROM schedule s
        JOIN robots r ON s.robot_id = r.id
        JOIN operators o ON s.operator_id = o.id
        WHERE s.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Schedule rows with `start_time <= at <= end_time`.
pub async fn count_engaged(pool: &Pool<Postgres>, at: NaiveDateTime) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM schedule
        WHERE start_time <= $1 AND end_time >= $1
        "#,
    )
    .bind(at)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn get_engaged_robot_ids(pool: &Pool<Postgres>, at: NaiveDateTime) -> Result<Vec<i32>> {
    let ids = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT DISTINCT robot_id
        FROM schedule
        WHERE start_time <= $1 AND end_time >= $1 AND robot_id IS NOT NULL
        ORDER BY robot_id ASC
        "#,
    )
    .bind(at)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}
