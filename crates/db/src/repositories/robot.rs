use crate::models::DbRobot;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_robot(
    pool: &Pool<Postgres>,
    name: &str,
    model: Option<&str>,
) -> Result<DbRobot> {
    tracing::debug!("Creating robot: name={}, model={:?}", name, model);

    let robot = sqlx::query_as::<_, DbRobot>(
        r#"
        INSERT INTO robots (name, model)
        VALUES ($1, $2)
        RETURNING id, name, model, status
        "#,
    )
    .bind(name)
    .bind(model)
    .fetch_one(pool)
    .await?;

    Ok(robot)
}

pub async fn get_robot_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbRobot>> {
    let robot = sqlx::query_as::<_, DbRobot>(
        r#"
        SELECT id, name, model, status
        FROM robots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(robot)
}

pub async fn get_all_robots(pool: &Pool<Postgres>) -> Result<Vec<DbRobot>> {
    let robots = sqlx::query_as::<_, DbRobot>(
        r#"
        SELECT id, name, model, status
        FROM robots
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(robots)
}

pub async fn get_distinct_models(pool: &Pool<Postgres>) -> Result<Vec<String>> {
    let models = sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT model
        FROM robots
        WHERE model IS NOT NULL AND model <> ''
        ORDER BY model ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(models)
}

pub async fn count_robots(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM robots")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Deletes a robot unless schedule rows still reference it.
///
/// The reference check and the delete share one transaction; the foreign key
/// on `schedule.robot_id` backs this up for writers that slip in between.
/// Returns the number of schedule rows blocking the delete (0 on success) and
/// the number of robots removed.
pub async fn delete_robot(pool: &Pool<Postgres>, id: i32) -> Result<(i64, u64)> {
    let mut tx = pool.begin().await?;

    let references = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM schedule
        WHERE robot_id = $1
        "#,
    )
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    if references > 0 {
        tx.rollback().await?;
        return Ok((references, 0));
    }

    let deleted = sqlx::query(
        r#"
        DELETE FROM robots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    tx.commit().await?;
    Ok((0, deleted))
}
