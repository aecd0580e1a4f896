use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

/// Creates the fleet tables if they do not exist yet.
///
/// Column names and types match databases created by earlier deployments, so
/// this is safe to run against an existing store.
pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create robots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS robots (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            model TEXT,
            status TEXT DEFAULT 'Available'
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create operators table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS operators (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            role TEXT,
            qualified_models TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedule table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedule (
            id SERIAL PRIMARY KEY,
            robot_id INTEGER,
            operator_id INTEGER,
            project_name TEXT,
            start_time TIMESTAMP,
            end_time TIMESTAMP,
            FOREIGN KEY(robot_id) REFERENCES robots(id),
            FOREIGN KEY(operator_id) REFERENCES operators(id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_schedule_robot_id ON schedule(robot_id);
        CREATE INDEX IF NOT EXISTS idx_schedule_operator_id ON schedule(operator_id);
        CREATE INDEX IF NOT EXISTS idx_schedule_window ON schedule(start_time, end_time);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
