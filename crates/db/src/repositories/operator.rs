use crate::models::DbOperator;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_operator(
    pool: &Pool<Postgres>,
    name: &str,
    role: &str,
    qualified_models: &str,
) -> Result<DbOperator> {
    tracing::debug!(
        "Creating operator: name={}, role={}, qualified_models={}",
        name, role, qualified_models
    );

    let operator = sqlx::query_as::<_, DbOperator>(
        r#"
        INSERT INTO operators (name, role, qualified_models)
        VALUES ($1, $2, $3)
        RETURNING id, name, role, qualified_models
        "#,
    )
    .bind(name)
    .bind(role)
    .bind(qualified_models)
    .fetch_one(pool)
    .await?;

    Ok(operator)
}

pub async fn get_operator_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbOperator>> {
    let operator = sqlx::query_as::<_, DbOperator>(
        r#"
        SELECT id, name, role, qualified_models
        FROM operators
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(operator)
}

pub async fn get_all_operators(pool: &Pool<Postgres>) -> Result<Vec<DbOperator>> {
    let operators = sqlx::query_as::<_, DbOperator>(
        r#"
        SELECT id, name, role, qualified_models
        FROM operators
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(operators)
}
