//! Table definitions for the indexed struct models
//!
//! Tables are created in dependency order so the foreign keys of
//! `"MyComplexStruct"` resolve. Every statement is idempotent.

use sqlx::PgPool;

use crate::Result;

const CREATE_MY_STRUCT: &str = r#"CREATE TABLE IF NOT EXISTS "MyStruct" (
    id SERIAL PRIMARY KEY,
    one BIGINT NOT NULL,
    two BIGINT NOT NULL
)"#;

const CREATE_MY_OTHER_STRUCT: &str = r#"CREATE TABLE IF NOT EXISTS "MyOtherStruct" (
    id SERIAL PRIMARY KEY,
    value BIGINT NOT NULL
)"#;

const CREATE_MY_COMPLEX_STRUCT: &str = r#"CREATE TABLE IF NOT EXISTS "MyComplexStruct" (
    id SERIAL PRIMARY KEY,
    "oneId" INTEGER NOT NULL REFERENCES "MyStruct"(id),
    "twoId" INTEGER NOT NULL REFERENCES "MyOtherStruct"(id)
)"#;

/// DDL statements in the order they are applied
pub fn statements() -> &'static [&'static str] {
    &[
        CREATE_MY_STRUCT,
        CREATE_MY_OTHER_STRUCT,
        CREATE_MY_COMPLEX_STRUCT,
    ]
}

/// Create all tables inside a single transaction
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running migrations...");

    let mut tx = pool.begin().await?;
    for stmt in statements() {
        sqlx::query(stmt).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!(tables = statements().len(), "Migrations complete");
    Ok(())
}
