//! Client handle trait and implementations
//!
//! - `PgStore`: PostgreSQL pool behind the handle
//! - `MockStore` (tests only): canned results, records every call
//!
//! `close` takes the handle by value, so it can run at most once.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::db::{self, ComplexStructRepo};
use crate::models::MyComplexStructWithRelations;
use crate::Result;

/// Open connection to the data store (testable)
#[async_trait]
pub trait Store: Send + Sync {
    /// All `MyComplexStruct` records with `one` and `two` eagerly loaded
    async fn find_many_complex_structs(&self) -> Result<Vec<MyComplexStructWithRelations>>;

    /// Release the connection
    async fn close(self) -> Result<()>;
}

/// Store backed by a PostgreSQL pool
#[derive(Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Open the pool; fails if no connection can be established
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = db::create_pool(config).await?;
        debug!("Database connection established");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_many_complex_structs(&self) -> Result<Vec<MyComplexStructWithRelations>> {
        ComplexStructRepo::new(&self.pool)
            .find_many_with_relations()
            .await
    }

    async fn close(self) -> Result<()> {
        self.pool.close().await;
        debug!("Database connection closed");
        Ok(())
    }
}
