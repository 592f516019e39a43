use crate::{
    config::database::ConfigDatabase,
    persistence::{CdrStorage, PersistenceError, count_on_date_with},
};

use std::time::Duration;

use futures::{FutureExt, future::BoxFuture};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use time::Date;

/// For local development and tests against a copy of the CDR table.
#[derive(Debug, Clone)]
pub struct SqliteCdrStorage {
    pool: SqlitePool,
}

impl SqliteCdrStorage {
    pub fn new(config: &ConfigDatabase) -> Result<SqliteCdrStorage, PersistenceError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_lazy(config.url.as_str())
            .map_err(PersistenceError::by_connection)?;
        Ok(SqliteCdrStorage { pool })
    }
}

impl CdrStorage for SqliteCdrStorage {
    fn description(&self) -> String {
        "SQLite".to_string()
    }

    fn count_on_date<'a>(&'a self, date: Date, accountcode: &'a str) -> BoxFuture<'a, Result<usize, PersistenceError>> {
        async move { count_on_date_with(&self.pool, date, accountcode).await }.boxed()
    }
}
