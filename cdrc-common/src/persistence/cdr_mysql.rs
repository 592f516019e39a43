use crate::{
    config::database::ConfigDatabase,
    persistence::{CdrStorage, PersistenceError, count_on_date_with},
};

use std::time::Duration;

use futures::{FutureExt, future::BoxFuture};
use sqlx::{MySqlPool, mysql::MySqlPoolOptions};
use time::Date;

#[derive(Debug, Clone)]
pub struct MysqlCdrStorage {
    pool: MySqlPool,
}

impl MysqlCdrStorage {
    /// Connections are opened on first use, so the server starts even while MySQL is down.
    pub fn new(config: &ConfigDatabase) -> Result<MysqlCdrStorage, PersistenceError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_lazy(config.url.as_str())
            .map_err(PersistenceError::by_connection)?;
        Ok(MysqlCdrStorage { pool })
    }
}

impl CdrStorage for MysqlCdrStorage {
    fn description(&self) -> String {
        "MySQL".to_string()
    }

    fn count_on_date<'a>(&'a self, date: Date, accountcode: &'a str) -> BoxFuture<'a, Result<usize, PersistenceError>> {
        async move { count_on_date_with(&self.pool, date, accountcode).await }.boxed()
    }
}
