mod cdr_mysql;
mod cdr_sqlite;
mod error;

pub use cdr_mysql::MysqlCdrStorage;
pub use cdr_sqlite::SqliteCdrStorage;
pub use error::PersistenceError;

use crate::{
    clock::format_date,
    config::database::{ConfigDatabase, ConfigDatabaseBackend},
};

use std::sync::Arc;

use futures::{TryFutureExt, future::BoxFuture};
use sqlx::{Database, Encode, Error as SqlxError, Executor, FromRow, IntoArguments, Pool, Type};
use time::Date;
use tracing::debug;

pub type ArcCdrStorage = Arc<dyn CdrStorage + 'static>;

/// Read access to the `cdr` table written by the telephony switch.
pub trait CdrStorage: Send + Sync {
    fn description(&self) -> String;

    /// Counts rows whose `DATE(calldate)` is `date` and whose `accountcode` matches exactly.
    fn count_on_date<'a>(&'a self, date: Date, accountcode: &'a str) -> BoxFuture<'a, Result<usize, PersistenceError>>;
}

/// Shared by every backend; both placeholders are bound, never interpolated.
const COUNT_ON_DATE_QUERY: &str = r#"SELECT COUNT(*) AS count FROM cdr WHERE DATE(calldate) = ? AND accountcode = ?;"#;

pub fn create_storage(config: &ConfigDatabase) -> Result<ArcCdrStorage, PersistenceError> {
    let storage: ArcCdrStorage = match config.backend {
        ConfigDatabaseBackend::Mysql => Arc::new(MysqlCdrStorage::new(config)?),
        ConfigDatabaseBackend::Sqlite => Arc::new(SqliteCdrStorage::new(config)?),
    };
    Ok(storage)
}

/// Runs the count on one connection taken from `pool`.
/// The connection goes back to the pool when dropped, on every path out of this function.
async fn count_on_date_with<DB>(pool: &Pool<DB>, date: Date, accountcode: &str) -> Result<usize, PersistenceError>
where
    DB: Database,
    for<'c> &'c mut DB::Connection: Executor<'c, Database = DB>,
    for<'q> DB::Arguments<'q>: IntoArguments<'q, DB>,
    for<'q> &'q str: Encode<'q, DB> + Type<DB>,
    for<'r> (i64,): FromRow<'r, DB::Row>,
{
    let date_str = format_date(date).map_err(PersistenceError::by_serialization)?;
    debug!("counting CDRs of {accountcode:?} on {date_str}");

    let mut conn = pool.acquire().map_err(PersistenceError::by_connection).await?;
    let (count,): (i64,) = sqlx::query_as(COUNT_ON_DATE_QUERY)
        .bind(date_str.as_str())
        .bind(accountcode)
        .fetch_one(&mut *conn)
        .map_err(classify_query_error)
        .await?;
    decode_count(count)
}

fn decode_count(raw: i64) -> Result<usize, PersistenceError> {
    usize::try_from(raw).map_err(PersistenceError::by_serialization)
}

/// A statement can also fail because the link to the server went away.
fn classify_query_error(err: SqlxError) -> PersistenceError {
    match err {
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed => PersistenceError::by_connection(err),
        err => PersistenceError::by_query(err),
    }
}
