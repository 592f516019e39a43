mod error;

pub use error::ApplicationError;

use cdrc_common::{clock::ArcClock, persistence::ArcCdrStorage};
use time::Date;

#[derive(Clone)]
pub struct Application {
    pub cdr: ArcCdrStorage,
    pub clock: ArcClock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodayCount {
    pub count: usize,
    pub date: Date,
}

impl Application {
    /// Counts CDRs billed to `accountcode` on the server's local "today", taken per call.
    /// Unknown account codes are not an error; they simply count zero.
    pub async fn count_today(&self, accountcode: &str) -> Result<TodayCount, ApplicationError> {
        let date = self.clock.today()?;
        let count = self.cdr.count_on_date(date, accountcode).await?;
        Ok(TodayCount { count, date })
    }
}
