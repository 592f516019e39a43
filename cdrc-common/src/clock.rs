use std::sync::Arc;

use chrono::{Datelike, Local, TimeZone};
use serde::{Serializer, ser::Error as SerError};
use thiserror::Error as ThisError;
use time::{
    Date, Month, OffsetDateTime, UtcOffset,
    error::{ComponentRange, Format as FormatError, Parse as ParseError},
    format_description::BorrowedFormatItem,
    macros::format_description,
};

/// Calendar date as stored in `DATE(calldate)`.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Signed `HH:MM` offset notation, e.g. `-03:00`.
pub const UTC_OFFSET_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

pub fn parse_utc_offset(s: &str) -> Result<UtcOffset, ParseError> {
    UtcOffset::parse(s, UTC_OFFSET_FORMAT)
}

pub fn format_date(date: Date) -> Result<String, FormatError> {
    date.format(DATE_FORMAT)
}

/// For `#[serde(serialize_with)]` on `Date` fields.
pub fn serialize_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    let date_str = format_date(*date).map_err(S::Error::custom)?;
    serializer.serialize_str(&date_str)
}

#[derive(Debug, ThisError)]
pub enum ClockError {
    #[error("instant not representable in local time zone")]
    Unrepresentable,

    #[error("invalid calendar date: {0}")]
    ComponentRange(#[from] ComponentRange),
}

pub type ArcClock = Arc<dyn Clock + 'static>;

/// Source of the calendar date a request counts against.
pub trait Clock: Send + Sync {
    fn description(&self) -> String;

    /// Evaluated on every call; never cached.
    fn today(&self) -> Result<Date, ClockError>;
}

pub fn create_clock(utc_offset: Option<UtcOffset>) -> ArcClock {
    match utc_offset {
        Some(offset) => Arc::new(FixedOffsetClock::new(offset)),
        None => Arc::new(SystemClock),
    }
}

/// Follows the host time zone, DST transitions included.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn description(&self) -> String {
        "system time zone".to_string()
    }

    fn today(&self) -> Result<Date, ClockError> {
        date_in_zone(&Local, OffsetDateTime::now_utc())
    }
}

/// Ignores the host time zone and always applies one offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffsetClock {
    offset: UtcOffset,
}

impl FixedOffsetClock {
    pub fn new(offset: UtcOffset) -> FixedOffsetClock {
        FixedOffsetClock { offset }
    }

    pub fn date_at(&self, instant: OffsetDateTime) -> Date {
        instant.to_offset(self.offset).date()
    }
}

impl Clock for FixedOffsetClock {
    fn description(&self) -> String {
        format!("fixed offset UTC{}", self.offset)
    }

    fn today(&self) -> Result<Date, ClockError> {
        Ok(self.date_at(OffsetDateTime::now_utc()))
    }
}

/// Calendar date of `instant` in `zone`, using the offset in effect at that instant.
pub fn date_in_zone<Tz: TimeZone>(zone: &Tz, instant: OffsetDateTime) -> Result<Date, ClockError> {
    let local = zone
        .timestamp_opt(instant.unix_timestamp(), instant.nanosecond())
        .single()
        .ok_or(ClockError::Unrepresentable)?;
    let local_date = local.date_naive();

    let month = Month::try_from(local_date.month() as u8)?;
    let date = Date::from_calendar_date(local_date.year(), month, local_date.day() as u8)?;
    Ok(date)
}
