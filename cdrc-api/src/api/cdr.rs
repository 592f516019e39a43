use crate::{
    api::error::ApiError,
    application::{Application, TodayCount},
};

use std::convert::Infallible;

use axum::{
    Json,
    extract::{FromRequestParts, State},
    http::request::Parts,
};
use cdrc_common::clock::serialize_date;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use time::Date;

/// The `{accountcode}` segment, percent-decoded.
/// Bytes that are not valid UTF-8 become U+FFFD rather than rejecting the request,
/// so a malformed code just counts zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCode(pub String);

impl<S: Send + Sync> FromRequestParts<S> for AccountCode {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<AccountCode, Infallible> {
        // the route ends with the segment, and `Uri::path` is still percent-encoded
        let raw_segment = parts.uri.path().rsplit('/').next().unwrap_or_default();
        let decoded = percent_decode_str(raw_segment).decode_utf8_lossy();
        Ok(AccountCode(decoded.into_owned()))
    }
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    count: usize,
    #[serde(serialize_with = "serialize_date")]
    date: Date,
}

impl From<TodayCount> for TodayResponse {
    fn from(value: TodayCount) -> TodayResponse {
        TodayResponse {
            count: value.count,
            date: value.date,
        }
    }
}

pub async fn today(
    State(state): State<Application>,
    AccountCode(accountcode): AccountCode,
) -> Result<Json<TodayResponse>, ApiError> {
    let today_count = state.count_today(&accountcode).await?;
    Ok(Json(today_count.into()))
}
