use crate::clock::parse_utc_offset;

use std::net::SocketAddr;

use serde::{Deserialize, Deserializer, de::Error as DeError};
use time::UtcOffset;

/// [server]
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigServer {
    pub bind_address: SocketAddr,

    /// Offset used to decide "today". Detected from the system when omitted.
    #[serde(default, deserialize_with = "deserialize_utc_offset")]
    pub utc_offset: Option<UtcOffset>,

    pub cors: Option<ConfigServerCors>,
}

/// [server.cors]
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigServerCors {
    pub allowed_origins: Vec<String>,
}

fn deserialize_utc_offset<'de, D>(deserializer: D) -> Result<Option<UtcOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(offset_str) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let offset = parse_utc_offset(&offset_str).map_err(D::Error::custom)?;
    Ok(Some(offset))
}
