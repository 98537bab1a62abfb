use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};
use serde_with::{DeserializeAs, SerializeAs};

use crate::prelude::*;

/// Timestamp as exchanged with the booking server.
///
/// The server stores naive UTC timestamps and may return them without an offset.
pub struct ServerTime;

impl<'de> DeserializeAs<'de, DateTime<Local>> for ServerTime {
    fn deserialize_as<D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(de::Error::custom)
    }
}

impl SerializeAs<DateTime<Local>> for ServerTime {
    fn serialize_as<S>(source: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = source.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Secs, true);
        serializer.serialize_str(&text)
    }
}

fn parse(text: &str) -> Result<DateTime<Local>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(timestamp.with_timezone(&Local));
    }
    let naive = text
        .parse::<NaiveDateTime>()
        .with_context(|| format!("`{text}` is not a valid timestamp"))?;
    Ok(naive.and_utc().with_timezone(&Local))
}
