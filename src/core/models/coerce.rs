//! Lenient serde helpers
//!
//! The backend sometimes sends numbers as strings and dates either as plain
//! dates or full timestamps. These helpers accept both forms.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn to_number<E: serde::de::Error>(value: NumberOrText) -> Result<f64, E> {
    match value {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("expected a number, received \"{s}\""))),
    }
}

/// Number that may arrive as a numeric string
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    to_number(NumberOrText::deserialize(deserializer)?)
}

/// Nullable number that may arrive as a numeric string
pub fn optional_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Option::<NumberOrText>::deserialize(deserializer)?
        .map(to_number)
        .transpose()
}

/// Integer that may arrive as a numeric string
pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = to_number::<D::Error>(NumberOrText::deserialize(deserializer)?)?;
    if value.fract() != 0.0 {
        return Err(D::Error::custom(format!("expected an integer, received {value}")));
    }
    #[allow(clippy::cast_possible_truncation)]
    Ok(value as i64)
}

/// Calendar date serialized as `YYYY-MM-DD`
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and RFC 3339 timestamps.
pub mod date {
    use super::{DateTime, Deserialize, Deserializer, NaiveDate, NaiveDateTime, Serializer};
    use serde::de::Error as _;

    const FORMAT: &str = "%Y-%m-%d";

    /// Parse a date in any accepted form
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
            .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok().map(|dt| dt.date()))
    }

    /// Serialize as `YYYY-MM-DD`
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    /// Deserialize from any accepted form
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: \"{raw}\"")))
    }
}
