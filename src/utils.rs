use chrono::NaiveDateTime;

pub const SCREENING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn parse_screening_time(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, SCREENING_TIME_FORMAT)
}

/// Serde helpers keeping `screening_time` in its fixed "YYYY-MM-DD HH:MM" form,
/// used via `#[serde(with = "screening_time")]`.
pub mod screening_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::SCREENING_TIME_FORMAT;

    pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(SCREENING_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, SCREENING_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
