//! RFC 3339 timestamps for persisted documents, always written in UTC.

pub mod option;

use serde::{Deserialize, Deserializer, Serializer, de, ser};
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};

pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	serializer.serialize_str(&format_utc(value).map_err(ser::Error::custom)?)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = String::deserialize(deserializer)?;

	parse_utc(&raw).map_err(de::Error::custom)
}

fn format_utc(value: &OffsetDateTime) -> Result<String, time::error::Format> {
	value.to_offset(UtcOffset::UTC).format(&Rfc3339)
}

fn parse_utc(raw: &str) -> Result<OffsetDateTime, time::error::Parse> {
	OffsetDateTime::parse(raw, &Rfc3339).map(|value| value.to_offset(UtcOffset::UTC))
}
