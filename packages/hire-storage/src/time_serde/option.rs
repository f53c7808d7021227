use serde::{Deserialize, Deserializer, Serializer, de, ser};
use time::OffsetDateTime;

use crate::time_serde::{format_utc, parse_utc};

pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	let Some(value) = value else {
		return serializer.serialize_none();
	};

	serializer.serialize_some(&format_utc(value).map_err(ser::Error::custom)?)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where
	D: Deserializer<'de>,
{
	Option::<String>::deserialize(deserializer)?
		.map(|raw| parse_utc(&raw).map_err(de::Error::custom))
		.transpose()
}
