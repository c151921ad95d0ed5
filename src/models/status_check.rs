use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::Validate;

/// A persisted status check. Identity and creation time are stamped by
/// [`StatusCheck::new`] and never taken from request input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[serde(with = "rfc3339")]
    pub timestamp: DateTime<Utc>,
}

/// Request body for `POST /api/status`
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheck {
    pub fn new(input: StatusCheckCreate) -> Self {
        Self::stamped(input, Uuid::new_v4(), Utc::now())
    }

    fn stamped(input: StatusCheckCreate, id: Uuid, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.hyphenated().to_string(),
            client_name: input.client_name,
            timestamp,
        }
    }
}

impl Validate for StatusCheckCreate {
    fn validate(&self) -> Result<(), HashMap<String, String>> {
        if self.client_name.is_empty() {
            let mut field_errors = HashMap::new();
            field_errors.insert("client_name".to_string(), "This field must not be empty".to_string());
            return Err(field_errors);
        }
        Ok(())
    }
}

/// Timestamps travel as RFC 3339 with an explicit `+00:00` offset.
mod rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
