//! Stored timestamp decoding.
//!
//! Items written by the service store unset times as `0001-01-01T00:00:00Z`
//! rather than omitting them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

const ZERO_TIME_UNIX_SECONDS: i64 = -62_135_596_800;

fn is_zero_time(value: &DateTime<Utc>) -> bool {
    value.timestamp() == ZERO_TIME_UNIX_SECONDS && value.timestamp_subsec_nanos() == 0
}

/// Decodes an optional timestamp, reading the zero time as unset.
pub(crate) fn deserialize_optional<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DateTime<Utc>>::deserialize(deserializer)?;
    Ok(value.filter(|timestamp| !is_zero_time(timestamp)))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;
    use serde_json::json;

    use super::is_zero_time;

    #[derive(Deserialize)]
    struct Signed {
        #[serde(
            rename = "SignedAt",
            default,
            deserialize_with = "super::deserialize_optional"
        )]
        signed_at: Option<DateTime<Utc>>,
    }

    fn signed_at(value: serde_json::Value) -> Option<DateTime<Utc>> {
        serde_json::from_value::<Signed>(value)
            .map(|signed| signed.signed_at)
            .unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn zero_time_is_unset() {
        assert_eq!(signed_at(json!({"SignedAt": "0001-01-01T00:00:00Z"})), None);
        assert_eq!(signed_at(json!({"SignedAt": null})), None);
        assert_eq!(signed_at(json!({})), None);
    }

    #[test]
    fn other_times_are_kept() {
        let signed = signed_at(json!({"SignedAt": "2024-05-06T07:08:09Z"}));

        assert_eq!(
            signed.map(|value| value.to_rfc3339()),
            Some("2024-05-06T07:08:09+00:00".to_owned())
        );
        assert!(!is_zero_time(&DateTime::<Utc>::default()));
    }
}
