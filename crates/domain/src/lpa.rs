use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attorney as recorded on a resolved LPA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpaAttorney {
    /// Attorney UID.
    pub uid: String,
    /// First names.
    pub first_names: String,
    /// Last name.
    pub last_name: String,
    /// When the attorney signed, if they have.
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_optional")]
    pub signed_at: Option<DateTime<Utc>>,
}

/// Canonical view of an LPA, produced by the LPA resolving service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lpa {
    /// LPA identifier, matching the LPA partition key.
    pub lpa_id: String,
    /// Registered LPA UID.
    pub lpa_uid: String,
    /// Last time the LPA changed.
    pub updated_at: DateTime<Utc>,
    /// Whether the LPA has been submitted for registration.
    pub submitted: bool,
    /// Attorneys and replacement attorneys named on the LPA.
    pub attorneys: Vec<LpaAttorney>,
}

impl Lpa {
    /// Returns the attorney with the given UID.
    #[must_use]
    pub fn attorney(&self, uid: &str) -> Option<&LpaAttorney> {
        if uid.is_empty() {
            return None;
        }

        self.attorneys.iter().find(|attorney| attorney.uid == uid)
    }
}
