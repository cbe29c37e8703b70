use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ActorType, PartitionKey, SortKey, StoreKey};

/// Link between a user and an LPA they act on.
///
/// Stored under the LPA partition with a `SUB#<sub>` sort key, which is the
/// attribute the secondary index is built on. A user holding several roles
/// on one LPA has one link per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpaLink {
    /// Partition key of the linked LPA.
    #[serde(rename = "PK")]
    pub pk: PartitionKey,
    /// `SUB#<sub>` key of the linked user.
    #[serde(rename = "SK")]
    pub sk: SortKey,
    /// Sort key of the record owning the LPA.
    #[serde(rename = "DonorKey")]
    pub owner_key: SortKey,
    /// UID of the actor within the LPA.
    #[serde(rename = "UID", default)]
    pub actor_uid: String,
    /// Role the user holds on the LPA.
    #[serde(rename = "ActorType")]
    pub actor_type: ActorType,
    /// Last time the link was written.
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: DateTime<Utc>,
}

impl LpaLink {
    /// Returns the key of the record owning the linked LPA.
    #[must_use]
    pub fn owner_store_key(&self) -> StoreKey {
        StoreKey::new(self.pk.clone(), self.owner_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::LpaLink;
    use crate::{ActorType, PartitionKey, SortKey};

    #[test]
    fn decodes_stored_link() {
        let link = serde_json::from_value::<LpaLink>(json!({
            "PK": "LPA#123",
            "SK": "SUB#a-sub",
            "DonorKey": "ORGANISATION#org",
            "UID": "urn:opg:actor:1",
            "ActorType": "certificate_provider",
            "UpdatedAt": "2024-01-02T03:04:05Z",
        }));

        assert!(link.is_ok());
        let link = link.unwrap_or_else(|_| unreachable!());
        assert_eq!(link.pk, PartitionKey::lpa("123"));
        assert_eq!(link.owner_key, SortKey::Organisation("org".to_owned()));
        assert_eq!(link.actor_type, ActorType::CertificateProvider);
        assert_eq!(link.sk, SortKey::Sub("a-sub".to_owned()));
    }
}
