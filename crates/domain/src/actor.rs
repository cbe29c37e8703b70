use lpa_dashboard_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::SortKey;

/// Roles a user can hold on an LPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorType {
    /// The person making the LPA.
    Donor,
    /// An attorney or replacement attorney.
    Attorney,
    /// The certificate provider.
    CertificateProvider,
    /// A voucher confirming the donor's identity.
    Voucher,
}

impl ActorType {
    /// Returns a stable storage value for this actor type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Attorney => "attorney",
            Self::CertificateProvider => "certificate_provider",
            Self::Voucher => "voucher",
        }
    }

    /// Returns all actor types in dashboard order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ActorType] = &[
            ActorType::Donor,
            ActorType::Attorney,
            ActorType::CertificateProvider,
            ActorType::Voucher,
        ];

        ALL
    }

    /// Returns the sort key of the details this actor provides on an LPA.
    ///
    /// Donors have none: the donor's details are the record owning the LPA.
    #[must_use]
    pub fn provided_details_key(&self, sub: &str) -> Option<SortKey> {
        match self {
            Self::Donor => None,
            Self::Attorney => Some(SortKey::Attorney(sub.to_owned())),
            Self::CertificateProvider => Some(SortKey::CertificateProvider(sub.to_owned())),
            Self::Voucher => Some(SortKey::Voucher(sub.to_owned())),
        }
    }

    /// Parses a storage string into an actor type.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "donor" => Ok(Self::Donor),
            "attorney" => Ok(Self::Attorney),
            "certificate_provider" => Ok(Self::CertificateProvider),
            "voucher" => Ok(Self::Voucher),
            _ => Err(AppError::Validation(format!("unknown actor type '{value}'"))),
        }
    }
}
