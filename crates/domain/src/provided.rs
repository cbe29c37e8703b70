//! Details provided by each actor, as stored against an LPA.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{PartitionKey, SortKey};

/// Progress of one actor task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Not yet started.
    #[default]
    NotStarted,
    /// Started but not finished.
    InProgress,
    /// Waiting on an outside party, such as an identity check.
    Pending,
    /// Finished.
    Completed,
}

impl TaskState {
    /// Returns whether the task has been completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Outcome of an identity check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityStatus {
    /// No outcome recorded.
    #[default]
    Unknown,
    /// Identity confirmed.
    Confirmed,
    /// Identity check failed.
    Failed,
    /// Not enough evidence was provided.
    InsufficientEvidence,
    /// A previous confirmation has expired.
    Expired,
}

/// Identity data returned by an identity check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUserData {
    /// Check outcome.
    #[serde(rename = "Status", default)]
    pub status: IdentityStatus,
    /// First names on the checked identity.
    #[serde(rename = "FirstNames", default)]
    pub first_names: String,
    /// Last name on the checked identity.
    #[serde(rename = "LastName", default)]
    pub last_name: String,
    /// When the check completed.
    #[serde(
        rename = "CheckedAt",
        default,
        deserialize_with = "crate::timestamp::deserialize_optional"
    )]
    pub checked_at: Option<DateTime<Utc>>,
}

impl IdentityUserData {
    /// Returns whether the identity check confirmed the person.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.status == IdentityStatus::Confirmed
    }

    /// Returns whether the checked identity carries the given name.
    #[must_use]
    pub fn matches_name(&self, first_names: &str, last_name: &str) -> bool {
        normalised_name_eq(&self.first_names, first_names)
            && normalised_name_eq(&self.last_name, last_name)
    }
}

fn normalised_name_eq(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

/// Record owning an LPA, as entered by the donor or on their behalf.
///
/// Only the fields the dashboard needs are modelled; the rest of the stored
/// item is ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorProvided {
    /// LPA partition key.
    #[serde(rename = "PK")]
    pub pk: PartitionKey,
    /// Owner sort key.
    #[serde(rename = "SK")]
    pub sk: SortKey,
    /// LPA identifier.
    #[serde(rename = "LpaID", default)]
    pub lpa_id: String,
    /// UID assigned once the LPA is registered for payment. Empty until then.
    #[serde(rename = "LpaUID", default)]
    pub lpa_uid: String,
    /// Last time the donor changed the LPA.
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: DateTime<Utc>,
    /// When the LPA was submitted for registration.
    #[serde(
        rename = "SubmittedAt",
        default,
        deserialize_with = "crate::timestamp::deserialize_optional"
    )]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl DonorProvided {
    /// Returns whether the record describes an LPA that has a UID.
    ///
    /// Records without one are placeholders for LPAs that were started but
    /// never progressed, and are not shown on dashboards.
    #[must_use]
    pub fn has_lpa_uid(&self) -> bool {
        !self.lpa_uid.is_empty()
    }
}

/// Progress of the attorney tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttorneyTasks {
    /// Confirm your details.
    #[serde(rename = "ConfirmYourDetails", default)]
    pub confirm_your_details: TaskState,
    /// Read the LPA.
    #[serde(rename = "ReadTheLpa", default)]
    pub read_the_lpa: TaskState,
    /// Sign the LPA.
    #[serde(rename = "SignTheLpa", default)]
    pub sign_the_lpa: TaskState,
}

/// Details provided by an attorney on one LPA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttorneyProvided {
    /// LPA partition key.
    #[serde(rename = "PK")]
    pub pk: PartitionKey,
    /// `ATTORNEY#<sub>` sort key.
    #[serde(rename = "SK")]
    pub sk: SortKey,
    /// UID of the attorney on the LPA.
    #[serde(rename = "UID", default)]
    pub uid: String,
    /// Whether this is a replacement attorney.
    #[serde(rename = "IsReplacement", default)]
    pub is_replacement: bool,
    /// Whether the attorney acts for a trust corporation.
    #[serde(rename = "IsTrustCorporation", default)]
    pub is_trust_corporation: bool,
    /// When the attorney signed.
    #[serde(
        rename = "SignedAt",
        default,
        deserialize_with = "crate::timestamp::deserialize_optional"
    )]
    pub signed_at: Option<DateTime<Utc>>,
    /// Task progress.
    #[serde(rename = "Tasks", default)]
    pub tasks: AttorneyTasks,
    /// Last time the attorney changed their details.
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: DateTime<Utc>,
}

/// Progress of the certificate provider tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateProviderTasks {
    /// Confirm your details.
    #[serde(rename = "ConfirmYourDetails", default)]
    pub confirm_your_details: TaskState,
    /// Confirm your identity.
    #[serde(rename = "ConfirmYourIdentity", default)]
    pub confirm_your_identity: TaskState,
    /// Read the LPA.
    #[serde(rename = "ReadTheLpa", default)]
    pub read_the_lpa: TaskState,
    /// Provide the certificate.
    #[serde(rename = "ProvideTheCertificate", default)]
    pub provide_the_certificate: TaskState,
}

/// Details provided by a certificate provider on one LPA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateProviderProvided {
    /// LPA partition key.
    #[serde(rename = "PK")]
    pub pk: PartitionKey,
    /// `CERTIFICATE_PROVIDER#<sub>` sort key.
    #[serde(rename = "SK")]
    pub sk: SortKey,
    /// UID of the certificate provider on the LPA.
    #[serde(rename = "UID", default)]
    pub uid: String,
    /// When the certificate was provided.
    #[serde(
        rename = "SignedAt",
        default,
        deserialize_with = "crate::timestamp::deserialize_optional"
    )]
    pub signed_at: Option<DateTime<Utc>>,
    /// Task progress.
    #[serde(rename = "Tasks", default)]
    pub tasks: CertificateProviderTasks,
    /// Last time the certificate provider changed their details.
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: DateTime<Utc>,
}

impl CertificateProviderProvided {
    /// Returns whether the certificate has been provided.
    #[must_use]
    pub fn has_signed(&self) -> bool {
        self.signed_at.is_some()
    }
}

/// Progress of the voucher tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherTasks {
    /// Confirm your name.
    #[serde(rename = "ConfirmYourName", default)]
    pub confirm_your_name: TaskState,
    /// Verify the donor's details.
    #[serde(rename = "VerifyDonorDetails", default)]
    pub verify_donor_details: TaskState,
    /// Confirm your identity.
    #[serde(rename = "ConfirmYourIdentity", default)]
    pub confirm_your_identity: TaskState,
    /// Sign the declaration.
    #[serde(rename = "SignTheDeclaration", default)]
    pub sign_the_declaration: TaskState,
}

/// Details provided by a voucher on one LPA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherProvided {
    /// LPA partition key.
    #[serde(rename = "PK")]
    pub pk: PartitionKey,
    /// `VOUCHER#<sub>` sort key.
    #[serde(rename = "SK")]
    pub sk: SortKey,
    /// First names the voucher was invited under.
    #[serde(rename = "FirstNames", default)]
    pub first_names: String,
    /// Last name the voucher was invited under.
    #[serde(rename = "LastName", default)]
    pub last_name: String,
    /// Identity check result, once one has been made.
    #[serde(rename = "IdentityUserData", default)]
    pub identity_user_data: Option<IdentityUserData>,
    /// When the declaration was signed.
    #[serde(
        rename = "SignedAt",
        default,
        deserialize_with = "crate::timestamp::deserialize_optional"
    )]
    pub signed_at: Option<DateTime<Utc>>,
    /// Task progress.
    #[serde(rename = "Tasks", default)]
    pub tasks: VoucherTasks,
    /// Last time the voucher changed their details.
    #[serde(rename = "UpdatedAt", default)]
    pub updated_at: DateTime<Utc>,
}

impl VoucherProvided {
    /// Returns whether the voucher's identity was confirmed under their name.
    #[must_use]
    pub fn identity_confirmed(&self) -> bool {
        self.identity_user_data.as_ref().is_some_and(|identity| {
            identity.is_confirmed() && identity.matches_name(&self.first_names, &self.last_name)
        })
    }
}
