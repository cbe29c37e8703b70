//! Single-table key scheme.
//!
//! Every item lives under a partition key (`PK`) and a sort key (`SK`). Both
//! are stored as `<PREFIX>#<value>` strings; the prefix decides what kind of
//! item the key addresses, so decoding a key is also how an item is
//! discriminated.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use lpa_dashboard_core::AppError;
use serde::{Deserialize, Serialize};

const LPA_PREFIX: &str = "LPA";
const ORGANISATION_PREFIX: &str = "ORGANISATION";
const DONOR_PREFIX: &str = "DONOR";
const SUB_PREFIX: &str = "SUB";
const ATTORNEY_PREFIX: &str = "ATTORNEY";
const CERTIFICATE_PROVIDER_PREFIX: &str = "CERTIFICATE_PROVIDER";
const VOUCHER_PREFIX: &str = "VOUCHER";

fn split_key<'a>(value: &'a str, kind: &str) -> Result<(&'a str, &'a str), AppError> {
    value
        .split_once('#')
        .ok_or_else(|| AppError::Decode(format!("malformed {kind} '{value}'")))
}

/// Partition key grouping every item of one case or one organisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PartitionKey {
    /// `LPA#<lpa id>`: all items of one LPA.
    Lpa(String),
    /// `ORGANISATION#<organisation id>`: organisation data.
    Organisation(String),
}

impl PartitionKey {
    /// Returns the partition key of an LPA.
    #[must_use]
    pub fn lpa(lpa_id: impl Into<String>) -> Self {
        Self::Lpa(lpa_id.into())
    }

    /// Returns the LPA identifier when this is an LPA partition.
    #[must_use]
    pub fn lpa_id(&self) -> Option<&str> {
        match self {
            Self::Lpa(lpa_id) => Some(lpa_id.as_str()),
            Self::Organisation(_) => None,
        }
    }
}

impl Display for PartitionKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lpa(value) => write!(formatter, "{LPA_PREFIX}#{value}"),
            Self::Organisation(value) => write!(formatter, "{ORGANISATION_PREFIX}#{value}"),
        }
    }
}

impl FromStr for PartitionKey {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (prefix, rest) = split_key(value, "pk")?;

        match prefix {
            LPA_PREFIX => Ok(Self::Lpa(rest.to_owned())),
            ORGANISATION_PREFIX => Ok(Self::Organisation(rest.to_owned())),
            _ => Err(AppError::Decode(format!("unknown pk prefix '{prefix}'"))),
        }
    }
}

impl TryFrom<String> for PartitionKey {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PartitionKey> for String {
    fn from(value: PartitionKey) -> Self {
        value.to_string()
    }
}

/// Sort key addressing one item inside a partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortKey {
    /// `DONOR#<sub>`: LPA owned directly by a donor.
    Donor(String),
    /// `ORGANISATION#<organisation id>`: LPA owned by an organisation.
    Organisation(String),
    /// `SUB#<sub>`: link from a user to an LPA, indexed for lookups by user.
    Sub(String),
    /// `ATTORNEY#<sub>`: attorney provided details.
    Attorney(String),
    /// `CERTIFICATE_PROVIDER#<sub>`: certificate provider provided details.
    CertificateProvider(String),
    /// `VOUCHER#<sub>`: voucher provided details.
    Voucher(String),
}

impl SortKey {
    /// Returns the kind of item stored under this key.
    #[must_use]
    pub fn kind(&self) -> SortKeyKind {
        match self {
            Self::Donor(_) | Self::Organisation(_) => SortKeyKind::LpaOwner,
            Self::Sub(_) => SortKeyKind::Link,
            Self::Attorney(_) => SortKeyKind::Attorney,
            Self::CertificateProvider(_) => SortKeyKind::CertificateProvider,
            Self::Voucher(_) => SortKeyKind::Voucher,
        }
    }

    /// Returns whether the key addresses the record owning an LPA.
    #[must_use]
    pub fn is_lpa_owner(&self) -> bool {
        self.kind() == SortKeyKind::LpaOwner
    }

    fn parts(&self) -> (&'static str, &str) {
        match self {
            Self::Donor(value) => (DONOR_PREFIX, value),
            Self::Organisation(value) => (ORGANISATION_PREFIX, value),
            Self::Sub(value) => (SUB_PREFIX, value),
            Self::Attorney(value) => (ATTORNEY_PREFIX, value),
            Self::CertificateProvider(value) => (CERTIFICATE_PROVIDER_PREFIX, value),
            Self::Voucher(value) => (VOUCHER_PREFIX, value),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let (prefix, value) = self.parts();
        write!(formatter, "{prefix}#{value}")
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (prefix, rest) = split_key(value, "sk")?;
        let rest = rest.to_owned();

        match prefix {
            DONOR_PREFIX => Ok(Self::Donor(rest)),
            ORGANISATION_PREFIX => Ok(Self::Organisation(rest)),
            SUB_PREFIX => Ok(Self::Sub(rest)),
            ATTORNEY_PREFIX => Ok(Self::Attorney(rest)),
            CERTIFICATE_PROVIDER_PREFIX => Ok(Self::CertificateProvider(rest)),
            VOUCHER_PREFIX => Ok(Self::Voucher(rest)),
            _ => Err(AppError::Decode(format!("unknown sk prefix '{prefix}'"))),
        }
    }
}

impl TryFrom<String> for SortKey {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortKey> for String {
    fn from(value: SortKey) -> Self {
        value.to_string()
    }
}

/// Item kinds distinguished by sort key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKeyKind {
    /// Donor or organisation record owning an LPA.
    LpaOwner,
    /// User to LPA link.
    Link,
    /// Attorney provided details.
    Attorney,
    /// Certificate provider provided details.
    CertificateProvider,
    /// Voucher provided details.
    Voucher,
}

/// Full primary key of one item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoreKey {
    /// Partition key.
    #[serde(rename = "PK")]
    pub pk: PartitionKey,
    /// Sort key.
    #[serde(rename = "SK")]
    pub sk: SortKey,
}

impl StoreKey {
    /// Creates a store key.
    #[must_use]
    pub fn new(pk: PartitionKey, sk: SortKey) -> Self {
        Self { pk, sk }
    }
}

impl Display for StoreKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}/{}", self.pk, self.sk)
    }
}
