use serde::{Deserialize, Serialize};

use crate::{
    ActorType, AttorneyProvided, CertificateProviderProvided, DonorProvided, Lpa, LpaAttorney,
    VoucherProvided,
};

/// Details the current user provided on an LPA, by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "actor_type", content = "details", rename_all = "snake_case")]
pub enum ProvidedDetails {
    /// The user's own donor record.
    Donor(DonorProvided),
    /// Attorney details.
    Attorney(AttorneyProvided),
    /// Certificate provider details.
    CertificateProvider(CertificateProviderProvided),
    /// Voucher details.
    Voucher(VoucherProvided),
}

/// One dashboard entry: an LPA and what the user has done on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardActor {
    /// Resolved LPA.
    pub lpa: Lpa,
    /// Details provided by the user, when any exist.
    pub provided: Option<ProvidedDetails>,
    /// For attorneys, the matching attorney on the LPA.
    pub lpa_attorney: Option<LpaAttorney>,
}

impl DashboardActor {
    /// Creates an entry without provided details.
    #[must_use]
    pub fn new(lpa: Lpa) -> Self {
        Self {
            lpa,
            provided: None,
            lpa_attorney: None,
        }
    }

    /// Attaches provided details to the entry.
    #[must_use]
    pub fn with_provided(mut self, provided: ProvidedDetails) -> Self {
        self.provided = Some(provided);
        self
    }
}

/// LPAs needing the user's attention, grouped by the role they hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResults {
    /// LPAs the user is the donor of.
    pub donor: Vec<DashboardActor>,
    /// LPAs the user is an attorney on.
    pub attorney: Vec<DashboardActor>,
    /// LPAs the user is the certificate provider for.
    pub certificate_provider: Vec<DashboardActor>,
    /// LPAs the user is vouching for.
    pub voucher: Vec<DashboardActor>,
}

impl DashboardResults {
    /// Returns the bucket for one role for appending.
    pub fn bucket_mut(&mut self, actor_type: ActorType) -> &mut Vec<DashboardActor> {
        match actor_type {
            ActorType::Donor => &mut self.donor,
            ActorType::Attorney => &mut self.attorney,
            ActorType::CertificateProvider => &mut self.certificate_provider,
            ActorType::Voucher => &mut self.voucher,
        }
    }

    /// Orders every bucket by most recently updated LPA first.
    ///
    /// The sort is stable, so entries updated at the same time keep the order
    /// they were added in.
    pub fn sort_by_recently_updated(&mut self) {
        for actor_type in ActorType::all() {
            self.bucket_mut(*actor_type)
                .sort_by(|left, right| right.lpa.updated_at.cmp(&left.lpa.updated_at));
        }
    }
}
