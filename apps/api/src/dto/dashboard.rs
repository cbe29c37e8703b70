use chrono::{DateTime, SecondsFormat, Utc};
use lpa_dashboard_domain::{
    ActorType, DashboardActor, DashboardResults, Lpa, LpaAttorney, ProvidedDetails,
};
use serde::Serialize;
use ts_rs::TS;

/// API representation of the LPA shown on a dashboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/lpa-summary-response.ts"
)]
pub struct LpaSummaryResponse {
    pub lpa_id: String,
    pub lpa_uid: String,
    pub updated_at: String,
    pub submitted: bool,
}

/// API representation of an attorney named on an LPA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/lpa-attorney-response.ts"
)]
pub struct LpaAttorneyResponse {
    pub uid: String,
    pub first_names: String,
    pub last_name: String,
    pub signed_at: Option<String>,
}

/// API representation of what the user has provided on an LPA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/provided-details-response.ts"
)]
pub struct ProvidedDetailsResponse {
    pub actor_type: String,
    pub uid: Option<String>,
    pub is_replacement: bool,
    pub signed_at: Option<String>,
    pub updated_at: String,
}

/// API representation of one dashboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/dashboard-entry-response.ts"
)]
pub struct DashboardEntryResponse {
    pub lpa: LpaSummaryResponse,
    pub provided: Option<ProvidedDetailsResponse>,
    pub lpa_attorney: Option<LpaAttorneyResponse>,
}

/// API representation of a user's dashboard, grouped by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/dashboard-response.ts"
)]
pub struct DashboardResponse {
    pub donor: Vec<DashboardEntryResponse>,
    pub attorney: Vec<DashboardEntryResponse>,
    pub certificate_provider: Vec<DashboardEntryResponse>,
    pub voucher: Vec<DashboardEntryResponse>,
}

/// Whether a user acts on any LPA in a given role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/actor-type-exists-response.ts"
)]
pub struct ActorTypeExistsResponse {
    pub actor_type: String,
    pub exists: bool,
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl From<Lpa> for LpaSummaryResponse {
    fn from(value: Lpa) -> Self {
        Self {
            lpa_id: value.lpa_id,
            lpa_uid: value.lpa_uid,
            updated_at: timestamp(value.updated_at),
            submitted: value.submitted,
        }
    }
}

impl From<LpaAttorney> for LpaAttorneyResponse {
    fn from(value: LpaAttorney) -> Self {
        Self {
            uid: value.uid,
            first_names: value.first_names,
            last_name: value.last_name,
            signed_at: value.signed_at.map(timestamp),
        }
    }
}

impl From<ProvidedDetails> for ProvidedDetailsResponse {
    fn from(value: ProvidedDetails) -> Self {
        match value {
            ProvidedDetails::Donor(donor) => Self {
                actor_type: ActorType::Donor.as_str().to_owned(),
                uid: None,
                is_replacement: false,
                signed_at: donor.submitted_at.map(timestamp),
                updated_at: timestamp(donor.updated_at),
            },
            ProvidedDetails::Attorney(attorney) => Self {
                actor_type: ActorType::Attorney.as_str().to_owned(),
                uid: Some(attorney.uid),
                is_replacement: attorney.is_replacement,
                signed_at: attorney.signed_at.map(timestamp),
                updated_at: timestamp(attorney.updated_at),
            },
            ProvidedDetails::CertificateProvider(certificate_provider) => Self {
                actor_type: ActorType::CertificateProvider.as_str().to_owned(),
                uid: Some(certificate_provider.uid),
                is_replacement: false,
                signed_at: certificate_provider.signed_at.map(timestamp),
                updated_at: timestamp(certificate_provider.updated_at),
            },
            ProvidedDetails::Voucher(voucher) => Self {
                actor_type: ActorType::Voucher.as_str().to_owned(),
                uid: None,
                is_replacement: false,
                signed_at: voucher.signed_at.map(timestamp),
                updated_at: timestamp(voucher.updated_at),
            },
        }
    }
}

impl From<DashboardActor> for DashboardEntryResponse {
    fn from(value: DashboardActor) -> Self {
        Self {
            lpa: value.lpa.into(),
            provided: value.provided.map(ProvidedDetailsResponse::from),
            lpa_attorney: value.lpa_attorney.map(LpaAttorneyResponse::from),
        }
    }
}

fn entries(actors: Vec<DashboardActor>) -> Vec<DashboardEntryResponse> {
    actors.into_iter().map(DashboardEntryResponse::from).collect()
}

impl From<DashboardResults> for DashboardResponse {
    fn from(value: DashboardResults) -> Self {
        Self {
            donor: entries(value.donor),
            attorney: entries(value.attorney),
            certificate_provider: entries(value.certificate_provider),
            voucher: entries(value.voucher),
        }
    }
}
