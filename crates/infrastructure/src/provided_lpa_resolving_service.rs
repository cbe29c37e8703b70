use async_trait::async_trait;
use lpa_dashboard_application::LpaResolvingService;
use lpa_dashboard_core::AppResult;
use lpa_dashboard_domain::{DonorProvided, Lpa};

/// Resolves LPAs from the donor records themselves.
///
/// Used when no LPA store is wired in. Resolved LPAs carry no attorneys, so
/// attorney entries are shown without a matching LPA attorney.
#[derive(Debug, Default, Clone)]
pub struct ProvidedLpaResolvingService;

impl ProvidedLpaResolvingService {
    /// Creates a resolving service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn lpa_from_donor(donor: &DonorProvided) -> Lpa {
    Lpa {
        lpa_id: donor.lpa_id.clone(),
        lpa_uid: donor.lpa_uid.clone(),
        updated_at: donor.updated_at,
        submitted: donor.submitted_at.is_some(),
        attorneys: Vec::new(),
    }
}

#[async_trait]
impl LpaResolvingService for ProvidedLpaResolvingService {
    async fn resolve_list(&self, donors: &[DonorProvided]) -> AppResult<Vec<Lpa>> {
        Ok(donors.iter().map(lpa_from_donor).collect())
    }
}
