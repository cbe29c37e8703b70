use std::sync::Arc;

use lpa_dashboard_core::{AppError, AppResult, NonEmptyString};
use lpa_dashboard_domain::DashboardResults;
use tracing::debug;

use crate::dashboard_ports::{LpaItemStore, LpaResolvingService};

mod dispatch;
mod links;
mod merge;
mod plan;

/// Application service resolving the LPAs a user acts on into a dashboard.
///
/// Resolution reads only: one link index query, one batch fetch of owner and
/// provided-details items, and one more batch fetch when some LPAs are owned
/// through an organisation.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn LpaItemStore>,
    lpa_resolving_service: Arc<dyn LpaResolvingService>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    #[must_use]
    pub fn new(
        store: Arc<dyn LpaItemStore>,
        lpa_resolving_service: Arc<dyn LpaResolvingService>,
    ) -> Self {
        Self {
            store,
            lpa_resolving_service,
        }
    }

    /// Returns the LPAs needing the user's attention, grouped by role and
    /// ordered most recently updated first.
    pub async fn get_all(&self, user_sub: &str) -> AppResult<DashboardResults> {
        let user_sub = require_user_sub(user_sub)?;
        let user_sub = user_sub.as_str();

        let links = self.find_links(user_sub).await?;
        let plan = plan::plan_keys(&links, user_sub)?;
        if plan.is_empty() {
            debug!(user_sub, "no lpa links for user");
            return Ok(DashboardResults::default());
        }

        let items = self.store.all_by_keys(plan.keys()).await?;
        debug!(
            user_sub,
            link_count = links.len(),
            key_count = plan.keys().len(),
            item_count = items.len(),
            "fetched dashboard items"
        );

        let mut dispatched = dispatch::dispatch_items(items)?;
        if !dispatched.references.is_empty() {
            debug!(
                user_sub,
                reference_count = dispatched.references.len(),
                "following organisation references"
            );
            let referenced = self.store.all_by_keys(&dispatched.references).await?;
            dispatched.append_referenced(referenced)?;
        }

        if dispatched.donors.is_empty() {
            return Ok(DashboardResults::default());
        }

        let lpas = self
            .lpa_resolving_service
            .resolve_list(&dispatched.donors)
            .await?;
        if lpas.len() != dispatched.donors.len() {
            return Err(AppError::Internal(format!(
                "lpa resolving service returned {} lpas for {} donor records",
                lpas.len(),
                dispatched.donors.len()
            )));
        }

        let results = merge::merge(
            user_sub,
            plan.actor_types(),
            &dispatched.donors,
            lpas,
            &dispatched.provided,
        );
        debug!(
            user_sub,
            donor_count = results.donor.len(),
            attorney_count = results.attorney.len(),
            certificate_provider_count = results.certificate_provider.len(),
            voucher_count = results.voucher.len(),
            "resolved dashboard"
        );

        Ok(results)
    }
}

fn require_user_sub(user_sub: &str) -> AppResult<NonEmptyString> {
    NonEmptyString::new(user_sub)
        .map_err(|_| AppError::Validation("dashboard lookups require a user sub".to_owned()))
}
