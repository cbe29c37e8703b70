use std::collections::{HashMap, HashSet};

use lpa_dashboard_core::{AppError, AppResult};
use lpa_dashboard_domain::{ActorType, LpaLink, StoreKey};

/// Keys to fetch for a set of links, and the role each LPA is shown under.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct BatchPlan {
    keys: Vec<StoreKey>,
    actor_types: HashMap<String, ActorType>,
}

impl BatchPlan {
    pub(super) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(super) fn keys(&self) -> &[StoreKey] {
        &self.keys
    }

    pub(super) fn actor_types(&self) -> &HashMap<String, ActorType> {
        &self.actor_types
    }

    fn push_key(&mut self, seen: &mut HashSet<StoreKey>, key: StoreKey) {
        if seen.insert(key.clone()) {
            self.keys.push(key);
        }
    }
}

/// Plans the owner and provided-details keys for every link.
///
/// An LPA is shown under one role only. When the user holds several roles on
/// the same LPA the last link read decides which.
pub(super) fn plan_keys(links: &[LpaLink], user_sub: &str) -> AppResult<BatchPlan> {
    let mut plan = BatchPlan::default();
    let mut seen = HashSet::new();

    for link in links {
        let lpa_id = link.pk.lpa_id().ok_or_else(|| {
            AppError::Decode(format!("lpa link stored under non-lpa partition '{}'", link.pk))
        })?;

        plan.push_key(&mut seen, link.owner_store_key());
        if let Some(sk) = link.actor_type.provided_details_key(user_sub) {
            plan.push_key(&mut seen, StoreKey::new(link.pk.clone(), sk));
        }

        plan.actor_types.insert(lpa_id.to_owned(), link.actor_type);
    }

    Ok(plan)
}
