use lpa_dashboard_domain::{ActorType, LpaLink, SortKey};
use serde_json::Value;

use crate::dashboard_ports::RawItem;

use super::*;

impl DashboardService {
    /// Returns whether the user holds at least one link with the given role.
    ///
    /// Only the link index is read.
    pub async fn sub_exists_for_actor_type(
        &self,
        user_sub: &str,
        actor_type: ActorType,
    ) -> AppResult<bool> {
        let user_sub = require_user_sub(user_sub)?;
        let items = self
            .store
            .all_by_sort_key(&SortKey::Sub(user_sub.as_str().to_owned()))
            .await?;

        for item in items {
            if decode_link(item)?.actor_type == actor_type {
                return Ok(true);
            }
        }

        Ok(false)
    }

    pub(super) async fn find_links(&self, user_sub: &str) -> AppResult<Vec<LpaLink>> {
        self.store
            .all_by_sort_key(&SortKey::Sub(user_sub.to_owned()))
            .await?
            .into_iter()
            .map(decode_link)
            .collect()
    }
}

fn decode_link(item: RawItem) -> AppResult<LpaLink> {
    serde_json::from_value(Value::Object(item))
        .map_err(|error| AppError::Decode(format!("invalid lpa link: {error}")))
}
