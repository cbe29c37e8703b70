use axum::Json;
use axum::extract::{Path, State};
use lpa_dashboard_domain::ActorType;

use crate::dto::{ActorTypeExistsResponse, DashboardResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn dashboard_handler(
    State(state): State<AppState>,
    Path(user_sub): Path<String>,
) -> ApiResult<Json<DashboardResponse>> {
    let results = state.dashboard_service.get_all(user_sub.as_str()).await?;

    Ok(Json(DashboardResponse::from(results)))
}

pub async fn actor_type_exists_handler(
    State(state): State<AppState>,
    Path((user_sub, actor_type)): Path<(String, String)>,
) -> ApiResult<Json<ActorTypeExistsResponse>> {
    let actor_type = ActorType::parse(actor_type.as_str())?;
    let exists = state
        .dashboard_service
        .sub_exists_for_actor_type(user_sub.as_str(), actor_type)
        .await?;

    Ok(Json(ActorTypeExistsResponse {
        actor_type: actor_type.as_str().to_owned(),
        exists,
    }))
}

#[cfg(test)]
mod tests;
