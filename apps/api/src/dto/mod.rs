mod common;
mod dashboard;

pub use common::HealthResponse;
pub use dashboard::{ActorTypeExistsResponse, DashboardResponse};
