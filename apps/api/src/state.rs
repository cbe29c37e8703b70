use lpa_dashboard_application::DashboardService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub store_kind: &'static str,
}
