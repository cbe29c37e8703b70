//! Application services and ports.

#![forbid(unsafe_code)]

mod dashboard_ports;
mod dashboard_service;

pub use dashboard_ports::{LpaItemStore, LpaResolvingService, RawItem};
pub use dashboard_service::DashboardService;
