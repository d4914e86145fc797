// services/compliance-dash/src/lib.rs
//
// ComplianceIQ program overview rendered in the terminal
//

pub mod app;
pub mod badge;
pub mod chart;
pub mod components;
pub mod config;
pub mod fixtures;
pub mod heatmap;
pub mod model;
pub mod snapshot;
pub mod state;
pub mod theme;

pub use app::Dashboard;
pub use fixtures::{dashboard_data, DashboardData};
pub use state::DashboardState;
