// dashkit/src/lib.rs
//
// Shared plumbing for the dashboard services
//

pub mod config;
pub mod errors;
pub mod telemetry;

pub use errors::{DashError, DashResult};
