// services/compliance-dash/src/config.rs
//
// Dashboard configuration: optional YAML file, then COMPLIANCE_DASH__*
// environment overrides, then defaults.
//

use config::{Config, Environment, File};
use dashkit::config::{DisplayConfig, ObservabilityConfig};
use dashkit::DashResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub display: DisplayConfig,
    pub observability: ObservabilityConfig,
}

const ENV_PREFIX: &str = "COMPLIANCE_DASH";

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

pub fn load_config(path: Option<&str>) -> DashResult<DashboardConfig> {
    load_with_env(path, environment())
}

fn load_with_env(path: Option<&str>, env: Environment) -> DashResult<DashboardConfig> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::with_name(path));
    }
    let config = builder.add_source(env).build()?;

    let config: DashboardConfig = config.try_deserialize()?;
    config.display.validate()?;
    Ok(config)
}
