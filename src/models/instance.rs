//! Service instance models

use serde::{Deserialize, Serialize};

/// Usage of the service instance's entitlement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    /// VPC entitlement of the instance
    pub vpc_entitlement: Option<f64>,
    /// VPC currently in use
    pub vpc_usage: Option<f64>,
}

/// Values accepted when creating a queue manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationOptions {
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub versions: Vec<String>,
    pub latest_version: Option<String>,
}
