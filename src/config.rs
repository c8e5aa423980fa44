//! Client configuration
//!
//! Configuration is injected explicitly into the client constructor. Nothing in
//! this crate reads process environment variables or configuration files.

use crate::http::RetryPolicy;
use crate::types::StringMap;
use std::time::Duration;

/// Default service endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://api.mq.cloud.ibm.com";

/// Static configuration of a service client
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL for all requests
    pub service_url: Option<String>,
    /// Per-attempt timeout; bounds connection setup only for downloads
    pub timeout: Duration,
    /// Retry policy, disabled when `None`
    pub retry: Option<RetryPolicy>,
    /// Headers sent with every request; per-call headers override them
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
    /// Skip TLS certificate verification (test environments only)
    pub disable_ssl_verification: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_url: Some(DEFAULT_SERVICE_URL.to_string()),
            timeout: Duration::from_secs(30),
            retry: None,
            default_headers: StringMap::new(),
            user_agent: format!("mqcloud-sdk-rust/{}", env!("CARGO_PKG_VERSION")),
            disable_ssl_verification: false,
        }
    }
}

impl ServiceConfig {
    /// Create a new config builder
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }
}

/// Builder for [`ServiceConfig`]
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    /// Set the service URL
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.config.service_url = Some(url.into());
        self
    }

    /// Remove the service URL; calls fail until one is set on the client
    pub fn no_service_url(mut self) -> Self {
        self.config.service_url = None;
        self
    }

    /// Set the per-attempt timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Enable retries with the given policy
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.config.retry = Some(policy);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Skip TLS certificate verification
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.config.disable_ssl_verification = disable;
        self
    }

    /// Build the config
    pub fn build(self) -> ServiceConfig {
        self.config
    }
}
