//! IBM MQ on Cloud service operations
//!
//! [`MqCloudService`] exposes one method per API operation, each taking an
//! options struct built with `new(..)` plus consuming setters:
//!
//! ```rust,ignore
//! let service = MqCloudService::new(ServiceConfig::default(), Arc::new(auth))?;
//!
//! let options = GetQueueManagerOptions::new(guid, qm_id).accept_language("en");
//! let qm = service.get_queue_manager(&options).await?.into_result();
//! ```
//!
//! Every operation also has a `_with_context` variant taking a [`Context`]
//! that bounds the whole call with a deadline or cancellation.
//!
//! [`Context`]: crate::http::Context

mod applications;
mod certificates;
mod instance;
mod queue_managers;
mod users;

pub use applications::{
    CreateApplicationApikeyOptions, CreateApplicationOptions, DeleteApplicationOptions,
    GetApplicationOptions, ListApplicationsOptions,
};
pub use certificates::{
    CertificateFile, CreateKeyStorePemCertificateOptions, CreateTrustStorePemCertificateOptions,
    DeleteKeyStoreCertificateOptions, DeleteTrustStoreCertificateOptions,
    DownloadKeyStoreCertificateOptions, DownloadTrustStoreCertificateOptions,
    GetCertificateAmsChannelsOptions, GetKeyStoreCertificateOptions,
    GetTrustStoreCertificateOptions, ListKeyStoreCertificatesOptions,
    ListTrustStoreCertificatesOptions, SetCertificateAmsChannelsOptions,
};
pub use instance::{GetOptionsOptions, GetUsageDetailsOptions};
pub use queue_managers::{
    CreateQueueManagerOptions, DeleteQueueManagerOptions,
    GetQueueManagerAvailableUpgradeVersionsOptions, GetQueueManagerConnectionInfoOptions,
    GetQueueManagerOptions, GetQueueManagerStatusOptions, ListQueueManagersOptions,
    SetQueueManagerVersionOptions,
};
pub use users::{CreateUserOptions, DeleteUserOptions, GetUserOptions, ListUsersOptions};

use crate::auth::Authenticator;
use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestOptions, RetryPolicy};
use crate::types::{Method, StringMap};
use std::sync::Arc;

const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Client for the IBM MQ on Cloud API
#[derive(Debug)]
pub struct MqCloudService {
    client: HttpClient,
}

impl MqCloudService {
    /// Create a service client
    ///
    /// Fails when the authenticator rejects its credentials.
    pub fn new(config: ServiceConfig, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(config, authenticator)?,
        })
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Get the service URL, if set
    pub fn service_url(&self) -> Option<&str> {
        self.client.service_url()
    }

    /// Change the service URL used by subsequent calls
    pub fn set_service_url(&mut self, url: impl Into<String>) {
        self.client.set_service_url(url);
    }

    /// Turn on retries for subsequent calls
    pub fn enable_retries(&mut self, policy: RetryPolicy) {
        self.client.enable_retries(policy);
    }

    /// Turn off retries for subsequent calls
    pub fn disable_retries(&mut self) {
        self.client.disable_retries();
    }
}

/// Start a request carrying the optional `Accept-Language` and caller headers
fn request(
    method: Method,
    path: &str,
    accept_language: Option<&str>,
    headers: &StringMap,
) -> RequestOptions {
    RequestOptions::new(method, path)
        .header_opt(ACCEPT_LANGUAGE, accept_language)
        .headers(headers)
}

/// Reject an empty required body field
fn require(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing_parameter(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
