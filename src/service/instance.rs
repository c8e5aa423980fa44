//! Service instance operations

use super::{request, MqCloudService};
use crate::error::Result;
use crate::http::{Context, DetailedResponse};
use crate::models::{ConfigurationOptions, Usage};
use crate::types::{Method, StringMap};

/// Options for [`MqCloudService::get_usage_details`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetUsageDetailsOptions {
    /// GUID of the service instance
    pub service_instance_guid: String,
    /// Preferred response language
    pub accept_language: Option<String>,
    /// Extra request headers
    pub headers: StringMap,
}

impl GetUsageDetailsOptions {
    pub fn new(service_instance_guid: impl Into<String>) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    #[must_use]
    pub fn headers(mut self, headers: StringMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for [`MqCloudService::get_options`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptionsOptions {
    /// GUID of the service instance
    pub service_instance_guid: String,
    /// Preferred response language
    pub accept_language: Option<String>,
    /// Extra request headers
    pub headers: StringMap,
}

impl GetOptionsOptions {
    pub fn new(service_instance_guid: impl Into<String>) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    #[must_use]
    pub fn headers(mut self, headers: StringMap) -> Self {
        self.headers = headers;
        self
    }
}

impl MqCloudService {
    /// Get the usage details of a service instance
    pub async fn get_usage_details(
        &self,
        options: &GetUsageDetailsOptions,
    ) -> Result<DetailedResponse<Usage>> {
        self.get_usage_details_with_context(Context::background(), options)
            .await
    }

    pub async fn get_usage_details_with_context(
        &self,
        ctx: Context,
        options: &GetUsageDetailsOptions,
    ) -> Result<DetailedResponse<Usage>> {
        let req = request(
            Method::GET,
            "/v1/{service_instance_guid}/usage",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid);

        self.client.invoke(ctx, &req).await
    }

    /// Get the locations, sizes and versions a queue manager can be created with
    pub async fn get_options(
        &self,
        options: &GetOptionsOptions,
    ) -> Result<DetailedResponse<ConfigurationOptions>> {
        self.get_options_with_context(Context::background(), options)
            .await
    }

    pub async fn get_options_with_context(
        &self,
        ctx: Context,
        options: &GetOptionsOptions,
    ) -> Result<DetailedResponse<ConfigurationOptions>> {
        let req = request(
            Method::GET,
            "/v1/{service_instance_guid}/options",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid);

        self.client.invoke(ctx, &req).await
    }
}
