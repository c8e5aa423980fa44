//! Application and API key operations

use super::{request, require, MqCloudService};
use crate::error::Result;
use crate::http::{Context, DetailedResponse};
use crate::models::{
    ApplicationApiKeyCreated, ApplicationCreated, ApplicationDetails, ApplicationDetailsCollection,
};
use crate::pagination::{ListOperation, Pager};
use crate::types::{Method, StringMap};
use async_trait::async_trait;
use serde_json::json;

const APPLICATIONS_PATH: &str = "/v1/{service_instance_guid}/applications";
const APPLICATION_PATH: &str = "/v1/{service_instance_guid}/applications/{application_id}";

/// Options for [`MqCloudService::list_applications`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListApplicationsOptions {
    pub service_instance_guid: String,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl ListApplicationsOptions {
    pub fn new(service_instance_guid: impl Into<String>) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
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

#[async_trait]
impl ListOperation<MqCloudService> for ListApplicationsOptions {
    type Page = ApplicationDetailsCollection;

    fn offset(&self) -> Option<i64> {
        self.offset
    }

    fn set_offset(&mut self, offset: Option<i64>) {
        self.offset = offset;
    }

    async fn fetch_page(
        &self,
        client: &MqCloudService,
        ctx: Context,
    ) -> Result<Option<ApplicationDetailsCollection>> {
        Ok(client
            .list_applications_with_context(ctx, self)
            .await?
            .into_result())
    }
}

/// Options for [`MqCloudService::create_application`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateApplicationOptions {
    pub service_instance_guid: String,
    /// Application name; also the MQ user identity of its connections
    pub name: String,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl CreateApplicationOptions {
    pub fn new(service_instance_guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            name: name.into(),
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

/// Options for [`MqCloudService::get_application`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetApplicationOptions {
    pub service_instance_guid: String,
    pub application_id: String,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl GetApplicationOptions {
    pub fn new(service_instance_guid: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            application_id: application_id.into(),
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

/// Options for [`MqCloudService::delete_application`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteApplicationOptions {
    pub service_instance_guid: String,
    pub application_id: String,
    pub headers: StringMap,
}

impl DeleteApplicationOptions {
    pub fn new(service_instance_guid: impl Into<String>, application_id: impl Into<String>) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            application_id: application_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn headers(mut self, headers: StringMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Options for [`MqCloudService::create_application_apikey`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateApplicationApikeyOptions {
    pub service_instance_guid: String,
    pub application_id: String,
    /// Name of the new API key
    pub name: String,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl CreateApplicationApikeyOptions {
    pub fn new(
        service_instance_guid: impl Into<String>,
        application_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            application_id: application_id.into(),
            name: name.into(),
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
    /// List one page of applications
    pub async fn list_applications(
        &self,
        options: &ListApplicationsOptions,
    ) -> Result<DetailedResponse<ApplicationDetailsCollection>> {
        self.list_applications_with_context(Context::background(), options)
            .await
    }

    pub async fn list_applications_with_context(
        &self,
        ctx: Context,
        options: &ListApplicationsOptions,
    ) -> Result<DetailedResponse<ApplicationDetailsCollection>> {
        let req = request(
            Method::GET,
            APPLICATIONS_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .query_opt("offset", options.offset)
        .query_opt("limit", options.limit);

        self.client.invoke(ctx, &req).await
    }

    /// Create a pager over all applications
    pub fn applications_pager(
        &self,
        options: ListApplicationsOptions,
    ) -> Result<Pager<'_, Self, ListApplicationsOptions>> {
        Pager::new(self, options)
    }

    /// Register an application and create its first API key
    pub async fn create_application(
        &self,
        options: &CreateApplicationOptions,
    ) -> Result<DetailedResponse<ApplicationCreated>> {
        self.create_application_with_context(Context::background(), options)
            .await
    }

    pub async fn create_application_with_context(
        &self,
        ctx: Context,
        options: &CreateApplicationOptions,
    ) -> Result<DetailedResponse<ApplicationCreated>> {
        require("name", &options.name)?;

        let req = request(
            Method::POST,
            APPLICATIONS_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .json(json!({ "name": options.name }));

        self.client.invoke(ctx, &req).await
    }

    /// Get the details of an application
    pub async fn get_application(
        &self,
        options: &GetApplicationOptions,
    ) -> Result<DetailedResponse<ApplicationDetails>> {
        self.get_application_with_context(Context::background(), options)
            .await
    }

    pub async fn get_application_with_context(
        &self,
        ctx: Context,
        options: &GetApplicationOptions,
    ) -> Result<DetailedResponse<ApplicationDetails>> {
        let req = request(
            Method::GET,
            APPLICATION_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("application_id", &options.application_id);

        self.client.invoke(ctx, &req).await
    }

    /// Remove an application and revoke its API keys
    pub async fn delete_application(
        &self,
        options: &DeleteApplicationOptions,
    ) -> Result<DetailedResponse<()>> {
        self.delete_application_with_context(Context::background(), options)
            .await
    }

    pub async fn delete_application_with_context(
        &self,
        ctx: Context,
        options: &DeleteApplicationOptions,
    ) -> Result<DetailedResponse<()>> {
        let req = request(Method::DELETE, APPLICATION_PATH, None, &options.headers)
            .path_param("service_instance_guid", &options.service_instance_guid)
            .path_param("application_id", &options.application_id);

        self.client.invoke_empty(ctx, &req).await
    }

    /// Create an additional API key for an application
    pub async fn create_application_apikey(
        &self,
        options: &CreateApplicationApikeyOptions,
    ) -> Result<DetailedResponse<ApplicationApiKeyCreated>> {
        self.create_application_apikey_with_context(Context::background(), options)
            .await
    }

    pub async fn create_application_apikey_with_context(
        &self,
        ctx: Context,
        options: &CreateApplicationApikeyOptions,
    ) -> Result<DetailedResponse<ApplicationApiKeyCreated>> {
        require("name", &options.name)?;

        let req = request(
            Method::POST,
            "/v1/{service_instance_guid}/applications/{application_id}/api_key",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("application_id", &options.application_id)
        .json(json!({ "name": options.name }));

        self.client.invoke(ctx, &req).await
    }
}
