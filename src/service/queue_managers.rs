//! Queue manager operations

use super::{request, require, MqCloudService};
use crate::error::Result;
use crate::http::{Context, DetailedResponse};
use crate::models::{
    ConnectionInfo, QueueManagerDetails, QueueManagerDetailsCollection, QueueManagerStatus,
    QueueManagerTaskStatus, QueueManagerVersionUpgrades,
};
use crate::pagination::{ListOperation, Pager};
use crate::types::{Method, StringMap};
use async_trait::async_trait;
use serde::Serialize;

const QUEUE_MANAGERS_PATH: &str = "/v1/{service_instance_guid}/queue_managers";
const QUEUE_MANAGER_PATH: &str = "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}";

// ============================================================================
// Options
// ============================================================================

/// Options for [`MqCloudService::create_queue_manager`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateQueueManagerOptions {
    pub service_instance_guid: String,
    /// Queue manager name; must be unique within the instance
    pub name: String,
    /// Deployment location, one of those returned by `get_options`
    pub location: String,
    /// Deployment size, one of those returned by `get_options`
    pub size: String,
    pub display_name: Option<String>,
    /// MQ version; the latest is used when absent
    pub version: Option<String>,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl CreateQueueManagerOptions {
    pub fn new(
        service_instance_guid: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            name: name.into(),
            location: location.into(),
            size: size.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
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

#[derive(Serialize)]
struct CreateQueueManagerBody<'a> {
    name: &'a str,
    location: &'a str,
    size: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
}

/// Options for [`MqCloudService::list_queue_managers`]
///
/// Also drives [`MqCloudService::queue_managers_pager`], which manages the
/// offset itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQueueManagersOptions {
    pub service_instance_guid: String,
    /// Index of the first queue manager to return
    pub offset: Option<i64>,
    /// Maximum number of queue managers per page
    pub limit: Option<i64>,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl ListQueueManagersOptions {
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
impl ListOperation<MqCloudService> for ListQueueManagersOptions {
    type Page = QueueManagerDetailsCollection;

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
    ) -> Result<Option<QueueManagerDetailsCollection>> {
        Ok(client
            .list_queue_managers_with_context(ctx, self)
            .await?
            .into_result())
    }
}

/// Identifies one queue manager; shared shape of the per-queue-manager calls
macro_rules! queue_manager_options {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            pub service_instance_guid: String,
            pub queue_manager_id: String,
            pub accept_language: Option<String>,
            pub headers: StringMap,
        }

        impl $name {
            pub fn new(
                service_instance_guid: impl Into<String>,
                queue_manager_id: impl Into<String>,
            ) -> Self {
                Self {
                    service_instance_guid: service_instance_guid.into(),
                    queue_manager_id: queue_manager_id.into(),
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
    };
}

queue_manager_options!(
    /// Options for [`MqCloudService::get_queue_manager`]
    GetQueueManagerOptions
);
queue_manager_options!(
    /// Options for [`MqCloudService::delete_queue_manager`]
    DeleteQueueManagerOptions
);
queue_manager_options!(
    /// Options for [`MqCloudService::get_queue_manager_available_upgrade_versions`]
    GetQueueManagerAvailableUpgradeVersionsOptions
);
queue_manager_options!(
    /// Options for [`MqCloudService::get_queue_manager_connection_info`]
    GetQueueManagerConnectionInfoOptions
);
queue_manager_options!(
    /// Options for [`MqCloudService::get_queue_manager_status`]
    GetQueueManagerStatusOptions
);

/// Options for [`MqCloudService::set_queue_manager_version`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetQueueManagerVersionOptions {
    pub service_instance_guid: String,
    pub queue_manager_id: String,
    /// Target MQ version
    pub version: String,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl SetQueueManagerVersionOptions {
    pub fn new(
        service_instance_guid: impl Into<String>,
        queue_manager_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            queue_manager_id: queue_manager_id.into(),
            version: version.into(),
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

// ============================================================================
// Operations
// ============================================================================

impl MqCloudService {
    /// Provision a queue manager
    ///
    /// Provisioning is asynchronous; poll the returned status URI.
    pub async fn create_queue_manager(
        &self,
        options: &CreateQueueManagerOptions,
    ) -> Result<DetailedResponse<QueueManagerTaskStatus>> {
        self.create_queue_manager_with_context(Context::background(), options)
            .await
    }

    pub async fn create_queue_manager_with_context(
        &self,
        ctx: Context,
        options: &CreateQueueManagerOptions,
    ) -> Result<DetailedResponse<QueueManagerTaskStatus>> {
        require("name", &options.name)?;
        require("location", &options.location)?;
        require("size", &options.size)?;

        let body = CreateQueueManagerBody {
            name: &options.name,
            location: &options.location,
            size: &options.size,
            display_name: options.display_name.as_deref(),
            version: options.version.as_deref(),
        };
        let req = request(
            Method::POST,
            QUEUE_MANAGERS_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .json_body(&body)?;

        self.client.invoke(ctx, &req).await
    }

    /// List one page of queue managers
    pub async fn list_queue_managers(
        &self,
        options: &ListQueueManagersOptions,
    ) -> Result<DetailedResponse<QueueManagerDetailsCollection>> {
        self.list_queue_managers_with_context(Context::background(), options)
            .await
    }

    pub async fn list_queue_managers_with_context(
        &self,
        ctx: Context,
        options: &ListQueueManagersOptions,
    ) -> Result<DetailedResponse<QueueManagerDetailsCollection>> {
        let req = request(
            Method::GET,
            QUEUE_MANAGERS_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .query_opt("offset", options.offset)
        .query_opt("limit", options.limit);

        self.client.invoke(ctx, &req).await
    }

    /// Create a pager over all queue managers
    ///
    /// Fails when `options` already carries an offset.
    pub fn queue_managers_pager(
        &self,
        options: ListQueueManagersOptions,
    ) -> Result<Pager<'_, Self, ListQueueManagersOptions>> {
        Pager::new(self, options)
    }

    /// Get the details of a queue manager
    pub async fn get_queue_manager(
        &self,
        options: &GetQueueManagerOptions,
    ) -> Result<DetailedResponse<QueueManagerDetails>> {
        self.get_queue_manager_with_context(Context::background(), options)
            .await
    }

    pub async fn get_queue_manager_with_context(
        &self,
        ctx: Context,
        options: &GetQueueManagerOptions,
    ) -> Result<DetailedResponse<QueueManagerDetails>> {
        let req = request(
            Method::GET,
            QUEUE_MANAGER_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id);

        self.client.invoke(ctx, &req).await
    }

    /// Delete a queue manager
    pub async fn delete_queue_manager(
        &self,
        options: &DeleteQueueManagerOptions,
    ) -> Result<DetailedResponse<QueueManagerTaskStatus>> {
        self.delete_queue_manager_with_context(Context::background(), options)
            .await
    }

    pub async fn delete_queue_manager_with_context(
        &self,
        ctx: Context,
        options: &DeleteQueueManagerOptions,
    ) -> Result<DetailedResponse<QueueManagerTaskStatus>> {
        let req = request(
            Method::DELETE,
            QUEUE_MANAGER_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id);

        self.client.invoke(ctx, &req).await
    }

    /// Upgrade a queue manager to another MQ version
    pub async fn set_queue_manager_version(
        &self,
        options: &SetQueueManagerVersionOptions,
    ) -> Result<DetailedResponse<QueueManagerTaskStatus>> {
        self.set_queue_manager_version_with_context(Context::background(), options)
            .await
    }

    pub async fn set_queue_manager_version_with_context(
        &self,
        ctx: Context,
        options: &SetQueueManagerVersionOptions,
    ) -> Result<DetailedResponse<QueueManagerTaskStatus>> {
        require("version", &options.version)?;

        let req = request(
            Method::PUT,
            "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/version",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .json(serde_json::json!({ "version": options.version }));

        self.client.invoke(ctx, &req).await
    }

    /// List the versions a queue manager can be upgraded to
    pub async fn get_queue_manager_available_upgrade_versions(
        &self,
        options: &GetQueueManagerAvailableUpgradeVersionsOptions,
    ) -> Result<DetailedResponse<QueueManagerVersionUpgrades>> {
        self.get_queue_manager_available_upgrade_versions_with_context(
            Context::background(),
            options,
        )
        .await
    }

    pub async fn get_queue_manager_available_upgrade_versions_with_context(
        &self,
        ctx: Context,
        options: &GetQueueManagerAvailableUpgradeVersionsOptions,
    ) -> Result<DetailedResponse<QueueManagerVersionUpgrades>> {
        let req = request(
            Method::GET,
            "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/available_versions",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id);

        self.client.invoke(ctx, &req).await
    }

    /// Get the client channel definition table of a queue manager
    pub async fn get_queue_manager_connection_info(
        &self,
        options: &GetQueueManagerConnectionInfoOptions,
    ) -> Result<DetailedResponse<ConnectionInfo>> {
        self.get_queue_manager_connection_info_with_context(Context::background(), options)
            .await
    }

    pub async fn get_queue_manager_connection_info_with_context(
        &self,
        ctx: Context,
        options: &GetQueueManagerConnectionInfoOptions,
    ) -> Result<DetailedResponse<ConnectionInfo>> {
        let req = request(
            Method::GET,
            "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/connection_info",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id);

        self.client.invoke(ctx, &req).await
    }

    /// Get the status of a queue manager
    pub async fn get_queue_manager_status(
        &self,
        options: &GetQueueManagerStatusOptions,
    ) -> Result<DetailedResponse<QueueManagerStatus>> {
        self.get_queue_manager_status_with_context(Context::background(), options)
            .await
    }

    pub async fn get_queue_manager_status_with_context(
        &self,
        ctx: Context,
        options: &GetQueueManagerStatusOptions,
    ) -> Result<DetailedResponse<QueueManagerStatus>> {
        let req = request(
            Method::GET,
            "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/status",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id);

        self.client.invoke(ctx, &req).await
    }
}
