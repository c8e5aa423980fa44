//! User operations

use super::{request, require, MqCloudService};
use crate::error::Result;
use crate::http::{Context, DetailedResponse};
use crate::models::{UserDetails, UserDetailsCollection};
use crate::pagination::{ListOperation, Pager};
use crate::types::{Method, StringMap};
use async_trait::async_trait;
use serde_json::json;

const USERS_PATH: &str = "/v1/{service_instance_guid}/users";
const USER_PATH: &str = "/v1/{service_instance_guid}/users/{user_id}";

/// Options for [`MqCloudService::list_users`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUsersOptions {
    pub service_instance_guid: String,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl ListUsersOptions {
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
impl ListOperation<MqCloudService> for ListUsersOptions {
    type Page = UserDetailsCollection;

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
    ) -> Result<Option<UserDetailsCollection>> {
        Ok(client.list_users_with_context(ctx, self).await?.into_result())
    }
}

/// Options for [`MqCloudService::create_user`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserOptions {
    pub service_instance_guid: String,
    /// Email address of the user
    pub email: String,
    /// Short name used as the MQ user identity
    pub name: String,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl CreateUserOptions {
    pub fn new(
        service_instance_guid: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            email: email.into(),
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

/// Options for [`MqCloudService::get_user`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetUserOptions {
    pub service_instance_guid: String,
    pub user_id: String,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl GetUserOptions {
    pub fn new(service_instance_guid: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            user_id: user_id.into(),
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

/// Options for [`MqCloudService::delete_user`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteUserOptions {
    pub service_instance_guid: String,
    pub user_id: String,
    pub headers: StringMap,
}

impl DeleteUserOptions {
    pub fn new(service_instance_guid: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn headers(mut self, headers: StringMap) -> Self {
        self.headers = headers;
        self
    }
}

impl MqCloudService {
    /// List one page of users
    pub async fn list_users(
        &self,
        options: &ListUsersOptions,
    ) -> Result<DetailedResponse<UserDetailsCollection>> {
        self.list_users_with_context(Context::background(), options)
            .await
    }

    pub async fn list_users_with_context(
        &self,
        ctx: Context,
        options: &ListUsersOptions,
    ) -> Result<DetailedResponse<UserDetailsCollection>> {
        let req = request(
            Method::GET,
            USERS_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .query_opt("offset", options.offset)
        .query_opt("limit", options.limit);

        self.client.invoke(ctx, &req).await
    }

    /// Create a pager over all users
    pub fn users_pager(&self, options: ListUsersOptions) -> Result<Pager<'_, Self, ListUsersOptions>> {
        Pager::new(self, options)
    }

    /// Add a user to the service instance
    pub async fn create_user(
        &self,
        options: &CreateUserOptions,
    ) -> Result<DetailedResponse<UserDetails>> {
        self.create_user_with_context(Context::background(), options)
            .await
    }

    pub async fn create_user_with_context(
        &self,
        ctx: Context,
        options: &CreateUserOptions,
    ) -> Result<DetailedResponse<UserDetails>> {
        require("email", &options.email)?;
        require("name", &options.name)?;

        let req = request(
            Method::POST,
            USERS_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .json(json!({ "email": options.email, "name": options.name }));

        self.client.invoke(ctx, &req).await
    }

    /// Get the details of a user
    pub async fn get_user(&self, options: &GetUserOptions) -> Result<DetailedResponse<UserDetails>> {
        self.get_user_with_context(Context::background(), options)
            .await
    }

    pub async fn get_user_with_context(
        &self,
        ctx: Context,
        options: &GetUserOptions,
    ) -> Result<DetailedResponse<UserDetails>> {
        let req = request(
            Method::GET,
            USER_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("user_id", &options.user_id);

        self.client.invoke(ctx, &req).await
    }

    /// Remove a user from the service instance
    pub async fn delete_user(&self, options: &DeleteUserOptions) -> Result<DetailedResponse<()>> {
        self.delete_user_with_context(Context::background(), options)
            .await
    }

    pub async fn delete_user_with_context(
        &self,
        ctx: Context,
        options: &DeleteUserOptions,
    ) -> Result<DetailedResponse<()>> {
        let req = request(Method::DELETE, USER_PATH, None, &options.headers)
            .path_param("service_instance_guid", &options.service_instance_guid)
            .path_param("user_id", &options.user_id);

        self.client.invoke_empty(ctx, &req).await
    }
}
