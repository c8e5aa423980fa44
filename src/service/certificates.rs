//! Trust store and key store certificate operations

use super::{request, require, MqCloudService};
use crate::error::{Error, Result};
use crate::http::{Context, DetailedResponse, DownloadStream, MultipartField};
use crate::models::{
    ChannelDetails, ChannelsDetails, KeyStoreCertificateDetails,
    KeyStoreCertificateDetailsCollection, TrustStoreCertificateDetails,
    TrustStoreCertificateDetailsCollection, UpdateStrategy,
};
use crate::types::{Method, StringMap};
use bytes::Bytes;
use serde::Serialize;
use std::path::Path;

const TRUST_STORE_PATH: &str =
    "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/certificates/trust_store";
const TRUST_STORE_CERTIFICATE_PATH: &str = "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/certificates/trust_store/{certificate_id}";
const KEY_STORE_PATH: &str =
    "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/certificates/key_store";
const KEY_STORE_CERTIFICATE_PATH: &str = "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/certificates/key_store/{certificate_id}";

const PEM_CONTENT_TYPE: &str = "application/octet-stream";

// ============================================================================
// Certificate upload
// ============================================================================

/// PEM certificate contents to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateFile {
    /// File name reported in the multipart part
    pub file_name: Option<String>,
    /// Raw PEM bytes
    pub data: Bytes,
}

impl CertificateFile {
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self {
            file_name: None,
            data: data.into(),
        }
    }

    /// Read a certificate from disk, keeping its file name
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        Ok(Self {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            data: Bytes::from(data),
        })
    }

    #[must_use]
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    fn into_fields(self, label: &str) -> Result<Vec<MultipartField>> {
        if self.data.is_empty() {
            return Err(Error::missing_parameter("certificate_file"));
        }
        Ok(vec![
            MultipartField::text("label", label),
            MultipartField::file(
                "certificate_file",
                self.file_name,
                Some(PEM_CONTENT_TYPE.to_string()),
                self.data,
            ),
        ])
    }
}

// ============================================================================
// Options
// ============================================================================

/// Options naming a queue manager's certificate store
macro_rules! store_options {
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

/// Options naming one certificate in a store
macro_rules! certificate_options {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            pub service_instance_guid: String,
            pub queue_manager_id: String,
            pub certificate_id: String,
            pub accept_language: Option<String>,
            pub headers: StringMap,
        }

        impl $name {
            pub fn new(
                service_instance_guid: impl Into<String>,
                queue_manager_id: impl Into<String>,
                certificate_id: impl Into<String>,
            ) -> Self {
                Self {
                    service_instance_guid: service_instance_guid.into(),
                    queue_manager_id: queue_manager_id.into(),
                    certificate_id: certificate_id.into(),
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

store_options!(
    /// Options for [`MqCloudService::list_trust_store_certificates`]
    ListTrustStoreCertificatesOptions
);
store_options!(
    /// Options for [`MqCloudService::list_key_store_certificates`]
    ListKeyStoreCertificatesOptions
);
certificate_options!(
    /// Options for [`MqCloudService::get_trust_store_certificate`]
    GetTrustStoreCertificateOptions
);
certificate_options!(
    /// Options for [`MqCloudService::delete_trust_store_certificate`]
    DeleteTrustStoreCertificateOptions
);
certificate_options!(
    /// Options for [`MqCloudService::download_trust_store_certificate`]
    DownloadTrustStoreCertificateOptions
);
certificate_options!(
    /// Options for [`MqCloudService::get_key_store_certificate`]
    GetKeyStoreCertificateOptions
);
certificate_options!(
    /// Options for [`MqCloudService::delete_key_store_certificate`]
    DeleteKeyStoreCertificateOptions
);
certificate_options!(
    /// Options for [`MqCloudService::download_key_store_certificate`]
    DownloadKeyStoreCertificateOptions
);
certificate_options!(
    /// Options for [`MqCloudService::get_certificate_ams_channels`]
    GetCertificateAmsChannelsOptions
);

/// Options for [`MqCloudService::create_trust_store_pem_certificate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTrustStorePemCertificateOptions {
    pub service_instance_guid: String,
    pub queue_manager_id: String,
    /// Label of the certificate in the store
    pub label: String,
    pub certificate_file: CertificateFile,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl CreateTrustStorePemCertificateOptions {
    pub fn new(
        service_instance_guid: impl Into<String>,
        queue_manager_id: impl Into<String>,
        label: impl Into<String>,
        certificate_file: CertificateFile,
    ) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            queue_manager_id: queue_manager_id.into(),
            label: label.into(),
            certificate_file,
            accept_language: None,
            headers: StringMap::new(),
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

/// Options for [`MqCloudService::create_key_store_pem_certificate`]
///
/// The PEM must hold the certificate chain and its private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateKeyStorePemCertificateOptions {
    pub service_instance_guid: String,
    pub queue_manager_id: String,
    pub label: String,
    pub certificate_file: CertificateFile,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl CreateKeyStorePemCertificateOptions {
    pub fn new(
        service_instance_guid: impl Into<String>,
        queue_manager_id: impl Into<String>,
        label: impl Into<String>,
        certificate_file: CertificateFile,
    ) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            queue_manager_id: queue_manager_id.into(),
            label: label.into(),
            certificate_file,
            accept_language: None,
            headers: StringMap::new(),
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

/// Options for [`MqCloudService::set_certificate_ams_channels`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetCertificateAmsChannelsOptions {
    pub service_instance_guid: String,
    pub queue_manager_id: String,
    pub certificate_id: String,
    /// Channels to apply
    pub channels: Vec<ChannelDetails>,
    /// How `channels` combines with the current list; the server appends when absent
    pub update_strategy: Option<UpdateStrategy>,
    pub accept_language: Option<String>,
    pub headers: StringMap,
}

impl SetCertificateAmsChannelsOptions {
    pub fn new(
        service_instance_guid: impl Into<String>,
        queue_manager_id: impl Into<String>,
        certificate_id: impl Into<String>,
        channels: Vec<ChannelDetails>,
    ) -> Self {
        Self {
            service_instance_guid: service_instance_guid.into(),
            queue_manager_id: queue_manager_id.into(),
            certificate_id: certificate_id.into(),
            channels,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn update_strategy(mut self, update_strategy: UpdateStrategy) -> Self {
        self.update_strategy = Some(update_strategy);
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
struct SetAmsChannelsBody<'a> {
    channels: &'a [ChannelDetails],
    #[serde(skip_serializing_if = "Option::is_none")]
    update_strategy: Option<UpdateStrategy>,
}

// ============================================================================
// Operations
// ============================================================================

impl MqCloudService {
    /// Upload a PEM certificate to a queue manager's trust store
    pub async fn create_trust_store_pem_certificate(
        &self,
        options: &CreateTrustStorePemCertificateOptions,
    ) -> Result<DetailedResponse<TrustStoreCertificateDetails>> {
        self.create_trust_store_pem_certificate_with_context(Context::background(), options)
            .await
    }

    pub async fn create_trust_store_pem_certificate_with_context(
        &self,
        ctx: Context,
        options: &CreateTrustStorePemCertificateOptions,
    ) -> Result<DetailedResponse<TrustStoreCertificateDetails>> {
        require("label", &options.label)?;
        let fields = options.certificate_file.clone().into_fields(&options.label)?;

        let req = request(
            Method::POST,
            TRUST_STORE_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .multipart(fields);

        self.client.invoke(ctx, &req).await
    }

    /// List the certificates in a queue manager's trust store
    pub async fn list_trust_store_certificates(
        &self,
        options: &ListTrustStoreCertificatesOptions,
    ) -> Result<DetailedResponse<TrustStoreCertificateDetailsCollection>> {
        self.list_trust_store_certificates_with_context(Context::background(), options)
            .await
    }

    pub async fn list_trust_store_certificates_with_context(
        &self,
        ctx: Context,
        options: &ListTrustStoreCertificatesOptions,
    ) -> Result<DetailedResponse<TrustStoreCertificateDetailsCollection>> {
        let req = request(
            Method::GET,
            TRUST_STORE_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id);

        self.client.invoke(ctx, &req).await
    }

    /// Get a trust store certificate
    pub async fn get_trust_store_certificate(
        &self,
        options: &GetTrustStoreCertificateOptions,
    ) -> Result<DetailedResponse<TrustStoreCertificateDetails>> {
        self.get_trust_store_certificate_with_context(Context::background(), options)
            .await
    }

    pub async fn get_trust_store_certificate_with_context(
        &self,
        ctx: Context,
        options: &GetTrustStoreCertificateOptions,
    ) -> Result<DetailedResponse<TrustStoreCertificateDetails>> {
        let req = request(
            Method::GET,
            TRUST_STORE_CERTIFICATE_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .path_param("certificate_id", &options.certificate_id);

        self.client.invoke(ctx, &req).await
    }

    /// Delete a trust store certificate
    pub async fn delete_trust_store_certificate(
        &self,
        options: &DeleteTrustStoreCertificateOptions,
    ) -> Result<DetailedResponse<()>> {
        self.delete_trust_store_certificate_with_context(Context::background(), options)
            .await
    }

    pub async fn delete_trust_store_certificate_with_context(
        &self,
        ctx: Context,
        options: &DeleteTrustStoreCertificateOptions,
    ) -> Result<DetailedResponse<()>> {
        let req = request(
            Method::DELETE,
            TRUST_STORE_CERTIFICATE_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .path_param("certificate_id", &options.certificate_id);

        self.client.invoke_empty(ctx, &req).await
    }

    /// Download a trust store certificate as PEM
    pub async fn download_trust_store_certificate(
        &self,
        options: &DownloadTrustStoreCertificateOptions,
    ) -> Result<DetailedResponse<DownloadStream>> {
        self.download_trust_store_certificate_with_context(Context::background(), options)
            .await
    }

    pub async fn download_trust_store_certificate_with_context(
        &self,
        ctx: Context,
        options: &DownloadTrustStoreCertificateOptions,
    ) -> Result<DetailedResponse<DownloadStream>> {
        let req = request(
            Method::GET,
            "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/certificates/trust_store/{certificate_id}/download",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .path_param("certificate_id", &options.certificate_id)
        .binary_response();

        self.client.invoke_download(ctx, &req).await
    }

    /// Upload a PEM certificate with its private key to a queue manager's key store
    pub async fn create_key_store_pem_certificate(
        &self,
        options: &CreateKeyStorePemCertificateOptions,
    ) -> Result<DetailedResponse<KeyStoreCertificateDetails>> {
        self.create_key_store_pem_certificate_with_context(Context::background(), options)
            .await
    }

    pub async fn create_key_store_pem_certificate_with_context(
        &self,
        ctx: Context,
        options: &CreateKeyStorePemCertificateOptions,
    ) -> Result<DetailedResponse<KeyStoreCertificateDetails>> {
        require("label", &options.label)?;
        let fields = options.certificate_file.clone().into_fields(&options.label)?;

        let req = request(
            Method::POST,
            KEY_STORE_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .multipart(fields);

        self.client.invoke(ctx, &req).await
    }

    /// List the certificates in a queue manager's key store
    pub async fn list_key_store_certificates(
        &self,
        options: &ListKeyStoreCertificatesOptions,
    ) -> Result<DetailedResponse<KeyStoreCertificateDetailsCollection>> {
        self.list_key_store_certificates_with_context(Context::background(), options)
            .await
    }

    pub async fn list_key_store_certificates_with_context(
        &self,
        ctx: Context,
        options: &ListKeyStoreCertificatesOptions,
    ) -> Result<DetailedResponse<KeyStoreCertificateDetailsCollection>> {
        let req = request(
            Method::GET,
            KEY_STORE_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id);

        self.client.invoke(ctx, &req).await
    }

    /// Get a key store certificate
    pub async fn get_key_store_certificate(
        &self,
        options: &GetKeyStoreCertificateOptions,
    ) -> Result<DetailedResponse<KeyStoreCertificateDetails>> {
        self.get_key_store_certificate_with_context(Context::background(), options)
            .await
    }

    pub async fn get_key_store_certificate_with_context(
        &self,
        ctx: Context,
        options: &GetKeyStoreCertificateOptions,
    ) -> Result<DetailedResponse<KeyStoreCertificateDetails>> {
        let req = request(
            Method::GET,
            KEY_STORE_CERTIFICATE_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .path_param("certificate_id", &options.certificate_id);

        self.client.invoke(ctx, &req).await
    }

    /// Delete a key store certificate
    pub async fn delete_key_store_certificate(
        &self,
        options: &DeleteKeyStoreCertificateOptions,
    ) -> Result<DetailedResponse<()>> {
        self.delete_key_store_certificate_with_context(Context::background(), options)
            .await
    }

    pub async fn delete_key_store_certificate_with_context(
        &self,
        ctx: Context,
        options: &DeleteKeyStoreCertificateOptions,
    ) -> Result<DetailedResponse<()>> {
        let req = request(
            Method::DELETE,
            KEY_STORE_CERTIFICATE_PATH,
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .path_param("certificate_id", &options.certificate_id);

        self.client.invoke_empty(ctx, &req).await
    }

    /// Download a key store certificate as PEM
    pub async fn download_key_store_certificate(
        &self,
        options: &DownloadKeyStoreCertificateOptions,
    ) -> Result<DetailedResponse<DownloadStream>> {
        self.download_key_store_certificate_with_context(Context::background(), options)
            .await
    }

    pub async fn download_key_store_certificate_with_context(
        &self,
        ctx: Context,
        options: &DownloadKeyStoreCertificateOptions,
    ) -> Result<DetailedResponse<DownloadStream>> {
        let req = request(
            Method::GET,
            "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/certificates/key_store/{certificate_id}/download",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .path_param("certificate_id", &options.certificate_id)
        .binary_response();

        self.client.invoke_download(ctx, &req).await
    }

    /// Get the channels using a key store certificate for AMS
    pub async fn get_certificate_ams_channels(
        &self,
        options: &GetCertificateAmsChannelsOptions,
    ) -> Result<DetailedResponse<ChannelsDetails>> {
        self.get_certificate_ams_channels_with_context(Context::background(), options)
            .await
    }

    pub async fn get_certificate_ams_channels_with_context(
        &self,
        ctx: Context,
        options: &GetCertificateAmsChannelsOptions,
    ) -> Result<DetailedResponse<ChannelsDetails>> {
        let req = request(
            Method::GET,
            "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/certificates/key_store/{certificate_id}/config/ams",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .path_param("certificate_id", &options.certificate_id);

        self.client.invoke(ctx, &req).await
    }

    /// Update the channels using a key store certificate for AMS
    pub async fn set_certificate_ams_channels(
        &self,
        options: &SetCertificateAmsChannelsOptions,
    ) -> Result<DetailedResponse<ChannelsDetails>> {
        self.set_certificate_ams_channels_with_context(Context::background(), options)
            .await
    }

    pub async fn set_certificate_ams_channels_with_context(
        &self,
        ctx: Context,
        options: &SetCertificateAmsChannelsOptions,
    ) -> Result<DetailedResponse<ChannelsDetails>> {
        let body = SetAmsChannelsBody {
            channels: &options.channels,
            update_strategy: options.update_strategy,
        };
        let req = request(
            Method::PUT,
            "/v1/{service_instance_guid}/queue_managers/{queue_manager_id}/certificates/key_store/{certificate_id}/config/ams",
            options.accept_language.as_deref(),
            &options.headers,
        )
        .path_param("service_instance_guid", &options.service_instance_guid)
        .path_param("queue_manager_id", &options.queue_manager_id)
        .path_param("certificate_id", &options.certificate_id)
        .json_body(&body)?;

        self.client.invoke(ctx, &req).await
    }
}
