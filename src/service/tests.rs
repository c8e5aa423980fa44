//! Tests for service operations

use super::*;
use crate::auth::NoAuthAuthenticator;
use crate::models::{ChannelDetails, UpdateStrategy};
use crate::pagination::PagerState;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_regex, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GUID: &str = "a2b4d4bc-dadb-4637-bcec-9b7d1e723af8";
const QM_ID: &str = "b8e1aeda078009cf3db74e90b5d5869c";

fn service_for(server: &MockServer) -> MqCloudService {
    let config = ServiceConfig::builder().service_url(server.uri()).build();
    MqCloudService::new(config, Arc::new(NoAuthAuthenticator::new())).unwrap()
}

fn headers(pairs: &[(&str, &str)]) -> StringMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_create_queue_manager_options_round_trip() {
    let extra = headers(&[("X-Trace", "t-1")]);
    let options = CreateQueueManagerOptions::new(GUID, "testqm", "reserved-eu-de-cluster-f884", "lite")
        .display_name("A test queue manager")
        .version("9.3.2_2")
        .accept_language("fr")
        .headers(extra.clone());

    assert_eq!(options.service_instance_guid, GUID);
    assert_eq!(options.name, "testqm");
    assert_eq!(options.location, "reserved-eu-de-cluster-f884");
    assert_eq!(options.size, "lite");
    assert_eq!(options.display_name.as_deref(), Some("A test queue manager"));
    assert_eq!(options.version.as_deref(), Some("9.3.2_2"));
    assert_eq!(options.accept_language.as_deref(), Some("fr"));
    assert_eq!(options.headers, extra);
}

#[test]
fn test_list_options_round_trip() {
    let options = ListUsersOptions::new(GUID).offset(0).limit(10);
    assert_eq!(options.offset, Some(0));
    assert_eq!(options.limit, Some(10));
    assert!(options.accept_language.is_none());
    assert!(options.headers.is_empty());

    let options = ListApplicationsOptions::new(GUID).limit(25);
    assert_eq!(options.offset, None);
    assert_eq!(options.limit, Some(25));
}

#[test]
fn test_set_certificate_ams_channels_options_round_trip() {
    let options = SetCertificateAmsChannelsOptions::new(
        GUID,
        QM_ID,
        "9b7d1e723af8233",
        vec![ChannelDetails::new("CLOUD.APP.SVRCONN")],
    )
    .update_strategy(UpdateStrategy::Replace);

    assert_eq!(options.certificate_id, "9b7d1e723af8233");
    assert_eq!(options.channels, vec![ChannelDetails::new("CLOUD.APP.SVRCONN")]);
    assert_eq!(options.update_strategy, Some(UpdateStrategy::Replace));
}

#[tokio::test]
async fn test_certificate_file_from_path() {
    let mut file = tempfile::Builder::new().suffix(".pem").tempfile().unwrap();
    file.write_all(b"-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n")
        .unwrap();

    let cert = CertificateFile::from_path(file.path()).await.unwrap();
    assert!(cert.data.starts_with(b"-----BEGIN CERTIFICATE-----"));
    assert_eq!(
        cert.file_name.as_deref(),
        file.path().file_name().and_then(|n| n.to_str())
    );
}

#[tokio::test]
async fn test_certificate_file_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let result = CertificateFile::from_path(dir.path().join("absent.pem")).await;
    assert!(matches!(result, Err(Error::Io(_))));
}

// ============================================================================
// Operations
// ============================================================================

#[tokio::test]
async fn test_get_usage_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/{GUID}/usage")))
        .and(header("Accept-Language", "en"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"vpc_entitlement": 2.0, "vpc_usage": 0.5})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let response = service
        .get_usage_details(&GetUsageDetailsOptions::new(GUID).accept_language("en"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    let usage = response.into_result().unwrap();
    assert_eq!(usage.vpc_entitlement, Some(2.0));
    assert_eq!(usage.vpc_usage, Some(0.5));
}

#[tokio::test]
async fn test_get_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/{GUID}/options")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locations": ["ibmcloud_eu_de"],
            "sizes": ["xsmall", "small"],
            "versions": ["9.3.3_1"],
            "latest_version": "9.3.3_1"
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let options = service
        .get_options(&GetOptionsOptions::new(GUID))
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(options.sizes, vec!["xsmall", "small"]);
    assert_eq!(options.latest_version.as_deref(), Some("9.3.3_1"));
}

#[tokio::test]
async fn test_create_queue_manager_sends_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/{GUID}/queue_managers")))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "name": "testqm",
            "location": "ibmcloud_eu_de",
            "size": "xsmall",
            "version": "9.3.3_1"
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "queue_manager_uri": format!("/v1/{GUID}/queue_managers/{QM_ID}"),
            "queue_manager_status_uri": format!("/v1/{GUID}/queue_managers/{QM_ID}/status"),
            "queue_manager_id": QM_ID
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let options =
        CreateQueueManagerOptions::new(GUID, "testqm", "ibmcloud_eu_de", "xsmall").version("9.3.3_1");
    let response = service.create_queue_manager(&options).await.unwrap();

    assert_eq!(response.status_code, 202);
    assert_eq!(
        response.into_result().unwrap().queue_manager_id.as_deref(),
        Some(QM_ID)
    );
}

#[tokio::test]
async fn test_create_queue_manager_requires_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let options = CreateQueueManagerOptions::new(GUID, "", "ibmcloud_eu_de", "xsmall");
    let err = service.create_queue_manager(&options).await.unwrap_err();

    assert!(matches!(err, Error::MissingParameter { ref name } if name == "name"));
}

#[tokio::test]
async fn test_get_queue_manager_requires_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let err = service
        .get_queue_manager(&GetQueueManagerOptions::new(GUID, ""))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingParameter { ref name } if name == "queue_manager_id"));
}

#[tokio::test]
async fn test_list_queue_managers_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/{GUID}/queue_managers")))
        .and(query_param("offset", "5"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 5,
            "limit": 2,
            "queue_managers": [{"id": "qm-6"}, {"id": "qm-7"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let options = ListQueueManagersOptions::new(GUID).offset(5).limit(2);
    let page = service
        .list_queue_managers(&options)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(page.queue_managers.len(), 2);
    assert_eq!(page.offset, Some(5));
}

#[tokio::test]
async fn test_queue_managers_pager_follows_next() {
    let mock_server = MockServer::start().await;
    let base = format!("/v1/{GUID}/queue_managers");

    Mock::given(method("GET"))
        .and(path(base.clone()))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "limit": 1,
            "next": {"href": format!("{}{base}?offset=1&limit=1", mock_server.uri())},
            "queue_managers": [{"id": "qm-1"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(base.clone()))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 1,
            "limit": 1,
            "queue_managers": [{"id": "qm-2"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let mut pager = service
        .queue_managers_pager(ListQueueManagersOptions::new(GUID).limit(1))
        .unwrap();

    let first = pager.get_next().await.unwrap();
    assert_eq!(first[0].id.as_deref(), Some("qm-1"));
    assert_eq!(pager.state(), PagerState::HasMore(1));

    let second = pager.get_next().await.unwrap();
    assert_eq!(second[0].id.as_deref(), Some("qm-2"));
    assert!(!pager.has_next());
}

#[tokio::test]
async fn test_pager_rejects_preset_offset() {
    let mock_server = MockServer::start().await;
    let service = service_for(&mock_server);

    let err = service
        .users_pager(ListUsersOptions::new(GUID).offset(3))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "offset"));
}

#[tokio::test]
async fn test_set_queue_manager_version() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("/v1/{GUID}/queue_managers/{QM_ID}/version")))
        .and(body_json(json!({"version": "9.3.3_1"})))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({"queue_manager_id": QM_ID})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let response = service
        .set_queue_manager_version(&SetQueueManagerVersionOptions::new(GUID, QM_ID, "9.3.3_1"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 202);
}

#[tokio::test]
async fn test_queue_manager_read_operations() {
    let mock_server = MockServer::start().await;
    let qm_path = format!("/v1/{GUID}/queue_managers/{QM_ID}");

    Mock::given(method("GET"))
        .and(path(format!("{qm_path}/status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "running"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{qm_path}/available_versions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "versions": [{"version": "9.3.3_1", "target_date": "2024-01-01T00:00:00Z"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{qm_path}/connection_info")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channel": [{"name": "CLOUD.APP.SVRCONN", "type": "clientConnection"}]
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    let status = service
        .get_queue_manager_status(&GetQueueManagerStatusOptions::new(GUID, QM_ID))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(status.status.as_deref(), Some("running"));

    let upgrades = service
        .get_queue_manager_available_upgrade_versions(
            &GetQueueManagerAvailableUpgradeVersionsOptions::new(GUID, QM_ID),
        )
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(upgrades.total_count, Some(1));
    assert_eq!(upgrades.versions[0].version.as_deref(), Some("9.3.3_1"));

    let info = service
        .get_queue_manager_connection_info(&GetQueueManagerConnectionInfoOptions::new(GUID, QM_ID))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(info.channel[0]["name"], "CLOUD.APP.SVRCONN");
}

#[tokio::test]
async fn test_delete_queue_manager() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/v1/{GUID}/queue_managers/{QM_ID}")))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(json!({"queue_manager_id": QM_ID})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let response = service
        .delete_queue_manager(&DeleteQueueManagerOptions::new(GUID, QM_ID))
        .await
        .unwrap();
    assert_eq!(response.status_code, 202);
}

#[tokio::test]
async fn test_create_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/{GUID}/users")))
        .and(body_json(json!({"email": "ada@example.com", "name": "ada"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "u-1",
            "name": "ada",
            "email": "ada@example.com",
            "iam_managed": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let user = service
        .create_user(&CreateUserOptions::new(GUID, "ada@example.com", "ada"))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(user.id.as_deref(), Some("u-1"));
    assert_eq!(user.iam_managed, Some(false));
}

#[tokio::test]
async fn test_delete_user_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/v1/{GUID}/users/u-1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let response = service
        .delete_user(&DeleteUserOptions::new(GUID, "u-1"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 204);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_delete_user_ignores_text_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/v1/{GUID}/users/u-1")))
        .respond_with(ResponseTemplate::new(200).set_body_raw("Deleted", "text/plain"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let response = service
        .delete_user(&DeleteUserOptions::new(GUID, "u-1"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_delete_application_ignores_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/v1/{GUID}/applications/app-1")))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let response = service
        .delete_application(&DeleteApplicationOptions::new(GUID, "app-1"))
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/{GUID}/users/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "user_not_found", "message": "User not found"}],
            "trace": "t-1"
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let err = service
        .get_user(&GetUserOptions::new(GUID, "missing"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "HTTP 404: User not found");
}

#[tokio::test]
async fn test_applications() {
    let mock_server = MockServer::start().await;
    let apps = format!("/v1/{GUID}/applications");

    Mock::given(method("POST"))
        .and(path(apps.clone()))
        .and(body_json(json!({"name": "orders"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "app-1",
            "name": "orders",
            "api_key_name": "orders-key",
            "api_key_id": "key-1",
            "api_key": "s3cret"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{apps}/app-1/api_key")))
        .and(body_json(json!({"name": "rotated"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "api_key_name": "rotated",
            "api_key_id": "key-2",
            "api_key": "n3w"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{apps}/app-1")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "app-1", "name": "orders"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{apps}/app-1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    let created = service
        .create_application(&CreateApplicationOptions::new(GUID, "orders"))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(created.api_key.as_deref(), Some("s3cret"));

    let key = service
        .create_application_apikey(&CreateApplicationApikeyOptions::new(GUID, "app-1", "rotated"))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(key.api_key_id.as_deref(), Some("key-2"));

    let app = service
        .get_application(&GetApplicationOptions::new(GUID, "app-1"))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(app.name.as_deref(), Some("orders"));

    let deleted = service
        .delete_application(&DeleteApplicationOptions::new(GUID, "app-1"))
        .await
        .unwrap();
    assert_eq!(deleted.status_code, 204);
}

#[tokio::test]
async fn test_applications_pager_get_all() {
    let mock_server = MockServer::start().await;
    let apps = format!("/v1/{GUID}/applications");

    Mock::given(method("GET"))
        .and(path(apps.clone()))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": {"href": format!("{apps}?offset=2")},
            "applications": [{"id": "a-1"}, {"id": "a-2"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(apps.clone()))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "applications": [{"id": "a-3"}]
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let all = service
        .applications_pager(ListApplicationsOptions::new(GUID))
        .unwrap()
        .get_all()
        .await
        .unwrap();

    let ids: Vec<_> = all.iter().filter_map(|a| a.id.as_deref()).collect();
    assert_eq!(ids, vec!["a-1", "a-2", "a-3"]);
}

#[tokio::test]
async fn test_create_trust_store_pem_certificate_multipart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/{GUID}/queue_managers/{QM_ID}/certificates/trust_store"
        )))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"label\""))
        .and(body_string_contains("partner-ca"))
        .and(body_string_contains("name=\"certificate_file\""))
        .and(body_string_contains("-----BEGIN CERTIFICATE-----"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "c-1",
            "label": "partner-ca",
            "certificate_type": "trust_store",
            "trusted": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let cert = CertificateFile::from_bytes(
        "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n",
    )
    .file_name("partner.pem");
    let details = service
        .create_trust_store_pem_certificate(&CreateTrustStorePemCertificateOptions::new(
            GUID,
            QM_ID,
            "partner-ca",
            cert,
        ))
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(details.label.as_deref(), Some("partner-ca"));
    assert_eq!(details.trusted, Some(true));
}

#[tokio::test]
async fn test_create_key_store_certificate_rejects_empty_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let options = CreateKeyStorePemCertificateOptions::new(
        GUID,
        QM_ID,
        "server",
        CertificateFile::from_bytes(Vec::new()),
    );
    let err = service
        .create_key_store_pem_certificate(&options)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingParameter { ref name } if name == "certificate_file"));
}

#[tokio::test]
async fn test_list_and_download_key_store_certificates() {
    let mock_server = MockServer::start().await;
    let store = format!("/v1/{GUID}/queue_managers/{QM_ID}/certificates/key_store");

    Mock::given(method("GET"))
        .and(path(store.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "key_store": [{"id": "k-1", "label": "qmgrcert", "is_default": true}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{store}/k-1/download")))
        .and(header("Accept", "application/octet-stream"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/octet-stream")
                .set_body_bytes(b"PEMDATA".to_vec()),
        )
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    let list = service
        .list_key_store_certificates(&ListKeyStoreCertificatesOptions::new(GUID, QM_ID))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(list.total_count, Some(1));
    assert_eq!(list.key_store[0].is_default, Some(true));

    let download = service
        .download_key_store_certificate(&DownloadKeyStoreCertificateOptions::new(
            GUID, QM_ID, "k-1",
        ))
        .await
        .unwrap();
    let bytes = download.into_result().unwrap().bytes().await.unwrap();
    assert_eq!(&bytes[..], b"PEMDATA");
}

#[tokio::test]
async fn test_delete_trust_store_certificate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!(
            "/v1/{GUID}/queue_managers/{QM_ID}/certificates/trust_store/c-1"
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let response = service
        .delete_trust_store_certificate(&DeleteTrustStoreCertificateOptions::new(
            GUID, QM_ID, "c-1",
        ))
        .await
        .unwrap();
    assert_eq!(response.status_code, 204);
}

#[tokio::test]
async fn test_certificate_ams_channels() {
    let mock_server = MockServer::start().await;
    let ams = format!("/v1/{GUID}/queue_managers/{QM_ID}/certificates/key_store/k-1/config/ams");

    Mock::given(method("GET"))
        .and(path(ams.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channels": [{"name": "CLOUD.ADMIN.SVRCONN"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path(ams.clone()))
        .and(body_json(json!({
            "channels": [{"name": "CLOUD.APP.SVRCONN"}],
            "update_strategy": "replace"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channels": [{"name": "CLOUD.APP.SVRCONN"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    let current = service
        .get_certificate_ams_channels(&GetCertificateAmsChannelsOptions::new(GUID, QM_ID, "k-1"))
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(current.channels, vec![ChannelDetails::new("CLOUD.ADMIN.SVRCONN")]);

    let options = SetCertificateAmsChannelsOptions::new(
        GUID,
        QM_ID,
        "k-1",
        vec![ChannelDetails::new("CLOUD.APP.SVRCONN")],
    )
    .update_strategy(UpdateStrategy::Replace);
    let updated = service
        .set_certificate_ams_channels(&options)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(updated.channels, vec![ChannelDetails::new("CLOUD.APP.SVRCONN")]);
}

#[tokio::test]
async fn test_caller_headers_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/v1/{GUID}/queue_managers/{QM_ID}/certificates/trust_store"
        )))
        .and(header("X-Correlation-Id", "c-42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"total_count": 0, "trust_store": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let options = ListTrustStoreCertificatesOptions::new(GUID, QM_ID)
        .headers(headers(&[("X-Correlation-Id", "c-42")]));
    let list = service
        .list_trust_store_certificates(&options)
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert!(list.trust_store.is_empty());
}
