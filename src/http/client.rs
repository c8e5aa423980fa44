//! HTTP client running the request pipeline
//!
//! Provides the single entry point every API operation goes through:
//! - Request construction from [`RequestOptions`]
//! - Authentication through the attached authenticator
//! - Optional retries with backoff, bounded by count and total duration
//! - Response decoding and error classification

use super::context::Context;
use super::options::{RequestBody, RequestOptions};
use super::response::{DetailedResponse, DownloadStream};
use super::retry::{extract_retry_after, RetryPolicy};
use crate::auth::Authenticator;
use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::types::ResponseKind;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// HTTP client bound to one service endpoint and authenticator
pub struct HttpClient {
    client: Client,
    config: ServiceConfig,
    authenticator: Arc<dyn Authenticator>,
}

impl HttpClient {
    /// Create a client from explicit configuration
    ///
    /// Fails when the authenticator rejects its credentials or the underlying
    /// transport cannot be built.
    pub fn new(config: ServiceConfig, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        authenticator.validate()?;

        let client = Client::builder()
            .connect_timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.disable_ssl_verification)
            .build()?;

        Ok(Self {
            client,
            config,
            authenticator,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get the attached authenticator
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    /// Get the service URL, if set
    pub fn service_url(&self) -> Option<&str> {
        self.config.service_url.as_deref()
    }

    /// Change the service URL used by subsequent calls
    pub fn set_service_url(&mut self, url: impl Into<String>) {
        self.config.service_url = Some(url.into());
    }

    /// Turn on retries for subsequent calls
    pub fn enable_retries(&mut self, policy: RetryPolicy) {
        self.config.retry = Some(policy);
    }

    /// Turn off retries for subsequent calls
    pub fn disable_retries(&mut self) {
        self.config.retry = None;
    }

    /// Perform a call whose response body is JSON
    ///
    /// An empty 2xx body yields `result: None`.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        ctx: Context,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<T>> {
        let url = options.build_url(self.service_url())?;

        ctx.run(async {
            let response = self.send(&url, options).await?;
            decode_json(response).await
        })
        .await
    }

    /// Perform a call whose response body, if any, is discarded unread
    pub async fn invoke_empty(
        &self,
        ctx: Context,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<()>> {
        let url = options.build_url(self.service_url())?;

        ctx.run(async {
            let response = self.send(&url, options).await?;
            let status = response.status().as_u16();
            let headers = response.headers().clone();
            Ok(DetailedResponse::new(status, headers, None))
        })
        .await
    }

    /// Perform a call whose response body is binary
    ///
    /// The body is not buffered; the caller owns the returned stream.
    pub async fn invoke_download(
        &self,
        ctx: Context,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<DownloadStream>> {
        let url = options.build_url(self.service_url())?;

        ctx.run(async {
            let response = self.send(&url, options).await?;
            let status = response.status();
            let headers = response.headers().clone();
            let stream = (status != StatusCode::NO_CONTENT).then(|| DownloadStream::new(response));
            Ok(DetailedResponse::new(status.as_u16(), headers, stream))
        })
        .await
    }

    /// Send a request, retrying transient failures; returns only 2xx responses
    async fn send(&self, url: &Url, options: &RequestOptions) -> Result<Response> {
        let policy = self.config.retry.as_ref();
        let started = Instant::now();
        let mut attempt: u32 = 0;

        loop {
            let req = self.build_request(url, options).await?;
            debug!("{} {} (attempt {})", options.method, url, attempt + 1);

            let (error, retryable, retry_after) = match req.send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(
                        "Request succeeded: {} {} -> {}",
                        options.method,
                        url,
                        response.status().as_u16()
                    );
                    return Ok(response);
                }
                Ok(response) => {
                    let status = response.status().as_u16();
                    let retryable = policy.is_some_and(|p| p.is_retryable_status(status));
                    let retry_after = extract_retry_after(&response);
                    (status_error(response).await, retryable, retry_after)
                }
                Err(e) => {
                    let retryable = e.is_connect() || e.is_timeout();
                    (self.transport_error(e), retryable, None)
                }
            };

            let Some(policy) = policy else {
                return Err(error);
            };
            if !retryable || attempt >= policy.max_retries {
                return Err(error);
            }

            let delay = retry_after.unwrap_or_else(|| policy.calculate_backoff(attempt));
            if started.elapsed() + delay > policy.max_retry_duration {
                warn!(
                    "Retry budget of {:?} exhausted after {} attempts: {}",
                    policy.max_retry_duration,
                    attempt + 1,
                    error
                );
                return Err(error);
            }

            warn!(
                "Request failed ({}), attempt {}/{}, retrying in {:?}",
                error,
                attempt + 1,
                policy.max_retries + 1,
                delay
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    /// Build one attempt of the request, including authentication
    async fn build_request(&self, url: &Url, options: &RequestOptions) -> Result<RequestBuilder> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(options.response_kind.accept()));

        for (key, value) in self.config.default_headers.iter().chain(&options.headers) {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| Error::invalid_parameter("headers", format!("'{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::invalid_parameter("headers", format!("'{key}': {e}")))?;
            headers.insert(name, value);
        }

        let mut req = self
            .client
            .request(options.method.into(), url.clone())
            .headers(headers);

        // Binary bodies are read by the caller after this returns
        if options.response_kind == ResponseKind::Json {
            req = req.timeout(self.config.timeout);
        }

        match &options.body {
            Some(RequestBody::Json(body)) => req = req.json(body),
            Some(RequestBody::Multipart(fields)) => {
                req = req.multipart(RequestOptions::build_form(fields)?);
            }
            None => {}
        }

        self.authenticator
            .authenticate(req)
            .await
            .map_err(|e| match e {
                Error::Auth { .. } => e,
                other => Error::auth(other.to_string()),
            })
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                timeout_ms: duration_ms(self.config.timeout),
            }
        } else {
            Error::Http(e)
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("auth_type", &self.authenticator.auth_type())
            .finish_non_exhaustive()
    }
}

fn duration_ms(d: Duration) -> u64 {
    d.as_millis() as u64
}

/// Decode a 2xx response carrying JSON
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<DetailedResponse<T>> {
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let body = response.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DetailedResponse::new(status, headers, None));
    }

    if let Some(content_type) = content_type.as_deref() {
        if !is_json_mime(content_type) {
            return Err(Error::ResponseProcessing {
                status,
                message: format!("unexpected content type '{content_type}'"),
                headers,
            });
        }
    }

    match serde_json::from_slice::<T>(&body) {
        Ok(result) => Ok(DetailedResponse::new(status, headers, Some(result))),
        Err(e) => Err(Error::ResponseProcessing {
            status,
            message: e.to_string(),
            headers,
        }),
    }
}

/// Build an [`Error::HttpStatus`] from a non-2xx response
async fn status_error(response: Response) -> Error {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await.unwrap_or_default();

    let details: Option<Value> = serde_json::from_str(&body).ok();
    let message = details
        .as_ref()
        .and_then(extract_error_message)
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    Error::HttpStatus {
        status: status.as_u16(),
        message,
        details,
        headers,
    }
}

/// Pull a human-readable message out of a JSON error payload
pub(crate) fn extract_error_message(body: &Value) -> Option<String> {
    let from_errors = body
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|first| first.get("message"))
        .and_then(Value::as_str);

    from_errors
        .or_else(|| {
            ["error", "message", "errorMessage", "msg"]
                .iter()
                .find_map(|key| body.get(*key).and_then(Value::as_str))
        })
        .map(str::to_owned)
}

/// Check for `application/json` or a `+json` structured syntax suffix
fn is_json_mime(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
