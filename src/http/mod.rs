//! HTTP request/response pipeline
//!
//! One API call flows through a fixed sequence:
//!
//! - **Build**: path template substitution, query and header assembly ([`RequestOptions`])
//! - **Authenticate**: the client's [`Authenticator`](crate::auth::Authenticator) signs the request
//! - **Send**: optional retries with backoff ([`RetryPolicy`]), bounded by a caller [`Context`]
//! - **Decode**: JSON into a typed result, or a raw [`DownloadStream`] for binary bodies
//! - **Classify**: failures become typed [`Error`](crate::error::Error) values

mod client;
mod context;
mod options;
mod response;
mod retry;

pub use client::HttpClient;
pub use context::{CancelHandle, Context};
pub use options::{MultipartField, RequestBody, RequestOptions};
pub use response::{DetailedResponse, DownloadStream};
pub use retry::{RetryPolicy, DEFAULT_RETRYABLE_STATUSES};
