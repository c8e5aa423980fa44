// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unused_async)]

//! # IBM MQ on Cloud SDK
//!
//! Async Rust client for the IBM MQ on Cloud management API: queue managers,
//! users, applications and their API keys, and queue manager certificates.
//!
//! ## Features
//!
//! - **Typed operations**: One options struct and one method per API call
//! - **Pluggable auth**: IAM API key, bearer token, basic, or none
//! - **Retries**: Opt-in, bounded by attempt count and total duration
//! - **Deadlines and cancellation**: Per call, through [`http::Context`]
//! - **Pagination**: Offset pagers driven by the server's `next` link
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mqcloud_sdk::auth::IamAuthenticator;
//! use mqcloud_sdk::service::{ListQueueManagersOptions, MqCloudService};
//! use mqcloud_sdk::{Result, ServiceConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let auth = IamAuthenticator::new("my-api-key")?;
//!     let service = MqCloudService::new(ServiceConfig::default(), Arc::new(auth))?;
//!
//!     let mut pager = service.queue_managers_pager(ListQueueManagersOptions::new("guid"))?;
//!     for qm in pager.get_all().await? {
//!         println!("{:?}", qm.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         MqCloudService                          │
//! │  queue managers · users · applications · key/trust store        │
//! └─────────────────────────────────────────────────────────────────┘
//!                 │                                   │
//! ┌───────────────┴───────────────┐   ┌───────────────┴─────────────┐
//! │          HttpClient           │   │            Pager            │
//! ├───────────────────────────────┤   ├─────────────────────────────┤
//! │ URL + path params             │   │ ListOperation               │
//! │ Authenticator                 │   │ next.href → offset          │
//! │ Retry / backoff               │   │ get_next / get_all / stream │
//! │ Context deadline / cancel     │   │                             │
//! │ JSON / binary decode          │   │                             │
//! └───────────────────────────────┘   └─────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// Client configuration
pub mod config;

/// HTTP request pipeline with retry, deadlines and cancellation
pub mod http;

/// Offset pagination over list operations
pub mod pagination;

/// API response and request models
pub mod models;

/// Service operations
pub mod service;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::{ServiceConfig, ServiceConfigBuilder, DEFAULT_SERVICE_URL};
pub use http::{Context, DetailedResponse, RetryPolicy};
pub use pagination::Pager;
pub use service::MqCloudService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
