//! Authentication module
//!
//! Supports: No auth, Basic, Bearer token, IAM API key
//!
//! The pipeline never implements an auth scheme itself. It hands each outgoing
//! request to the [`Authenticator`] attached at client construction, which
//! decorates it. The IAM authenticator manages token caching and refresh.

mod authenticator;
mod types;

pub use authenticator::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator,
    NoAuthAuthenticator, DEFAULT_IAM_URL,
};
pub use types::{validate_credential, AuthType, CachedToken};
