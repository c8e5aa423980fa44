//! Key store and trust store certificate models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A certificate in a queue manager's trust store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustStoreCertificateDetails {
    pub id: Option<String>,
    pub label: Option<String>,
    pub certificate_type: Option<String>,
    pub fingerprint_sha256: Option<String>,
    pub subject_dn: Option<String>,
    pub subject_cn: Option<String>,
    pub issuer_dn: Option<String>,
    pub issuer_cn: Option<String>,
    pub issued: Option<DateTime<Utc>>,
    pub expiry: Option<DateTime<Utc>>,
    pub trusted: Option<bool>,
    pub href: Option<String>,
}

/// All trust store certificates of a queue manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustStoreCertificateDetailsCollection {
    pub total_count: Option<i64>,
    #[serde(default)]
    pub trust_store: Vec<TrustStoreCertificateDetails>,
}

/// A certificate in a queue manager's key store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStoreCertificateDetails {
    pub id: Option<String>,
    pub label: Option<String>,
    pub certificate_type: Option<String>,
    pub fingerprint_sha256: Option<String>,
    pub subject_dn: Option<String>,
    pub subject_cn: Option<String>,
    pub issuer_dn: Option<String>,
    pub issuer_cn: Option<String>,
    pub issued: Option<DateTime<Utc>>,
    pub expiry: Option<DateTime<Utc>>,
    pub is_default: Option<bool>,
    pub dns_names_total_count: Option<i64>,
    #[serde(default)]
    pub dns_names: Vec<String>,
    pub config: Option<CertificateConfiguration>,
    pub href: Option<String>,
}

/// All key store certificates of a queue manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStoreCertificateDetailsCollection {
    pub total_count: Option<i64>,
    #[serde(default)]
    pub key_store: Vec<KeyStoreCertificateDetails>,
}

/// Where a key store certificate is in use
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateConfiguration {
    pub ams: Option<ChannelsDetails>,
}

/// Channels using a certificate for AMS
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelsDetails {
    #[serde(default)]
    pub channels: Vec<ChannelDetails>,
}

/// A channel reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChannelDetails {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// How a channel list update combines with the existing list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// Add to the existing channels
    Append,
    /// Replace the existing channels
    Replace,
}
