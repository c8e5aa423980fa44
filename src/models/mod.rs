//! Response and request body models
//!
//! Lean serde mirrors of the API's JSON documents. Unknown fields are ignored
//! and every optional field is an `Option`, so `None` always means "absent".

mod application;
mod certificate;
mod instance;
mod queue_manager;
mod user;

pub use application::{
    ApplicationApiKeyCreated, ApplicationCreated, ApplicationDetails,
    ApplicationDetailsCollection,
};
pub use certificate::{
    CertificateConfiguration, ChannelDetails, ChannelsDetails, KeyStoreCertificateDetails,
    KeyStoreCertificateDetailsCollection, TrustStoreCertificateDetails,
    TrustStoreCertificateDetailsCollection, UpdateStrategy,
};
pub use instance::{ConfigurationOptions, Usage};
pub use queue_manager::{
    ConnectionInfo, QueueManagerDetails, QueueManagerDetailsCollection, QueueManagerStatus,
    QueueManagerTaskStatus, QueueManagerVersionUpgrade, QueueManagerVersionUpgrades,
};
pub use user::{UserDetails, UserDetailsCollection};
