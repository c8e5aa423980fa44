//! Application and API key models

use crate::pagination::{CollectionPage, PageLink};
use serde::{Deserialize, Serialize};

/// An application registered with the service instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub iam_service_id: Option<String>,
    pub create_api_key_uri: Option<String>,
    pub href: Option<String>,
}

/// One page of applications
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDetailsCollection {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub first: Option<PageLink>,
    pub next: Option<PageLink>,
    pub previous: Option<PageLink>,
    #[serde(default)]
    pub applications: Vec<ApplicationDetails>,
}

impl CollectionPage for ApplicationDetailsCollection {
    type Item = ApplicationDetails;

    fn next(&self) -> Option<&PageLink> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<ApplicationDetails> {
        self.applications
    }

    fn offset(&self) -> Option<i64> {
        self.offset
    }

    fn limit(&self) -> Option<i64> {
        self.limit
    }

    fn first(&self) -> Option<&PageLink> {
        self.first.as_ref()
    }

    fn previous(&self) -> Option<&PageLink> {
        self.previous.as_ref()
    }
}

/// A newly created application together with its first API key
///
/// The API key value is only ever returned here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCreated {
    pub id: Option<String>,
    pub name: Option<String>,
    pub iam_service_id: Option<String>,
    pub create_api_key_uri: Option<String>,
    pub href: Option<String>,
    pub api_key_name: Option<String>,
    pub api_key_id: Option<String>,
    pub api_key: Option<String>,
}

/// A newly created application API key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationApiKeyCreated {
    pub api_key_name: Option<String>,
    pub api_key_id: Option<String>,
    pub api_key: Option<String>,
}
