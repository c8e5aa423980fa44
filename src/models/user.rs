//! User models

use crate::pagination::{CollectionPage, PageLink};
use serde::{Deserialize, Serialize};

/// A user of the service instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub iam_service_id: Option<String>,
    pub iam_managed: Option<bool>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub href: Option<String>,
}

/// One page of users
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetailsCollection {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub first: Option<PageLink>,
    pub next: Option<PageLink>,
    pub previous: Option<PageLink>,
    #[serde(default)]
    pub users: Vec<UserDetails>,
}

impl CollectionPage for UserDetailsCollection {
    type Item = UserDetails;

    fn next(&self) -> Option<&PageLink> {
        self.next.as_ref()
    }

    fn into_items(self) -> Vec<UserDetails> {
        self.users
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
