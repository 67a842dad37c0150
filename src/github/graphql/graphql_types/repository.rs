use serde::{Deserialize, Serialize};

use super::pager::PageInfo;
use crate::github::pagination::Page;

/// Envelope of the repository-list query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryListResponse {
    #[serde(rename = "repositoryOwner")]
    pub repository_owner: Option<RepositoryOwnerNode>,
}

impl RepositoryListResponse {
    pub fn into_page(self) -> Page<RepositoryEdge> {
        match self.repository_owner {
            Some(owner) => Page {
                edges: owner.repositories.edges,
                page_info: owner.repositories.page_info,
            },
            None => Page::empty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryOwnerNode {
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConnection {
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    pub edges: Vec<RepositoryEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryEdge {
    pub node: RepositoryNameNode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryNameNode {
    pub name: String,
}
