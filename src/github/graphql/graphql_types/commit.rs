use serde::{Deserialize, Serialize};

use super::pager::PageInfo;
use crate::github::pagination::Page;

/// Envelope of the commit-history query.
///
/// Any of the nested levels can resolve to null on the API side: an unknown
/// repository, a ref that does not exist on it, or a ref whose target is not
/// a commit. All of those flatten to an empty, final page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitHistoryResponse {
    pub repository: Option<CommitRepositoryNode>,
}

impl CommitHistoryResponse {
    pub fn into_page(self) -> Page<CommitEdge> {
        match self
            .repository
            .and_then(|repository| repository.git_ref)
            .and_then(|git_ref| git_ref.target)
        {
            Some(target) => Page {
                edges: target.history.edges,
                page_info: target.history.page_info,
            },
            None => Page::empty(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRepositoryNode {
    #[serde(rename = "ref")]
    pub git_ref: Option<RefNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefNode {
    pub target: Option<CommitTargetNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitTargetNode {
    pub history: CommitHistoryConnection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitHistoryConnection {
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    pub edges: Vec<CommitEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitEdge {
    pub node: CommitNode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitNode {
    pub author: Option<CommitAuthor>,
    #[serde(rename = "committedDate")]
    pub committed_date: String,
}

/// Git-level author metadata of a commit, with the optionally linked
/// platform account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub user: Option<AuthorUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorUser {
    pub login: String,
}
