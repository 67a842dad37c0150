use serde::{Deserialize, Serialize};

use crate::types::Owner;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryListVariable {
    pub owner: Owner,
    pub after_cursor: Option<String>,
}

/// Repository-list query, one page of up to 100 repositories.
///
/// Forks are excluded by the `isFork: false` filter on the API side.
/// `repositoryOwner` resolves both user and organization logins.
pub fn repository_list_query() -> String {
    r#"
        query($owner: String!, $after_cursor: String) {
            repositoryOwner(login: $owner) {
                repositories(first: 100, after: $after_cursor, isFork: false) {
                    pageInfo {
                        hasNextPage
                        endCursor
                    }
                    edges {
                        node {
                            name
                        }
                    }
                }
            }
        }
    "#
    .to_string()
}
