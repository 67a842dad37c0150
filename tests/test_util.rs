//! Shared helpers for the mock-server integration tests
//!
//! Tests run against a local mockito server instead of the live API, so the
//! client is pointed at the server's URL for both GraphQL and REST.

#![allow(dead_code)]

use serde_json::{Value, json};

use github_harvest::github::pagination::PageDelay;
use github_harvest::github::{FetchConfig, GitHubClient};
use github_harvest::types::AuthorResolution;

pub const TEST_TOKEN: &str = "test-token";

/// Creates a client whose GraphQL and REST endpoints both point at the
/// given mock server.
pub fn mock_client(server: &mockito::Server, author_resolution: AuthorResolution) -> GitHubClient {
    let config = FetchConfig {
        graphql_endpoint: format!("{}/graphql", server.url()),
        rest_base_url: server.url(),
        page_delay: PageDelay::None,
        author_resolution,
    };

    GitHubClient::new(Some(TEST_TOKEN.to_string()), config)
        .expect("Failed to create GitHub client for testing")
}

/// One commit edge as the GraphQL API shapes it. `login` is the linked
/// account; `name` is the free-text author name from the commit metadata.
pub fn commit_edge(login: Option<&str>, name: Option<&str>, committed_date: &str) -> Value {
    let author = if login.is_none() && name.is_none() {
        Value::Null
    } else {
        json!({
            "name": name,
            "user": login.map(|login| json!({"login": login})),
        })
    };

    json!({
        "node": {
            "author": author,
            "committedDate": committed_date,
        }
    })
}

/// A full commit-history response body holding one page.
pub fn commit_history_body(edges: Vec<Value>, end_cursor: Option<&str>) -> String {
    json!({
        "data": {
            "repository": {
                "ref": {
                    "target": {
                        "history": {
                            "pageInfo": {
                                "hasNextPage": end_cursor.is_some(),
                                "endCursor": end_cursor,
                            },
                            "edges": edges,
                        }
                    }
                }
            }
        }
    })
    .to_string()
}

/// A page of `count` linked-author commit edges.
pub fn commit_edges(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let login = format!("user-{}", i);
            let name = format!("User {}", i);
            commit_edge(Some(login.as_str()), Some(name.as_str()), "2023-05-01T12:00:00Z")
        })
        .collect()
}

/// A full repository-list response body holding one page.
pub fn repository_list_body(names: &[&str], end_cursor: Option<&str>) -> String {
    let edges: Vec<Value> = names
        .iter()
        .map(|name| json!({"node": {"name": name}}))
        .collect();

    json!({
        "data": {
            "repositoryOwner": {
                "repositories": {
                    "pageInfo": {
                        "hasNextPage": end_cursor.is_some(),
                        "endCursor": end_cursor,
                    },
                    "edges": edges,
                }
            }
        }
    })
    .to_string()
}
