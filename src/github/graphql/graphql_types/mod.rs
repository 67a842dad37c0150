pub mod commit;
pub mod owner;
pub mod pager;
pub mod repository;

use serde::{Deserialize, Serialize};

pub use commit::*;
pub use owner::*;
pub use pager::*;
pub use repository::*;

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLQuery(pub String);

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLPayload<T: serde::Serialize> {
    pub query: GraphQLQuery,
    pub variables: Option<T>,
}

/// GraphQL response envelope returned by the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<serde_json::Value>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}
