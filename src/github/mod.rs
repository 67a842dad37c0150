pub mod client;
pub mod error;
pub mod graphql;
pub mod pagination;
pub mod rest;

pub use client::{FetchConfig, GitHubClient};
pub use graphql::graphql_types;
