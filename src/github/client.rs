use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::ApiFailure;
use super::graphql::commit::{CommitHistoryVariable, commit_history_query};
use super::graphql::graphql_types::commit::CommitEdge;
use super::graphql::graphql_types::owner::OwnerTypeResponse;
use super::graphql::graphql_types::repository::RepositoryEdge;
use super::graphql::graphql_types::{
    CommitHistoryResponse, GraphQLPayload, GraphQLQuery, GraphQLResponse, RepositoryListResponse,
};
use super::graphql::owner::{OwnerTypeVariable, owner_type_query};
use super::graphql::repository::{RepositoryListVariable, repository_list_query};
use super::pagination::{Page, PageCursor, PageDelay, collect_paginated};
use super::rest::{ContributorEntry, RepositoryResource};
use crate::types::{
    AuthorResolution, Branch, CommitRecord, Owner, OwnerKind, RepositoryId, RepositoryStats,
    default_ref_name, default_since_date,
};

pub const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";
pub const GITHUB_REST_BASE_URL: &str = "https://api.github.com";

/// Client-wide fetch configuration.
///
/// Endpoints are configurable so tests can point the client at a local mock
/// server; the defaults are the public GitHub URLs.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub graphql_endpoint: String,
    pub rest_base_url: String,
    pub page_delay: PageDelay,
    pub author_resolution: AuthorResolution,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: GITHUB_GRAPHQL_ENDPOINT.to_string(),
            rest_base_url: GITHUB_REST_BASE_URL.to_string(),
            page_delay: PageDelay::default(),
            author_resolution: AuthorResolution::default(),
        }
    }
}

/// GitHub API client for commit-history and repository-metadata collection.
///
/// GraphQL requests carry the bearer token when one was supplied; REST
/// requests are issued anonymously. The token is fixed at construction and
/// immutable for the life of the client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    token: Option<String>,
    config: FetchConfig,
}

impl GitHubClient {
    pub fn new(token: Option<String>, config: FetchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("github-harvest/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            token,
            config,
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches the full commit history of a ref since a cutoff instant,
    /// normalized into flat commit records in API order.
    ///
    /// `ref_name` defaults to `"main"` and `since` to the start of 2022.
    /// On a mid-pagination failure the records of the pages fetched so far
    /// are returned; the failure is logged, not raised.
    pub async fn fetch_commit_history(
        &self,
        repository_id: &RepositoryId,
        ref_name: Option<&Branch>,
        since: Option<DateTime<Utc>>,
    ) -> Vec<CommitRecord> {
        let ref_name = ref_name.cloned().unwrap_or_else(default_ref_name);
        let since = since.unwrap_or_else(default_since_date);

        let edges = collect_paginated("commit_history", &self.config.page_delay, |cursor| {
            self.commit_history_page(repository_id, &ref_name, since, cursor)
        })
        .await;

        let repository_name = repository_id.repo_name();
        edges
            .into_iter()
            .filter_map(|edge| {
                match CommitRecord::from_edge(
                    edge,
                    repository_name,
                    self.config.author_resolution,
                ) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!("Skipping malformed commit edge in {}: {}", repository_id, e);
                        None
                    }
                }
            })
            .collect()
    }

    async fn commit_history_page(
        &self,
        repository_id: &RepositoryId,
        ref_name: &Branch,
        since: DateTime<Utc>,
        cursor: Option<PageCursor>,
    ) -> Result<Page<CommitEdge>, ApiFailure> {
        let variables = CommitHistoryVariable {
            owner: repository_id.owner().clone(),
            repo: repository_id.repo_name().clone(),
            ref_name: ref_name.clone(),
            since_date: since,
            after_cursor: cursor.map(|c| c.0),
        };

        let payload = GraphQLPayload {
            query: GraphQLQuery(commit_history_query()),
            variables: Some(variables),
        };

        let response: GraphQLResponse<CommitHistoryResponse> =
            self.execute_graphql("commit_history", payload).await?;

        let data = response
            .data
            .ok_or_else(|| ApiFailure::Decode("No data in commit history response".to_string()))?;

        Ok(data.into_page())
    }

    /// Fetches the names of every non-fork repository owned by `owner`.
    ///
    /// Fork exclusion happens on the API side via the query filter. Partial
    /// results are returned when pagination fails midway.
    pub async fn fetch_repository_list(&self, owner: &Owner) -> Vec<crate::types::RepositoryName> {
        let edges = collect_paginated("repository_list", &self.config.page_delay, |cursor| {
            self.repository_list_page(owner, cursor)
        })
        .await;

        edges
            .into_iter()
            .map(|edge| crate::types::RepositoryName::new(edge.node.name))
            .collect()
    }

    async fn repository_list_page(
        &self,
        owner: &Owner,
        cursor: Option<PageCursor>,
    ) -> Result<Page<RepositoryEdge>, ApiFailure> {
        let variables = RepositoryListVariable {
            owner: owner.clone(),
            after_cursor: cursor.map(|c| c.0),
        };

        let payload = GraphQLPayload {
            query: GraphQLQuery(repository_list_query()),
            variables: Some(variables),
        };

        let response: GraphQLResponse<RepositoryListResponse> =
            self.execute_graphql("repository_list", payload).await?;

        let data = response
            .data
            .ok_or_else(|| ApiFailure::Decode("No data in repository list response".to_string()))?;

        Ok(data.into_page())
    }

    /// Resolves the GraphQL interface kind of an owner login.
    ///
    /// Returns `None` when the owner does not resolve or the request fails;
    /// callers report that as a profile-URL message rather than an error.
    pub async fn fetch_owner_type(&self, owner: &Owner) -> Option<OwnerKind> {
        let payload = GraphQLPayload {
            query: GraphQLQuery(owner_type_query()),
            variables: Some(OwnerTypeVariable {
                owner: owner.clone(),
            }),
        };

        let response: GraphQLResponse<OwnerTypeResponse> =
            match self.execute_graphql("owner_type", payload).await {
                Ok(response) => response,
                Err(failure) => {
                    warn!("Owner type lookup for {} failed: {}", owner, failure);
                    return None;
                }
            };

        response
            .data
            .and_then(|data| data.repository_owner)
            .map(|node| OwnerKind::from_typename(&node.typename))
    }

    /// Fetches repository statistics over REST: star count and last-push
    /// instant from the repository resource, then the contributor logins from
    /// the contributors URL embedded in it.
    ///
    /// A failing repository request yields the default (empty) record; a
    /// failing contributors request leaves only the contributor list empty.
    pub async fn fetch_repository_stats(&self, repository_id: &RepositoryId) -> RepositoryStats {
        let url = format!(
            "{}/repos/{}/{}",
            self.config.rest_base_url,
            repository_id.owner(),
            repository_id.repo_name()
        );

        let resource: RepositoryResource = match self.rest_get(&url).await {
            Ok(resource) => resource,
            Err(failure) => {
                warn!("Repository stats fetch for {} failed: {}", repository_id, failure);
                return RepositoryStats::default();
            }
        };

        let last_pushed_at = resource
            .pushed_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|instant| instant.with_timezone(&Utc));
        let stars = resource.stargazers_count.unwrap_or(0);

        let mut contributors = Vec::new();
        if let Some(contributors_url) = resource.contributors_url {
            match self.rest_get::<Vec<ContributorEntry>>(&contributors_url).await {
                Ok(entries) => {
                    contributors = entries
                        .into_iter()
                        .map(|entry| crate::types::User::new(entry.login))
                        .collect();
                }
                Err(failure) => {
                    warn!(
                        "Contributors fetch for {} failed: {}",
                        repository_id, failure
                    );
                }
            }
        }

        RepositoryStats {
            contributors,
            last_pushed_at,
            stars,
        }
    }

    /// Issues one GraphQL POST. Success is solely a 200 status; any other
    /// status is reported with its numeric code and raw response text and is
    /// never retried.
    async fn execute_graphql<V: Serialize, R: DeserializeOwned>(
        &self,
        operation_name: &str,
        payload: GraphQLPayload<V>,
    ) -> Result<GraphQLResponse<R>, ApiFailure> {
        debug!("Sending {} GraphQL request", operation_name);

        let mut request = self.http.post(&self.config.graphql_endpoint).json(&payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiFailure::Request(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(ApiFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<GraphQLResponse<R>>()
            .await
            .map_err(|e| ApiFailure::Decode(e.to_string()))
    }

    /// Issues one anonymous REST GET with the same 200-only success rule as
    /// the GraphQL path.
    async fn rest_get<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiFailure> {
        debug!("Sending REST request to {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiFailure::Request(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(ApiFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ApiFailure::Decode(e.to_string()))
    }
}
