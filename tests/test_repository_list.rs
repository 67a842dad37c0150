//! Integration tests for the repository-list fetch: server-side fork
//! exclusion and cursor pagination.

use mockito::Matcher;

mod test_util;
use github_harvest::types::{AuthorResolution, Owner};
use test_util::{mock_client, repository_list_body};

/// The query asks the API to exclude forks; a fixture answering with the
/// three surviving repositories yields exactly three names.
#[tokio::test]
async fn fork_exclusion_is_requested_from_the_api() {
    let mut server = mockito::Server::new_async().await;

    let page = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex("isFork: false".to_string()))
        .with_status(200)
        .with_body(repository_list_body(&["alpha", "beta", "gamma"], None))
        .expect(1)
        .create_async()
        .await;

    let client = mock_client(&server, AuthorResolution::LinkedLogin);
    let names = client
        .fetch_repository_list(&Owner::from("hypercerts-org"))
        .await;

    let names: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    page.assert_async().await;
}

/// Two pages concatenate in order.
#[tokio::test]
async fn repository_list_paginates() {
    let mut server = mockito::Server::new_async().await;

    let first_page = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex(r#""after_cursor":null"#.to_string()))
        .with_status(200)
        .with_body(repository_list_body(&["alpha", "beta"], Some("CUR1")))
        .expect(1)
        .create_async()
        .await;
    let second_page = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex(r#""after_cursor":"CUR1""#.to_string()))
        .with_status(200)
        .with_body(repository_list_body(&["gamma"], None))
        .expect(1)
        .create_async()
        .await;

    let client = mock_client(&server, AuthorResolution::LinkedLogin);
    let names = client
        .fetch_repository_list(&Owner::from("hypercerts-org"))
        .await;

    let names: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    first_page.assert_async().await;
    second_page.assert_async().await;
}

/// An owner that resolves to null yields an empty listing.
#[tokio::test]
async fn unknown_owner_yields_empty_listing() {
    let mut server = mockito::Server::new_async().await;

    let _page = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_body(r#"{"data":{"repositoryOwner":null}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = mock_client(&server, AuthorResolution::LinkedLogin);
    let names = client
        .fetch_repository_list(&Owner::from("no-such-owner"))
        .await;

    assert!(names.is_empty());
}
