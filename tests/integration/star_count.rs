//! Star badge against a local fake of the GitHub API.

use super::common::fake_github::{FakeGitHub, KNOWN_OWNER, KNOWN_REPO, KNOWN_STARS};
use ytmcp_demo::stars::{RepoStats, StarCountError, StarFetch};
use ytmcp_demo::{GitHubClient, RepoRef, StarBadge};

fn known_repo() -> RepoRef {
    RepoRef::new(KNOWN_OWNER, KNOWN_REPO)
}

#[tokio::test]
async fn test_fetches_stargazers_count() {
    let github = FakeGitHub::start().await;
    let stars = github
        .client()
        .stargazers(&known_repo())
        .await
        .expect("fetch stars");

    assert_eq!(stars, KNOWN_STARS);
    assert_eq!(StarBadge::Ready(stars).label().as_deref(), Some("1.5k"));
}

#[tokio::test]
async fn test_trailing_slash_in_api_base_is_ignored() {
    let github = FakeGitHub::start().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let client = GitHubClient::with_client(client, format!("{}/", github.base_url()));

    assert_eq!(
        client.stargazers(&known_repo()).await.unwrap(),
        KNOWN_STARS
    );
}

#[tokio::test]
async fn test_missing_repo_hides_badge() {
    let github = FakeGitHub::start().await;
    let result = github
        .client()
        .stargazers(&RepoRef::new("nobody", "nothing"))
        .await;

    assert!(matches!(result, Err(StarCountError::Status(404))));
    assert_eq!(StarBadge::from_result(result), StarBadge::Hidden);
}

#[tokio::test]
async fn test_unreachable_server_hides_badge() {
    // Bind and release a port so nothing is listening on it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let client = GitHubClient::with_client(client, format!("http://{addr}"));
    let result = client.stargazers(&known_repo()).await;

    assert!(matches!(result, Err(StarCountError::Http(_))));
    assert_eq!(StarBadge::from_result(result), StarBadge::Hidden);
}

#[tokio::test]
async fn test_background_fetch_delivers_badge() {
    let github = FakeGitHub::start().await;
    let (tx, rx) = tokio::sync::oneshot::channel();

    let fetch = StarFetch::spawn(github.client(), known_repo(), move |badge| {
        let _ = tx.send(badge);
    });

    assert_eq!(rx.await.unwrap(), StarBadge::Ready(KNOWN_STARS));
    // The callback runs last, so the task is done or about to be
    tokio::task::yield_now().await;
    drop(fetch);
}
