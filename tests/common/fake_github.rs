//! Local stand-in for `GET /repos/{owner}/{repo}`

use std::net::SocketAddr;

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use ytmcp_demo::GitHubClient;

/// Repository the fake knows about
pub const KNOWN_OWNER: &str = "ShellyDeng08";
pub const KNOWN_REPO: &str = "youtube-connector-mcp";
pub const KNOWN_STARS: u64 = 1500;

pub struct FakeGitHub {
    addr: SocketAddr,
    server: JoinHandle<()>,
}

impl FakeGitHub {
    pub async fn start() -> Self {
        let app = Router::new().route("/repos/{owner}/{repo}", get(repo));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake GitHub");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake GitHub");
        });
        Self { addr, server }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client pointed at the fake, bypassing any proxy from the environment
    pub fn client(&self) -> GitHubClient {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("build reqwest client");
        GitHubClient::with_client(client, self.base_url())
    }
}

impl Drop for FakeGitHub {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn repo(Path((owner, repo)): Path<(String, String)>) -> Result<Json<Value>, StatusCode> {
    if owner == KNOWN_OWNER && repo == KNOWN_REPO {
        Ok(Json(json!({
            "full_name": format!("{owner}/{repo}"),
            "stargazers_count": KNOWN_STARS,
        })))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
