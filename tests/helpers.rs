//! Shared helpers for integration tests

use std::collections::BTreeMap;

use activities_server::{ActivityServer, InMemoryActivityStore};
use serde_json::Value;

/// Spawn a server with a freshly seeded store on an ephemeral port and
/// return its base URL.
pub async fn spawn_server() -> String {
    let server = ActivityServer::new(InMemoryActivityStore::new(), "./static");
    let router = server.build_router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server crashed");
    });

    format!("http://{addr}")
}

/// Fetch the full activity catalog as JSON.
pub async fn fetch_activities(client: &reqwest::Client, base_url: &str) -> BTreeMap<String, Value> {
    client
        .get(format!("{base_url}/activities"))
        .send()
        .await
        .expect("GET /activities failed")
        .json()
        .await
        .expect("GET /activities returned invalid JSON")
}

/// List of participant emails for one activity.
pub async fn fetch_participants(
    client: &reqwest::Client,
    base_url: &str,
    activity: &str,
) -> Vec<String> {
    let activities = fetch_activities(client, base_url).await;
    activities[activity]["participants"]
        .as_array()
        .expect("participants is not an array")
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect()
}

/// Issue a signup request; the activity name is URL-escaped like the
/// frontend does it.
pub async fn signup(
    client: &reqwest::Client,
    base_url: &str,
    activity: &str,
    email: &str,
) -> reqwest::Response {
    client
        .post(format!(
            "{base_url}/activities/{}/signup?email={email}",
            urlencode(activity)
        ))
        .send()
        .await
        .expect("signup request failed")
}

/// Issue an unregister request.
pub async fn unregister(
    client: &reqwest::Client,
    base_url: &str,
    activity: &str,
    email: &str,
) -> reqwest::Response {
    client
        .delete(format!(
            "{base_url}/activities/{}/participants?email={email}",
            urlencode(activity)
        ))
        .send()
        .await
        .expect("unregister request failed")
}

/// Percent-encode path segment characters the tests actually use.
pub fn urlencode(segment: &str) -> String {
    segment.replace(' ', "%20")
}
