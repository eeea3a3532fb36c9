use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use applicant_generator::config::Config;

/// A running test server instance on a random local port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON config to the generator, return (body, status).
    pub async fn generate(&self, config: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/generate"))
            .json(config)
            .send()
            .await
            .expect("generate request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST an arbitrary raw body, return (body, status).
    pub async fn generate_raw(
        &self,
        content_type: &str,
        body: impl Into<reqwest::Body>,
    ) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/generate"))
            .header("content-type", content_type)
            .body(body)
            .send()
            .await
            .expect("generate request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        max_body_size: 65_536,
    })
    .await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let app = applicant_generator::build_app(&config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}
