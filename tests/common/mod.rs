#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use voltsense_contact::config::Config;
use voltsense_contact::models::SubmissionRecord;
use voltsense_contact::sink::SubmissionSink;

/// Sink that keeps every record it receives.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<SubmissionRecord>>,
}

impl RecordingSink {
    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn record(&self, record: &SubmissionRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub sink: Arc<RecordingSink>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Submit JSON to the contact endpoint, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a raw body with the given content type, return (body, status).
    pub async fn submit_raw(&self, content_type: &str, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .header("content-type", content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("submit raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 65_536,
        static_dir: Some(PathBuf::from("tests/fixtures/static")),
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app on a random port with a recording sink.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let sink = Arc::new(RecordingSink::default());
    let app = voltsense_contact::build_app(config, sink.clone());

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
        sink,
    }
}
