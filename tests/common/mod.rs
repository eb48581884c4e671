#![allow(dead_code)]

use async_trait::async_trait;
use http::{Method, StatusCode};
use ipmint::config::IpConfig;
use ipmint::httpx::client::Client;
use ipmint::httpx::error::Result as HttpxResult;
use ipmint::httpx::request::{Auth, Request};
use ipmint::httpx::response::Response;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

pub const TEST_ENDPOINT: &str = "https://ip.test/api/v1";
pub const TEST_API_KEY: &str = "sk_test_key";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

/// Replays canned responses in order and records every request it sees.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<(StatusCode, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockClient {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn respond(self, status: StatusCode, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.into()));
        self
    }

    pub fn respond_json(self, status: StatusCode, body: Value) -> Self {
        self.respond(status, body.to_string())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Client for MockClient {
    async fn execute(&self, req: Request) -> HttpxResult<Response> {
        let api_key = match &req.auth {
            Some(Auth::ApiKey(auth)) => Some(auth.key.clone()),
            _ => None,
        };

        self.requests.lock().unwrap().push(RecordedRequest {
            method: req.method.clone(),
            uri: req.uri.clone(),
            api_key,
            content_type: req.content_type.clone(),
            body: req
                .body
                .as_ref()
                .map(|b| serde_json::from_slice(b).expect("request body is not json")),
        });

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no response queued for {} {}", req.method, req.uri));

        let resp = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        Ok(Response::from(reqwest::Response::from(resp)))
    }
}

pub fn test_config() -> IpConfig {
    let mut config = IpConfig::new(TEST_API_KEY);
    config.base_url = TEST_ENDPOINT.to_string();
    config
}

pub fn url(path: &str) -> String {
    format!("{TEST_ENDPOINT}{path}")
}

pub fn collection_json(id: &str, action_id: &str) -> Value {
    json!({
        "id": id,
        "actionId": action_id,
        "metadata": {"name": "X", "description": "Y"},
        "onChain": {"chain": "story-testnet"}
    })
}

pub fn ip_asset_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "nftMetadata": {
            "name": "Tranquil Wildfire",
            "description": "jungle drum n bass, resembling peace and concentration",
            "image": "https://cdn.test/cover.jpeg"
        },
        "ipAssetMetadata": {
            "title": "Tranquil Wildfire",
            "createdAt": "2024-05-01T12:30:00.000Z",
            "ipType": "music",
            "creators": [{
                "name": "Robin",
                "email": "robin@crossmint.com",
                "crossmintUserLocator": "email:robin@crossmint.com:story-testnet",
                "contributionPercent": 100
            }],
            "media": [{
                "name": "Tranquil Wildfire",
                "url": "https://cdn.test/track.mp3",
                "mimeType": "audio/mpeg"
            }],
            "attributes": [{"key": "Genre", "value": "Jungle Drum and Bass"}]
        },
        "onChain": {"status": status, "chain": "story-testnet"}
    })
}

pub fn created_ip_asset_json(id: &str, action_id: &str) -> Value {
    let mut body = ip_asset_json(id, "pending");
    body["actionId"] = json!(action_id);
    body
}

pub fn minted_ip_asset_json(id: &str) -> Value {
    let mut body = ip_asset_json(id, "success");
    body["onChain"] = json!({
        "status": "success",
        "chain": "story-testnet",
        "contractAddress": "0xabc",
        "ipAssetId": "0xdef",
        "tokenId": "1",
        "txId": "0x123",
        "explorerLink": "https://explorer.test/tx/0x123"
    });
    body
}

pub fn action_json(id: &str, status: &str) -> Value {
    json!({"id": id, "status": status})
}
