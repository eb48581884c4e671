use ipmint::config::IpConfig;
use ipmint::ipclient::IpClient;
use ipmint::ipx::metadata::{Chain, Metadata};
use ipmint::ipx::options::CreateCollectionParams;
use serde_json::json;
use std::error::Error as StdError;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::common::{action_json, collection_json, TEST_API_KEY};

mod common;

fn local_config(addr: SocketAddr) -> IpConfig {
    let mut config = IpConfig::new(TEST_API_KEY);
    config.base_url = format!("http://{addr}/api/v1");
    config
}

/// Accepts a single connection, answers it with `body` and hands back the raw request text.
fn serve_once(listener: TcpListener, body: String) -> JoinHandle<String> {
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before the request was complete");
            raw.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&raw).to_string();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .map(|(_, value)| value.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);
                if raw.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }

        let reply = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(reply.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        String::from_utf8(raw).unwrap()
    })
}

fn header_lines(raw: &str) -> Vec<String> {
    raw.split("\r\n\r\n")
        .next()
        .unwrap()
        .lines()
        .skip(1)
        .map(|line| line.to_ascii_lowercase())
        .collect()
}

#[tokio::test]
async fn get_sends_api_key_and_json_content_type() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = serve_once(listener, action_json("a1", "succeeded").to_string());

    let client = IpClient::new(&local_config(addr)).unwrap();
    let action = client.get_action("a1").await.unwrap();
    assert_eq!(action.status, "succeeded");

    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /api/v1/ip/actions/a1 HTTP/1.1\r\n"));

    let headers = header_lines(&raw);
    assert!(headers.contains(&format!("x-api-key: {TEST_API_KEY}")));
    assert!(headers.contains(&"content-type: application/json".to_string()));
    assert!(headers.iter().any(|h| h.starts_with("user-agent: ipmint/")));
}

#[tokio::test]
async fn post_sends_headers_and_json_body() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = serve_once(listener, collection_json("c1", "a1").to_string());

    let client = IpClient::new(&local_config(addr)).unwrap();
    let collection = client
        .create_collection(&CreateCollectionParams {
            metadata: Metadata::new("X", "Y"),
            chain: Chain::StoryTestnet,
        })
        .await
        .unwrap();
    assert_eq!(collection.id, "c1");

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /api/v1/ip/collections HTTP/1.1\r\n"));

    let headers = header_lines(&raw);
    assert!(headers.contains(&format!("x-api-key: {TEST_API_KEY}")));
    assert!(headers.contains(&"content-type: application/json".to_string()));

    let body: serde_json::Value =
        serde_json::from_str(raw.split("\r\n\r\n").nth(1).unwrap()).unwrap();
    assert_eq!(
        body,
        json!({"metadata": {"name": "X", "description": "Y"}, "chain": "story-testnet"})
    );
}

#[tokio::test]
async fn refused_connection_keeps_its_cause() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = IpClient::new(&local_config(addr)).unwrap();
    let err = client.get_action("a1").await.unwrap_err();

    let msg = err.to_string();
    assert!(
        msg.starts_with("could not get action: connection error"),
        "unexpected message: {msg}"
    );
    assert!(err.api_error().is_none());

    let api = err.kind.source().expect("api error should be the source");
    assert!(api.source().is_some());
}
