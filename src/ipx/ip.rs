/*
 *
 *  * Copyright (c) 2025 Couchbase, Inc.
 *  *
 *  * Licensed under the Apache License, Version 2.0 (the "License");
 *  * you may not use this file except in compliance with the License.
 *  * You may obtain a copy of the License at
 *  *
 *  *    http://www.apache.org/licenses/LICENSE-2.0
 *  *
 *  * Unless required by applicable law or agreed to in writing, software
 *  * distributed under the License is distributed on an "AS IS" BASIS,
 *  * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  * See the License for the specific language governing permissions and
 *  * limitations under the License.
 *
 */

use crate::httpx::client::Client;
use crate::httpx::request::{ApiKeyAuth, Auth, Request};
use crate::httpx::response::Response;
use crate::ipx::error;
use bytes::Bytes;
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::trace;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Handle on the IP asset API rooted at a versioned endpoint, e.g.
/// `https://staging.crossmint.com/api/v1`.
pub struct IpApi<C: Client> {
    pub http_client: Arc<C>,
    pub user_agent: String,
    pub endpoint: String,
    pub api_key: String,
}

impl<C: Client> Debug for IpApi<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpApi")
            .field("user_agent", &self.user_agent)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl<C: Client> IpApi<C> {
    pub fn new_request(
        &self,
        method: Method,
        path: impl Into<String>,
        body: Option<Bytes>,
    ) -> Request {
        Request::builder()
            .method(method)
            .uri(format!(
                "{}{}",
                self.endpoint.trim_end_matches('/'),
                path.into()
            ))
            .auth(Auth::ApiKey(ApiKeyAuth {
                key: self.api_key.clone(),
            }))
            .user_agent(self.user_agent.clone())
            .content_type(JSON_CONTENT_TYPE.to_string())
            .body(body)
            .build()
    }

    pub async fn execute(
        &self,
        method: Method,
        path: impl Into<String>,
        body: Option<Bytes>,
    ) -> crate::httpx::error::Result<Response> {
        let req = self.new_request(method, path, body);

        self.http_client.execute(req).await
    }

    /// Sends a request and hands back the decoded body of a 2xx reply. Anything else becomes a
    /// server error tagged with `operation`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        method: Method,
        path: String,
        body: Option<Bytes>,
    ) -> error::Result<T> {
        let resp = self
            .execute(method.clone(), path.clone(), body)
            .await
            .map_err(|e| {
                error::Error::new_message_error(format!("could not {operation}")).with(e)
            })?;

        if !resp.status().is_success() {
            return Err(Self::decode_common_error(operation, method, path, resp).await);
        }

        parse_response_json(operation, resp).await
    }

    pub(crate) fn encode_body<B: Serialize>(
        operation: &'static str,
        body: &B,
    ) -> error::Result<Bytes> {
        serde_json::to_vec(body).map(Bytes::from).map_err(|e| {
            error::Error::new_message_error(format!("could not encode {operation} request")).with(e)
        })
    }

    async fn decode_common_error(
        operation: &'static str,
        method: Method,
        path: String,
        response: Response,
    ) -> error::Error {
        let status = response.status();
        let body = match response.bytes().await {
            Ok(b) => b,
            Err(e) => {
                return error::Error::new_message_error(format!(
                    "failed to {operation}: could not read error response with status {status}"
                ))
                .with(e)
            }
        };

        trace!("{operation} returned status {status}");

        let body = match serde_json::from_slice::<Value>(&body) {
            Ok(v) => v,
            Err(_) => Value::String(String::from_utf8_lossy(&body).into_owned()),
        };

        error::Error::new_server_error(error::ServerError::new(
            operation, method, path, status, body,
        ))
    }
}

pub(crate) fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

pub(crate) async fn parse_response_json<T: DeserializeOwned>(
    operation: &'static str,
    resp: Response,
) -> error::Result<T> {
    resp.json().await.map_err(|e| {
        if e.is_decoding_error() {
            error::Error::new_decoding_error(operation, e.to_string())
        } else {
            error::Error::new_message_error(format!("could not read {operation} response")).with(e)
        }
    })
}
