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

use http::{Method, StatusCode};
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    inner: Box<ErrorImpl>,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.kind)?;
        if let Some(source) = &self.inner.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

impl Error {
    pub(crate) fn new_server_error(e: ServerError) -> Self {
        Self::new(ErrorKind::Server(e))
    }

    pub(crate) fn new_message_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message(msg.into()))
    }

    pub(crate) fn new_decoding_error(operation: &'static str, msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decoding {
            operation,
            msg: msg.into(),
        })
    }

    fn new(kind: ErrorKind) -> Self {
        Self {
            inner: Box::new(ErrorImpl { kind, source: None }),
        }
    }

    pub(crate) fn with<C: Into<Source>>(mut self, source: C) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    pub fn server_error(&self) -> Option<&ServerError> {
        match &self.inner.kind {
            ErrorKind::Server(e) => Some(e),
            _ => None,
        }
    }
}

type Source = Box<dyn StdError + Send + Sync>;

#[derive(Debug)]
pub struct ErrorImpl {
    pub kind: ErrorKind,
    source: Option<Source>,
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    Server(ServerError),
    #[non_exhaustive]
    Decoding {
        operation: &'static str,
        msg: String,
    },
    Message(String),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Server(e) => write!(f, "{}", e),
            ErrorKind::Decoding { operation, msg } => {
                write!(f, "failed to decode {} response: {}", operation, msg)
            }
            ErrorKind::Message(msg) => write!(f, "{}", msg),
        }
    }
}

/// A non-2xx answer from the API. The body is the parsed JSON error document, or the raw
/// text wrapped as a JSON string when the server did not send JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerError {
    operation: &'static str,
    method: Method,
    path: String,
    status_code: StatusCode,
    body: Value,
}

impl StdError for ServerError {}

impl Display for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to {}: {}", self.operation, self.body)
    }
}

impl ServerError {
    pub(crate) fn new(
        operation: &'static str,
        method: Method,
        path: String,
        status_code: StatusCode,
        body: Value,
    ) -> Self {
        Self {
            operation,
            method,
            path,
            status_code,
            body,
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}
