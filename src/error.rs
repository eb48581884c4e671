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

use crate::httpx::error::Error as HttpError;
use crate::ipx::error::Error as IpError;
use crate::ipx::error::ServerError;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone)]
#[error("{kind}")]
#[non_exhaustive]
pub struct Error {
    pub kind: Arc<ErrorKind>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind: Arc::new(kind),
        }
    }

    pub(crate) fn new_config_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config { msg: msg.into() })
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self.kind.as_ref(), ErrorKind::Config { .. })
    }

    /// The error returned by the API, when the failure was a non-2xx response.
    pub fn api_error(&self) -> Option<&ServerError> {
        match self.kind.as_ref() {
            ErrorKind::Api(e) => e.server_error(),
            _ => None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("configuration error: {msg}")]
    #[non_exhaustive]
    Config { msg: String },
    #[error("{0}")]
    Api(#[source] IpError),
    #[error("{0}")]
    Http(#[source] HttpError),
}

impl From<IpError> for ErrorKind {
    fn from(value: IpError) -> Self {
        ErrorKind::Api(value)
    }
}

impl From<HttpError> for ErrorKind {
    fn from(value: HttpError) -> Self {
        ErrorKind::Http(value)
    }
}

impl From<envconfig::Error> for ErrorKind {
    fn from(value: envconfig::Error) -> Self {
        ErrorKind::Config {
            msg: value.to_string(),
        }
    }
}

impl<E> From<E> for Error
where
    ErrorKind: From<E>,
{
    fn from(err: E) -> Self {
        Self {
            kind: Arc::new(err.into()),
        }
    }
}
