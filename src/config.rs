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

use crate::error::{Error, Result};
use crate::ipx::options::ActionPollOptions;
use envconfig::Envconfig;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

pub const API_KEY_VAR: &str = "SERVER_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://staging.crossmint.com/api/v1";

/// Process configuration, read once at startup.
#[derive(Clone, Envconfig)]
pub struct IpConfig {
    #[envconfig(from = "SERVER_API_KEY")]
    pub server_api_key: String,
    #[envconfig(
        from = "IP_API_BASE_URL",
        default = "https://staging.crossmint.com/api/v1"
    )]
    pub base_url: String,
    #[envconfig(from = "IP_ACTION_POLL_MAX_ATTEMPTS", default = "40")]
    pub poll_max_attempts: u32,
    #[envconfig(from = "IP_ACTION_POLL_INTERVAL_MS", default = "2000")]
    pub poll_interval_ms: u64,
}

impl Debug for IpConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpConfig")
            .field("server_api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("poll_max_attempts", &self.poll_max_attempts)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .finish()
    }
}

impl IpConfig {
    pub fn new(server_api_key: impl Into<String>) -> Self {
        let poll = ActionPollOptions::default();

        Self {
            server_api_key: server_api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_max_attempts: poll.max_attempts,
            poll_interval_ms: poll.interval.as_millis() as u64,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::validate(Self::init_from_env()?)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        Self::validate(Self::init_from_hashmap(vars)?)
    }

    fn validate(config: Self) -> Result<Self> {
        if config.server_api_key.trim().is_empty() {
            return Err(Error::new_config_error(format!("{API_KEY_VAR} is not set")));
        }

        if config.base_url.trim().is_empty() {
            return Err(Error::new_config_error("IP_API_BASE_URL must not be empty"));
        }

        Ok(config)
    }

    pub fn poll_options(&self) -> ActionPollOptions {
        ActionPollOptions::new(
            self.poll_max_attempts,
            Duration::from_millis(self.poll_interval_ms),
        )
    }
}
