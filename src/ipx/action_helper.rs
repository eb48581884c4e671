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
use crate::ipx::error;
use crate::ipx::ip::IpApi;
use crate::ipx::options::{ActionPollOptions, GetActionOptions};
use crate::ipx::responses::Action;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct WaitForActionResult {
    pub action: Action,
    /// Re-fetches issued after the initial lookup.
    pub attempts: u32,
    pub still_pending: bool,
}

/// Polls an action at a fixed interval until it leaves the pending state or the attempt
/// ceiling is hit. Hitting the ceiling is reported through `still_pending`, not as an error.
#[derive(Debug, Clone)]
pub struct EnsureActionHelper<'a> {
    action_id: &'a str,
    opts: ActionPollOptions,
}

impl<'a> EnsureActionHelper<'a> {
    pub fn new(action_id: &'a str, opts: ActionPollOptions) -> Self {
        Self { action_id, opts }
    }

    async fn poll_one<C: Client>(&self, api: &IpApi<C>) -> error::Result<Action> {
        api.get_action(&GetActionOptions::new(self.action_id)).await
    }

    pub async fn poll<C: Client>(&self, api: &IpApi<C>) -> error::Result<WaitForActionResult> {
        let mut attempts = 0;
        let mut action = self.poll_one(api).await?;

        while action.is_pending() && attempts < self.opts.max_attempts {
            info!(
                "Action still pending. Attempt {}/{}",
                attempts + 1,
                self.opts.max_attempts
            );
            tokio::time::sleep(self.opts.interval).await;
            action = self.poll_one(api).await?;
            attempts += 1;
        }

        let still_pending = action.is_pending();
        if still_pending {
            warn!(
                "Max attempts reached. Action {} still pending.",
                self.action_id
            );
        }

        Ok(WaitForActionResult {
            action,
            attempts,
            still_pending,
        })
    }
}
