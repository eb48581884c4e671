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

use crate::ipx::metadata::{Chain, IpAssetMetadata, Metadata};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCollectionParams {
    pub metadata: Metadata,
    pub chain: Chain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIpAssetParams {
    /// Wallet locator of the owner, e.g. `email:<address>:<chain>`.
    pub owner: String,
    pub nft_metadata: Metadata,
    pub ip_asset_metadata: IpAssetMetadata,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GetActionOptions<'a> {
    pub action_id: &'a str,
}

impl<'a> GetActionOptions<'a> {
    pub fn new(action_id: &'a str) -> Self {
        Self { action_id }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CreateCollectionOptions<'a> {
    pub params: &'a CreateCollectionParams,
}

impl<'a> CreateCollectionOptions<'a> {
    pub fn new(params: &'a CreateCollectionParams) -> Self {
        Self { params }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CreateIpAssetOptions<'a> {
    pub collection_id: &'a str,
    pub params: &'a CreateIpAssetParams,
}

impl<'a> CreateIpAssetOptions<'a> {
    pub fn new(collection_id: &'a str, params: &'a CreateIpAssetParams) -> Self {
        Self {
            collection_id,
            params,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GetIpAssetOptions<'a> {
    pub collection_id: &'a str,
    pub ip_asset_id: &'a str,
}

impl<'a> GetIpAssetOptions<'a> {
    pub fn new(collection_id: &'a str, ip_asset_id: &'a str) -> Self {
        Self {
            collection_id,
            ip_asset_id,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ActionPollOptions {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl ActionPollOptions {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 40;
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }
}

impl Default for ActionPollOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collection_params_match_wire_shape() {
        let params = CreateCollectionParams {
            metadata: Metadata::new("X", "Y"),
            chain: Chain::StoryTestnet,
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"metadata": {"description": "Y", "name": "X"}, "chain": "story-testnet"})
        );
    }

    #[test]
    fn default_poll_options() {
        let opts = ActionPollOptions::default();

        assert_eq!(opts.max_attempts, 40);
        assert_eq!(opts.interval, Duration::from_secs(2));
    }
}
