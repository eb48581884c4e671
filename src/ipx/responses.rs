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
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status string the API reports while an action has not yet completed.
pub const ACTION_STATUS_PENDING: &str = "pending";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionOnChain {
    pub chain: Chain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub action_id: String,
    pub metadata: Metadata,
    pub on_chain: CollectionOnChain,
}

/// On-chain details of an IP asset. Everything past `status` and `chain` is only
/// known once the minting action has landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAssetOnChain {
    pub status: String,
    pub chain: Chain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAsset {
    pub id: String,
    pub nft_metadata: Metadata,
    pub ip_asset_metadata: IpAssetMetadata,
    pub on_chain: IpAssetOnChain,
}

/// An IP asset as returned from creation, which also names the action tracking the mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIpAssetResponse {
    pub action_id: String,
    #[serde(flatten)]
    pub asset: IpAsset,
}

impl CreateIpAssetResponse {
    pub fn id(&self) -> &str {
        &self.asset.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Action {
    /// Anything other than the pending sentinel counts as resolved, including failures.
    pub fn is_pending(&self) -> bool {
        self.status == ACTION_STATUS_PENDING
    }
}
