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

use crate::config::IpConfig;
use crate::error::Result;
use crate::httpx::client::{Client, ReqwestClient};
use crate::ipx::action_helper::{EnsureActionHelper, WaitForActionResult};
use crate::ipx::ip::IpApi;
use crate::ipx::options::{
    ActionPollOptions, CreateCollectionOptions, CreateCollectionParams, CreateIpAssetOptions,
    CreateIpAssetParams, GetActionOptions, GetIpAssetOptions,
};
use crate::ipx::responses::{Action, Collection, CreateIpAssetResponse, IpAsset};
use std::sync::Arc;
use tracing::debug;

const USER_AGENT: &str = concat!("ipmint/", env!("CARGO_PKG_VERSION"));

/// Entry point for the IP asset API. Built once from [`IpConfig`] and passed to whatever
/// needs to talk to the service.
#[derive(Debug)]
pub struct IpClient<C: Client = ReqwestClient> {
    api: IpApi<C>,
    poll_opts: ActionPollOptions,
}

impl IpClient<ReqwestClient> {
    pub fn new(config: &IpConfig) -> Result<Self> {
        let http_client = ReqwestClient::new()?;

        Ok(Self::with_http_client(config, Arc::new(http_client)))
    }
}

impl<C: Client> IpClient<C> {
    pub fn with_http_client(config: &IpConfig, http_client: Arc<C>) -> Self {
        debug!("Creating IP client for {}", &config.base_url);

        Self {
            api: IpApi {
                http_client,
                user_agent: USER_AGENT.to_string(),
                endpoint: config.base_url.clone(),
                api_key: config.server_api_key.clone(),
            },
            poll_opts: config.poll_options(),
        }
    }

    pub fn poll_options(&self) -> ActionPollOptions {
        self.poll_opts
    }

    pub async fn get_action(&self, action_id: &str) -> Result<Action> {
        Ok(self
            .api
            .get_action(&GetActionOptions::new(action_id))
            .await?)
    }

    pub async fn create_collection(&self, params: &CreateCollectionParams) -> Result<Collection> {
        Ok(self
            .api
            .create_collection(&CreateCollectionOptions::new(params))
            .await?)
    }

    pub async fn create_ip_asset(
        &self,
        collection_id: &str,
        params: &CreateIpAssetParams,
    ) -> Result<CreateIpAssetResponse> {
        Ok(self
            .api
            .create_ip_asset(&CreateIpAssetOptions::new(collection_id, params))
            .await?)
    }

    pub async fn get_ip_asset(&self, collection_id: &str, ip_asset_id: &str) -> Result<IpAsset> {
        Ok(self
            .api
            .get_ip_asset(&GetIpAssetOptions::new(collection_id, ip_asset_id))
            .await?)
    }

    pub async fn wait_for_action(&self, action_id: &str) -> Result<WaitForActionResult> {
        Ok(EnsureActionHelper::new(action_id, self.poll_opts)
            .poll(&self.api)
            .await?)
    }
}
