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
use crate::ipx::ip::{encode_path_segment, IpApi};
use crate::ipx::options::{CreateIpAssetOptions, GetIpAssetOptions};
use crate::ipx::responses::{CreateIpAssetResponse, IpAsset};
use http::Method;

impl<C: Client> IpApi<C> {
    pub async fn create_ip_asset(
        &self,
        opts: &CreateIpAssetOptions<'_>,
    ) -> error::Result<CreateIpAssetResponse> {
        let body = Self::encode_body("create IP asset", opts.params)?;

        self.send_json(
            "create IP asset",
            Method::POST,
            format!(
                "/ip/collections/{}/ipassets",
                encode_path_segment(opts.collection_id)
            ),
            Some(body),
        )
        .await
    }

    pub async fn get_ip_asset(&self, opts: &GetIpAssetOptions<'_>) -> error::Result<IpAsset> {
        self.send_json(
            "get IP asset",
            Method::GET,
            format!(
                "/ip/collections/{}/ipassets/{}",
                encode_path_segment(opts.collection_id),
                encode_path_segment(opts.ip_asset_id)
            ),
            None,
        )
        .await
    }
}
