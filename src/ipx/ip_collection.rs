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
use crate::ipx::options::CreateCollectionOptions;
use crate::ipx::responses::Collection;
use http::Method;

impl<C: Client> IpApi<C> {
    pub async fn create_collection(
        &self,
        opts: &CreateCollectionOptions<'_>,
    ) -> error::Result<Collection> {
        let body = Self::encode_body("create collection", opts.params)?;

        self.send_json(
            "create collection",
            Method::POST,
            "/ip/collections".to_string(),
            Some(body),
        )
        .await
    }
}
