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

//! The end-to-end minting walkthrough: create a collection, mint one IP asset into it, wait
//! for the mint action and read the asset back.

use crate::config::IpConfig;
use crate::error::Result;
use crate::httpx::client::Client;
use crate::ipclient::IpClient;
use crate::ipx::action_helper::WaitForActionResult;
use crate::ipx::metadata::{Chain, Creator, IpAssetMetadata, IpAttribute, IpType, Media, Metadata};
use crate::ipx::options::{CreateCollectionParams, CreateIpAssetParams};
use crate::ipx::responses::{Collection, CreateIpAssetResponse, IpAsset};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

const TITLE: &str = "Tranquil Wildfire";
const OWNER: &str = "email:robin@crossmint.com:story-testnet";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub collection: Collection,
    pub created_asset: CreateIpAssetResponse,
    pub action: WaitForActionResult,
    pub ip_asset: IpAsset,
}

pub fn collection_params() -> CreateCollectionParams {
    CreateCollectionParams {
        metadata: Metadata::new(TITLE, "Junglenauts").symbol("JW"),
        chain: Chain::StoryTestnet,
    }
}

pub fn ip_asset_params(created_at: DateTime<Utc>) -> CreateIpAssetParams {
    CreateIpAssetParams {
        owner: OWNER.to_string(),
        nft_metadata: Metadata::new(
            TITLE,
            "jungle drum n bass, resembling peace and concentration",
        )
        .image("https://cdn2.suno.ai/image_6d6e1819-9ef0-4f1b-90f8-c385bf36a64c.jpeg"),
        ip_asset_metadata: IpAssetMetadata {
            title: TITLE.to_string(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            ip_type: IpType::Music,
            creators: vec![
                creator("Robin", "robin@crossmint.com", 75),
                creator("Jorge", "jorge@crossmint.com", 25),
            ],
            media: vec![Media {
                name: TITLE.to_string(),
                url: "https://cdn1.suno.ai/6d6e1819-9ef0-4f1b-90f8-c385bf36a64c.mp3".to_string(),
                mime_type: "audio/mpeg".to_string(),
            }],
            attributes: vec![
                attribute("Genre", "Jungle Drum and Bass"),
                attribute("Style", "Ambient, Chillout"),
            ],
        },
    }
}

fn creator(name: &str, email: &str, contribution_percent: u32) -> Creator {
    Creator {
        name: name.to_string(),
        email: email.to_string(),
        crossmint_user_locator: format!("email:{email}:{}", Chain::StoryTestnet),
        contribution_percent: contribution_percent.into(),
    }
}

fn attribute(key: &str, value: &str) -> IpAttribute {
    IpAttribute {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {e}>"))
}

pub async fn run<C: Client>(client: &IpClient<C>) -> Result<DemoReport> {
    info!("Starting script...");

    info!("Creating collection...");
    let collection = client.create_collection(&collection_params()).await?;
    info!("Collection created: {}", &collection.id);
    info!("{}", pretty(&collection));

    info!("Creating IP asset...");
    let created_asset = client
        .create_ip_asset(&collection.id, &ip_asset_params(Utc::now()))
        .await?;
    info!("IP asset created: {}", created_asset.id());
    info!("{}", pretty(&created_asset));

    info!("Getting action status...");
    let action = client.wait_for_action(&created_asset.action_id).await?;
    info!("{}", pretty(&action.action));

    info!("Getting IP asset...");
    let ip_asset = client
        .get_ip_asset(&collection.id, created_asset.id())
        .await?;
    info!("{}", pretty(&ip_asset));

    info!("End of script");

    Ok(DemoReport {
        collection,
        created_asset,
        action,
        ip_asset,
    })
}

/// Validates configuration before any client exists, then runs the walkthrough.
pub async fn run_from_vars<C: Client>(
    vars: &HashMap<String, String>,
    http_client: Arc<C>,
) -> Result<DemoReport> {
    let config = IpConfig::from_vars(vars)?;
    let client = IpClient::with_http_client(&config, http_client);

    run(&client).await
}
