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

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::{Display, Formatter};

/// Network a collection or IP asset is minted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    #[serde(rename = "story-testnet")]
    StoryTestnet,
    #[serde(rename = "story")]
    Story,
}

impl Display for Chain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Chain::StoryTestnet => write!(f, "story-testnet"),
            Chain::Story => write!(f, "story"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftAttribute {
    pub trait_type: String,
    pub value: String,
}

/// NFT-facing metadata, shared by collections and IP assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub description: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<NftAttribute>>,
}

impl Metadata {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            name: name.into(),
            symbol: None,
            image: None,
            attributes: None,
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpType {
    Music,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub name: String,
    pub email: String,
    pub crossmint_user_locator: String,
    /// Any JSON number; whole shares stay integers on the wire.
    pub contribution_percent: Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub name: String,
    pub url: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAttribute {
    pub key: String,
    pub value: String,
}

/// Intellectual-property metadata registered alongside the NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAssetMetadata {
    pub title: String,
    /// ISO-8601 timestamp, UTC.
    pub created_at: String,
    pub ip_type: IpType,
    pub creators: Vec<Creator>,
    pub media: Vec<Media>,
    pub attributes: Vec<IpAttribute>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chain_uses_wire_names() {
        assert_eq!(
            serde_json::to_value(Chain::StoryTestnet).unwrap(),
            json!("story-testnet")
        );
        assert_eq!(
            serde_json::from_value::<Chain>(json!("story")).unwrap(),
            Chain::Story
        );
        assert!(serde_json::from_value::<Chain>(json!("ethereum")).is_err());
    }

    #[test]
    fn metadata_omits_unset_optionals() {
        let value = serde_json::to_value(Metadata::new("X", "Y")).unwrap();

        assert_eq!(value, json!({"description": "Y", "name": "X"}));
    }

    #[test]
    fn ip_asset_metadata_is_camel_case() {
        let meta = IpAssetMetadata {
            title: "T".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            ip_type: IpType::Music,
            creators: vec![Creator {
                name: "Robin".to_string(),
                email: "robin@example.com".to_string(),
                crossmint_user_locator: "email:robin@example.com:story-testnet".to_string(),
                contribution_percent: Number::from(100u32),
            }],
            media: vec![Media {
                name: "T".to_string(),
                url: "https://cdn.example.com/t.mp3".to_string(),
                mime_type: "audio/mpeg".to_string(),
            }],
            attributes: vec![],
        };

        let value = serde_json::to_value(&meta).unwrap();

        assert_eq!(value["createdAt"], json!("2024-01-01T00:00:00.000Z"));
        assert_eq!(value["ipType"], json!("music"));
        assert_eq!(
            value["creators"][0]["crossmintUserLocator"],
            json!("email:robin@example.com:story-testnet")
        );
        assert_eq!(value["creators"][0]["contributionPercent"], json!(100));
        assert_eq!(value["media"][0]["mimeType"], json!("audio/mpeg"));
    }

    #[test]
    fn creator_accepts_fractional_share() {
        let creator: Creator = serde_json::from_value(json!({
            "name": "Robin",
            "email": "robin@example.com",
            "crossmintUserLocator": "email:robin@example.com:story-testnet",
            "contributionPercent": 33.5
        }))
        .unwrap();

        assert_eq!(creator.contribution_percent.as_f64(), Some(33.5));
        assert_eq!(
            serde_json::to_value(&creator).unwrap()["contributionPercent"],
            json!(33.5)
        );
    }
}
