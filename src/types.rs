use image::ImageFormat;
use serde::{Deserialize, Serialize};

/// One catalog entry as served by `/api/id/{id}.json`.
///
/// Unknown fields in the document are ignored; every field here except
/// `appearance.race` must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub biography: Biography,
    pub powerstats: PowerStats,
    pub appearance: Appearance,
    pub images: HeroImages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biography {
    pub full_name: String,
    pub place_of_birth: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerStats {
    pub intelligence: i64,
    pub strength: i64,
    pub speed: i64,
    pub durability: i64,
    pub power: i64,
    pub combat: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub gender: String,
    pub race: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroImages {
    pub lg: String,
}

/// Portrait bytes that decoded as an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portrait {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl Portrait {
    /// File extension matching the detected format.
    pub fn extension(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("img")
    }
}

/// Result of one successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedHero {
    pub id: u32,
    pub hero: Hero,
    pub portrait: Option<Portrait>,
}
