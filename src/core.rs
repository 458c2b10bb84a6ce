use crate::api::{api_hero, API_BASE};
use crate::error::{FetchError, PortraitError};
use crate::types::{FetchedHero, Hero, Portrait};
use reqwest::{Client, Url};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Client for the hero catalog.
#[derive(Debug, Clone)]
pub struct HeroClient {
    client: Client,
    base: String,
}

impl Default for HeroClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroClient {
    pub fn new() -> Self {
        Self::with_base(API_BASE)
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fetches hero `id` and then, best-effort, its portrait.
    ///
    /// Only the hero request and its decoding can fail; a portrait that
    /// cannot be fetched or decoded comes back as `None`.
    pub async fn fetch_hero(&self, id: u32) -> Result<FetchedHero, FetchError> {
        let hero_url = api_hero(&self.base, id);
        let url = Url::parse(&hero_url).map_err(|e| FetchError::InvalidRequest {
            url: hero_url.clone(),
            reason: e.to_string(),
        })?;

        debug!(id, url = %url, "fetching hero");
        let body = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(FetchError::Network)?
            .bytes()
            .await
            .map_err(FetchError::Network)?;

        let hero: Hero = serde_json::from_slice(&body).map_err(|e| {
            warn!(id, error = %e, "hero document did not decode");
            FetchError::Decode(e)
        })?;

        let portrait = match self.fetch_portrait(&hero.images.lg).await {
            Ok(portrait) => Some(portrait),
            Err(e) => {
                warn!(id, url = %hero.images.lg, error = %e, "portrait unavailable");
                None
            }
        };

        Ok(FetchedHero { id, hero, portrait })
    }

    pub async fn fetch_portrait(&self, url: &str) -> Result<Portrait, PortraitError> {
        let url = Url::parse(url).map_err(|e| PortraitError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec();

        let format = image::guess_format(&bytes)?;
        let decoded = image::load_from_memory_with_format(&bytes, format)?;
        debug!(?format, width = decoded.width(), height = decoded.height(), "portrait decoded");
        Ok(Portrait {
            width: decoded.width(),
            height: decoded.height(),
            format,
            bytes,
        })
    }
}

/// Writes the portrait of `fetched` into `dir` as `{id}_{name}.{ext}`.
///
/// Returns `Ok(None)` when the hero came without a portrait.
pub async fn save_portrait(dir: &Path, fetched: &FetchedHero) -> std::io::Result<Option<PathBuf>> {
    let Some(portrait) = &fetched.portrait else {
        return Ok(None);
    };
    if !dir.exists() {
        tokio::fs::create_dir_all(dir).await?;
    }
    let name = format!(
        "{}_{}.{}",
        fetched.id,
        file_stem(&fetched.hero.name),
        portrait.extension()
    );
    let path = dir.join(name);
    tokio::fs::write(&path, &portrait.bytes).await?;
    Ok(Some(path))
}

fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
