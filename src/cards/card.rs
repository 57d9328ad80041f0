use serde::{Deserialize, Serialize};
use url::Url;

use super::legalities::{Format, Legalities, Legality};
use super::mana_cost::{ManaCost, ManaCostError};
use super::price::Price;
use crate::utilities::constants::CARD_BACK_IMAGE_URL;

/// One entry of the bundled Scryfall export.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub object: Option<String>,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    pub type_line: String,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub prices: Option<Prices>,
    #[serde(default)]
    pub foil: Option<bool>,
    // Lower is more popular. Older exports don't carry it.
    #[serde(default, rename = "edhrec_rank")]
    pub rank: Option<u32>,
    #[serde(default)]
    pub legalities: Option<Legalities>,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ImageUris {
    #[serde(default)]
    pub small: Option<Url>,
    #[serde(default)]
    pub normal: Option<Url>,
    #[serde(default)]
    pub large: Option<Url>,
    #[serde(default)]
    pub png: Option<Url>,
    #[serde(default)]
    pub art_crop: Option<Url>,
    #[serde(default)]
    pub border_crop: Option<Url>,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Prices {
    #[serde(default)]
    pub usd: Option<String>,
    #[serde(default)]
    pub usd_foil: Option<String>,
}

impl Prices {
    pub fn usd_price(&self) -> Option<Price> {
        Self::parse_price(self.usd.as_deref())
    }

    pub fn usd_foil_price(&self) -> Option<Price> {
        Self::parse_price(self.usd_foil.as_deref())
    }

    fn parse_price(raw: Option<&str>) -> Option<Price> {
        let raw = raw?;
        match raw.parse::<Price>() {
            Ok(price) => Some(price),
            Err(e) => {
                log::warn!("Ignoring unparsable price '{}': {}", raw, e);
                None
            }
        }
    }
}

impl Card {
    pub fn is_foil(&self) -> bool {
        self.foil.unwrap_or(false)
    }

    /// Cards without a legality record count as not legal anywhere.
    pub fn legality_of(&self, format: Format) -> Legality {
        self.legalities
            .as_ref()
            .map_or(Legality::NotLegal, |legalities| legalities.get(format))
    }

    pub fn parsed_mana_cost(&self) -> Option<Result<ManaCost, ManaCostError>> {
        self.mana_cost.as_deref().map(str::parse::<ManaCost>)
    }

    /// The image shown in the gallery grid, falling back to a card back.
    pub fn gallery_image_url(&self) -> &str {
        self.image_uris
            .as_ref()
            .and_then(|uris| uris.normal.as_ref())
            .map_or(CARD_BACK_IMAGE_URL, Url::as_str)
    }

    pub fn art_crop_url(&self) -> Option<&Url> {
        self.image_uris.as_ref()?.art_crop.as_ref()
    }
}
