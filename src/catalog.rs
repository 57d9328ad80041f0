use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{error, info, warn};
use thiserror::Error;

use crate::cards::card::Card;
use crate::cards::card_list::CardList;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read card file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse card list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("card id '{id}' appears more than once (second time for '{name}')")]
    DuplicateId { id: String, name: String },
}

/// The cards of the bundled export, in document order. Never mutated after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    cards: Vec<Card>,
    total_cards: usize,
    has_more: bool,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decodes a whole card list. Any bad card fails the entire document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let card_list: CardList = serde_json::from_str(json)?;
        Self::from_card_list(card_list)
    }

    pub fn from_card_list(card_list: CardList) -> Result<Self, CatalogError> {
        if let Some(duplicate) = find_duplicate_id(&card_list.data) {
            return Err(CatalogError::DuplicateId {
                id: duplicate.id.clone(),
                name: duplicate.name.clone(),
            });
        }

        if card_list.total_cards != card_list.data.len() {
            warn!(
                "Card list claims {} cards but contains {}",
                card_list.total_cards,
                card_list.data.len()
            );
        }

        Ok(Catalog {
            cards: card_list.data,
            total_cards: card_list.total_cards,
            has_more: card_list.has_more,
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load failures are logged and leave the catalog empty.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(catalog) => {
                info!("Loaded {} cards from {}", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                error!("Failed to load cards from {}: {}", path.display(), e);
                Catalog::empty()
            }
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }
}

fn find_duplicate_id(cards: &[Card]) -> Option<&Card> {
    let mut seen_ids = HashSet::new();
    for card in cards {
        if !seen_ids.insert(card.id.as_str()) {
            return Some(card);
        }
    }
    None
}
