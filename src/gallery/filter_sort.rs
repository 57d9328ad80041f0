use std::fmt;
use std::str::FromStr;

use super::GalleryError;
use crate::cards::card::Card;
use crate::catalog::Catalog;
use crate::utilities::string_manipulators::contains_ignore_case;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SortMode {
    #[default]
    None,
    Alphabetical,
    ByRank,
}

impl SortMode {
    /// Selecting the active mode again turns sorting off.
    pub fn toggled(self, selected: SortMode) -> SortMode {
        if self == selected {
            SortMode::None
        } else {
            selected
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(SortMode::None),
            "alpha" | "alphabetical" | "name" => Ok(SortMode::Alphabetical),
            "rank" => Ok(SortMode::ByRank),
            other => Err(format!("Unknown sort mode '{}'", other)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortMode::None => write!(f, "none"),
            SortMode::Alphabetical => write!(f, "alphabetical"),
            SortMode::ByRank => write!(f, "rank"),
        }
    }
}

/// Keeps the cards whose name contains `search_text`, ignoring case. Empty search keeps all.
pub fn filter_cards(cards: &[Card], search_text: &str) -> Vec<Card> {
    if search_text.is_empty() {
        return cards.to_vec();
    }
    cards
        .iter()
        .filter(|card| contains_ignore_case(&card.name, search_text))
        .cloned()
        .collect()
}

pub fn sort_cards(cards: Vec<Card>, sort_mode: SortMode) -> Result<Vec<Card>, GalleryError> {
    let mut cards = cards;
    match sort_mode {
        SortMode::None => {}
        SortMode::Alphabetical => cards.sort_by(|a, b| a.name.cmp(&b.name)),
        SortMode::ByRank => {
            if let Some(unranked) = cards.iter().find(|card| card.rank.is_none()) {
                return Err(GalleryError::MissingRank {
                    id: unranked.id.clone(),
                    name: unranked.name.clone(),
                });
            }
            cards.sort_by_key(|card| card.rank);
        }
    }
    Ok(cards)
}

/// The derived sequence shown in the gallery. Same inputs always give the same output.
pub fn filtered_and_sorted_cards(
    catalog: &Catalog,
    search_text: &str,
    sort_mode: SortMode,
) -> Result<Vec<Card>, GalleryError> {
    sort_cards(filter_cards(catalog.cards(), search_text), sort_mode)
}
