use serde::{Deserialize, Serialize};

use super::card::Card;

/// Envelope of a Scryfall list export.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CardList {
    pub object: String,
    pub total_cards: usize,
    pub has_more: bool,
    pub data: Vec<Card>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoding_bundled_fixture() {
        let list: CardList =
            serde_json::from_str(include_str!("../test/wot_scryfall_cards.json")).unwrap();
        assert_eq!(list.object, "list");
        assert!(!list.has_more);
        assert_eq!(list.total_cards, list.data.len());
    }

    #[test]
    fn test_missing_data_field_is_rejected() {
        let result = serde_json::from_str::<CardList>(
            r#"{ "object": "list", "total_cards": 0, "has_more": false }"#,
        );
        assert!(result.is_err());
    }
}
