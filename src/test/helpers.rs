use crate::cards::card::Card;
use crate::cards::card_list::CardList;
use crate::catalog::Catalog;

pub fn unranked_card(id: &str, name: &str) -> Card {
    Card {
        object: Some("card".to_string()),
        id: id.to_string(),
        name: name.to_string(),
        image_uris: None,
        mana_cost: None,
        type_line: "Instant".to_string(),
        oracle_text: None,
        colors: None,
        prices: None,
        foil: None,
        rank: None,
        legalities: None,
    }
}

pub fn ranked_card(id: &str, name: &str, rank: u32) -> Card {
    Card {
        rank: Some(rank),
        ..unranked_card(id, name)
    }
}

pub fn catalog_of(cards: Vec<Card>) -> Catalog {
    Catalog::from_card_list(CardList {
        object: "list".to_string(),
        total_cards: cards.len(),
        has_more: false,
        data: cards,
    })
    .unwrap()
}

pub fn bundled_catalog() -> Catalog {
    Catalog::from_json_str(include_str!("wot_scryfall_cards.json")).unwrap()
}

pub fn names(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|card| card.name.as_str()).collect()
}
