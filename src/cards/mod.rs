pub mod card;
pub mod card_list;
pub mod legalities;
pub mod mana_cost;
pub mod price;
