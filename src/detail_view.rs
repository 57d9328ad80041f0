use log::warn;

use crate::cards::card::Card;
use crate::cards::legalities::Format;

/// Plain-text rendering of the detail screen for a single card.
pub fn render_card_detail(card: &Card) -> String {
    let mut content = String::new();

    content.push_str(&card.name);
    if let Some(mana_cost) = render_mana_cost(card) {
        content.push_str("  ");
        content.push_str(&mana_cost);
    }
    content.push('\n');
    content.push_str(&card.type_line);
    content.push('\n');

    if let Some(oracle_text) = &card.oracle_text {
        content.push('\n');
        content.push_str(&oracle_text.replace('\n', "\n\n"));
        content.push('\n');
    }

    if let Some(prices) = &card.prices {
        let usd = prices.usd_price().map(|p| p.to_string());
        let usd_foil = prices.usd_foil_price().map(|p| p.to_string());
        match (usd, usd_foil) {
            (Some(usd), Some(foil)) => {
                content.push_str(&format!("\nPrice: {} (foil {})\n", usd, foil))
            }
            (Some(usd), None) => content.push_str(&format!("\nPrice: {}\n", usd)),
            (None, Some(foil)) => content.push_str(&format!("\nPrice: foil {}\n", foil)),
            (None, None) => {}
        }
    }
    if card.is_foil() {
        content.push_str("Foil\n");
    }

    content.push_str("\nLegalities:\n");
    match &card.legalities {
        Some(legalities) => {
            content.push_str(&legal_in_summary(&legalities.legal_formats()));
            for (format, legality) in legalities.all() {
                content.push_str(&format!("  {:<10} {}\n", legality.as_str(), format));
            }
        }
        None => content.push_str("  No legality data\n"),
    }

    content
}

fn legal_in_summary(formats: &[Format]) -> String {
    if formats.is_empty() {
        return "  Not legal in any format\n".to_string();
    }
    let names: Vec<String> = formats.iter().map(|format| format.to_string()).collect();
    format!("  Legal in: {}\n", names.join(", "))
}

fn render_mana_cost(card: &Card) -> Option<String> {
    match card.parsed_mana_cost()? {
        Ok(cost) if cost.is_empty() => None,
        Ok(cost) => Some(format!("{} (mana value {})", cost, cost.mana_value())),
        Err(e) => {
            warn!("Showing raw mana cost for '{}': {}", card.name, e);
            card.mana_cost.clone()
        }
    }
}

/// `(format, status)` rows in presentation order, for callers that lay out their own table.
pub fn legality_rows(card: &Card) -> Vec<(String, String)> {
    Format::ALL
        .iter()
        .map(|&format| (format.to_string(), card.legality_of(format).to_string()))
        .collect()
}
