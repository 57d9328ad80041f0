use std::error::Error;

use log::info;

use crate::cards::card::Card;
use crate::detail_view::legality_rows;
use crate::utilities::file_management::write_to_file;
use crate::utilities::string_manipulators::{date_time_as_string, escape_html};

pub fn generate_html_header(title: &str, card_count: usize) -> String {
    format!(
        r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>{title}</title>
        <style>
            {}
        </style>
    </head>
    <body>
        <h1>{title}, Total cards: {card_count}</h1>
        <div class="card-grid">
    "#,
        include_str!("../../static/gallery_page/style.css"),
    )
}

pub fn generate_html_footer() -> String {
    r#"
    </body>
    </html>
    "#
    .to_string()
}

pub fn generate_card_tile(card: &Card) -> String {
    let id = escape_html(&card.id);
    let name = escape_html(&card.name);
    let image_url = escape_html(card.gallery_image_url());
    let foil_badge = if card.is_foil() {
        r#"<span class="foil-badge">F</span>"#
    } else {
        ""
    };

    format!(
        r##"
            <a class="card-tile" href="#card-{id}">
                <div class="card-image-container">
                    <img class="card-image" src="{image_url}" alt="{name}" loading="lazy">
                    {foil_badge}
                </div>
                <span class="card-name">{name}</span>
            </a>
        "##
    )
}

/// Detail section for `cards[index]`, linking to its neighbours. No wrap-around.
pub fn generate_card_detail(cards: &[Card], index: usize) -> String {
    let Some(card) = cards.get(index) else {
        return String::new();
    };
    let id = escape_html(&card.id);
    let name = escape_html(&card.name);
    let type_line = escape_html(&card.type_line);
    let art = card
        .art_crop_url()
        .map(|url| {
            format!(
                r#"<img class="art-crop" src="{}" alt="{}">"#,
                escape_html(url.as_str()),
                name
            )
        })
        .unwrap_or_default();
    let oracle_text = card
        .oracle_text
        .as_deref()
        .map(|text| format!("<p>{}</p>", escape_html(text).replace('\n', "</p><p>")))
        .unwrap_or_default();

    let previous = index
        .checked_sub(1)
        .and_then(|i| cards.get(i))
        .map(|c| navigation_link("nav-previous", c, "&lt;"))
        .unwrap_or_default();
    let next = cards
        .get(index + 1)
        .map(|c| navigation_link("nav-next", c, "&gt;"))
        .unwrap_or_default();

    let mut legalities = String::new();
    for (format, status) in legality_rows(card) {
        let class = if status == "legal" { "legal" } else { "not-legal" };
        legalities.push_str(&format!(
            r#"<div class="legality"><span class="{class}">{status}</span> {format}</div>"#
        ));
    }

    format!(
        r##"
        <section class="card-detail" id="card-{id}">
            {art}
            <div class="card-text">
                <h2>{name}</h2>
                <h3>{type_line}</h3>
                {oracle_text}
            </div>
            <div class="legalities">{legalities}</div>
            <nav>{previous} <a class="nav-close" href="#">Close</a> {next}</nav>
        </section>
        "##
    )
}

fn navigation_link(class: &str, target: &Card, label: &str) -> String {
    format!(
        r##"<a class="{class}" href="#card-{}">{label}</a>"##,
        escape_html(&target.id)
    )
}

pub fn generate_page_content(cards: &[Card], current_date: &str) -> String {
    let title = format!("MTG card gallery {}", current_date);
    let mut content = generate_html_header(&title, cards.len());

    for card in cards {
        content.push_str(&generate_card_tile(card));
    }
    content.push_str("</div>");

    for index in 0..cards.len() {
        content.push_str(&generate_card_detail(cards, index));
    }

    content.push_str(&generate_html_footer());
    content
}

pub fn generate_gallery_page(
    cards: &[Card],
    output_dir: &str,
    html_page_name: &str,
) -> Result<String, Box<dyn Error>> {
    let content = generate_page_content(cards, &date_time_as_string(None, None));
    let path = format!("{}/{}", output_dir, html_page_name);
    write_to_file(&path, &content)?;
    info!("Wrote gallery with {} cards to {}", cards.len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::helpers::{bundled_catalog, unranked_card};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    struct TestContext {
        temp_dir: tempfile::TempDir,
    }

    impl TestContext {
        fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            TestContext {
                temp_dir: tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_generate_gallery_page_creates_file() {
        let ctx = TestContext::new();
        let catalog = bundled_catalog();
        let output_dir = ctx.temp_dir.path().to_str().unwrap();

        let path = generate_gallery_page(catalog.cards(), output_dir, "index.html").unwrap();

        let index_file_path = Path::new(output_dir).join("index.html");
        assert_eq!(Path::new(&path), index_file_path);
        let html = fs::read_to_string(&index_file_path).unwrap();
        assert!(html.contains("Total cards: 6"));
        assert_eq!(html.matches(r#"class="card-tile""#).count(), 6);
        assert_eq!(html.matches(r#"class="card-detail""#).count(), 6);
    }

    #[test]
    fn test_tile_shows_foil_badge_and_placeholder() {
        let mut card = unranked_card("abc", "Plain & Simple");
        let tile = generate_card_tile(&card);
        assert!(tile.contains("Magic_the_gathering-card_back.jpg"));
        assert!(tile.contains("Plain &amp; Simple"));
        assert!(!tile.contains("foil-badge"));

        card.foil = Some(true);
        assert!(generate_card_tile(&card).contains(r#"<span class="foil-badge">F</span>"#));
    }

    #[test]
    fn test_detail_navigation_links_are_clamped() {
        let cards = vec![
            unranked_card("a", "First"),
            unranked_card("b", "Second"),
            unranked_card("c", "Third"),
        ];

        let first = generate_card_detail(&cards, 0);
        assert!(!first.contains("nav-previous"));
        assert!(first.contains(r##"href="#card-b""##));

        let middle = generate_card_detail(&cards, 1);
        assert!(middle.contains(r##"class="nav-previous" href="#card-a""##));
        assert!(middle.contains(r##"class="nav-next" href="#card-c""##));

        let last = generate_card_detail(&cards, 2);
        assert!(!last.contains("nav-next"));

        assert!(generate_card_detail(&cards, 3).is_empty());
    }

    #[test]
    fn test_detail_splits_oracle_lines() {
        let mut card = unranked_card("a", "Lines");
        card.oracle_text = Some("Flying\nHaste".to_string());
        let detail = generate_card_detail(&[card], 0);
        assert!(detail.contains("<p>Flying</p><p>Haste</p>"));
    }
}
