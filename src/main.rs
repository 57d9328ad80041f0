use std::io;

use log::{error, info};

use mtg_card_gallery::catalog::Catalog;
use mtg_card_gallery::gallery::filter_sort::SortMode;
use mtg_card_gallery::gallery::state::GalleryState;
use mtg_card_gallery::html::gallery_page::generate_gallery_page;
use mtg_card_gallery::session::Session;
use mtg_card_gallery::utilities::config::CONFIG;

fn build_gallery_state() -> GalleryState {
    let start_time = chrono::prelude::Local::now();
    let catalog = Catalog::load_or_empty(&CONFIG.cards_path);
    let mut state = GalleryState::with_inputs(catalog, &CONFIG.search_text, SortMode::None);

    if CONFIG.sort_mode != SortMode::None {
        if let Err(e) = state.select_sort(CONFIG.sort_mode) {
            error!("Keeping catalog order: {}", e);
        }
    }

    let end_time = chrono::prelude::Local::now();
    info!(
        "Catalog loaded at: {}. Took: {} ms with {} cards from: {}",
        end_time,
        (end_time - start_time).num_milliseconds(),
        state.catalog().len(),
        CONFIG.cards_path
    );
    state
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Starting");

    let state = build_gallery_state();

    let cards = state.derived_cards()?;
    info!(
        "Gallery shows {} cards (search: '{}', sort: {})",
        cards.len(),
        state.search_text(),
        state.sort_mode()
    );
    generate_gallery_page(&cards, &CONFIG.output_dir, &CONFIG.gallery_page)?;

    if CONFIG.interactive {
        let mut session = Session::new(state);
        session.run(io::stdin().lock(), io::stdout().lock())?;
    }

    Ok(())
}
