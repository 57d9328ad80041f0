use log::{debug, info, warn};

use super::filter_sort::{filtered_and_sorted_cards, SortMode};
use super::navigator::{DetailNavigator, SwipeOutcome};
use super::GalleryError;
use crate::cards::card::Card;
use crate::catalog::Catalog;

/// Everything the gallery screen needs, owned by the caller and passed around explicitly.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    catalog: Catalog,
    search_text: String,
    sort_mode: SortMode,
    navigator: DetailNavigator,
}

impl GalleryState {
    pub fn new(catalog: Catalog) -> Self {
        GalleryState {
            catalog,
            ..Default::default()
        }
    }

    pub fn with_inputs(catalog: Catalog, search_text: &str, sort_mode: SortMode) -> Self {
        GalleryState {
            catalog,
            search_text: search_text.to_string(),
            sort_mode,
            navigator: DetailNavigator::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn navigator(&self) -> &DetailNavigator {
        &self.navigator
    }

    /// Returns the sort mode in effect afterwards. A rank sort that the new
    /// search can no longer satisfy falls back to `SortMode::None`.
    pub fn set_search_text(&mut self, search_text: &str) -> SortMode {
        debug!("Search text changed to '{}'", search_text);
        self.search_text = search_text.to_string();
        if let Err(e) = self.derived_cards() {
            warn!("Turning sorting off, {} can no longer be used: {}", self.sort_mode, e);
            self.sort_mode = SortMode::None;
        }
        self.sort_mode
    }

    /// Toggle semantics: picking the active mode turns sorting off.
    ///
    /// The new mode is only kept when the catalog can be sorted that way;
    /// otherwise the previous mode stays and the error is returned.
    pub fn select_sort(&mut self, selected: SortMode) -> Result<SortMode, GalleryError> {
        let next = self.sort_mode.toggled(selected);
        filtered_and_sorted_cards(&self.catalog, &self.search_text, next)?;
        info!("Sort mode {} -> {}", self.sort_mode, next);
        self.sort_mode = next;
        Ok(next)
    }

    pub fn derived_cards(&self) -> Result<Vec<Card>, GalleryError> {
        filtered_and_sorted_cards(&self.catalog, &self.search_text, self.sort_mode)
    }

    /// Opens the detail view on a snapshot of what the gallery shows right now.
    pub fn open_detail(&mut self, index: usize) -> Result<&Card, GalleryError> {
        let derived = self.derived_cards()?;
        let len = derived.len();
        self.navigator.open(derived, index)?;
        self.navigator
            .current_card()
            .ok_or(GalleryError::IndexOutOfRange { index, len })
    }

    pub fn advance(&mut self) -> bool {
        self.navigator.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.navigator.retreat()
    }

    pub fn swipe(&mut self, translation_x: f64) -> SwipeOutcome {
        self.navigator.handle_drag_end(translation_x)
    }

    pub fn close_detail(&mut self) {
        self.navigator.close();
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.navigator.current_card()
    }
}
