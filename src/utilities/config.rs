use std::env;

use log::error;

use crate::gallery::filter_sort::SortMode;
use crate::utilities::constants::{DEFAULT_CARDS_PATH, DEFAULT_GALLERY_PAGE, DEFAULT_OUTPUT_DIR};

#[derive(Debug, Clone)]
pub struct Config {
    pub cards_path: String,
    pub search_text: String,
    pub sort_mode: SortMode,
    pub output_dir: String,
    pub gallery_page: String,
    pub interactive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cards_path: DEFAULT_CARDS_PATH.to_string(),
            search_text: "".to_string(),
            sort_mode: SortMode::None,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            gallery_page: DEFAULT_GALLERY_PAGE.to_string(),
            interactive: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        self.update_from_lookup(|key| env::var(key).ok());
    }

    fn update_from_lookup<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(cards_path) = lookup("CARDS_PATH") {
            if std::path::Path::new(&cards_path).is_file() && cards_path.ends_with(".json") {
                self.cards_path = cards_path;
            } else if !cards_path.is_empty() {
                error!(
                    "Supplied incorrect path to card file: '{}', using {}",
                    cards_path, DEFAULT_CARDS_PATH
                );
            }
        }
        if let Some(search_text) = lookup("SEARCH") {
            self.search_text = search_text;
        }
        if let Some(sort) = lookup("SORT") {
            self.sort_mode = match sort.parse() {
                Ok(mode) => mode,
                Err(e) => {
                    error!("{}, not sorting", e);
                    SortMode::None
                }
            };
        }
        if let Some(output_dir) = lookup("OUTPUT_DIR") {
            if !output_dir.is_empty() {
                self.output_dir = output_dir;
            }
        }
        if let Some(gallery_page) = lookup("GALLERY_PAGE") {
            if gallery_page.ends_with(".html") {
                self.gallery_page = gallery_page;
            } else {
                error!(
                    "Gallery page must be an .html file, got '{}', using {}",
                    gallery_page, DEFAULT_GALLERY_PAGE
                );
            }
        }
        if let Some(interactive) = lookup("INTERACTIVE") {
            self.interactive = interactive == "1";
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = Config::default();
        config.update_from_lookup(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn test_defaults_without_env() {
        let config = config_from(&[]);
        assert_eq!(config.cards_path, DEFAULT_CARDS_PATH);
        assert_eq!(config.search_text, "");
        assert_eq!(config.sort_mode, SortMode::None);
        assert!(!config.interactive);
    }

    #[test]
    fn test_overrides() {
        let temp_dir = tempdir().unwrap();
        let cards_path = temp_dir.path().join("cards.json");
        std::fs::write(&cards_path, "{}").unwrap();
        let cards_path = cards_path.to_str().unwrap();

        let config = config_from(&[
            ("CARDS_PATH", cards_path),
            ("SEARCH", "dragon"),
            ("SORT", "rank"),
            ("OUTPUT_DIR", "/tmp/gallery"),
            ("GALLERY_PAGE", "cards.html"),
            ("INTERACTIVE", "1"),
        ]);

        assert_eq!(config.cards_path, cards_path);
        assert_eq!(config.search_text, "dragon");
        assert_eq!(config.sort_mode, SortMode::ByRank);
        assert_eq!(config.output_dir, "/tmp/gallery");
        assert_eq!(config.gallery_page, "cards.html");
        assert!(config.interactive);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("CARDS_PATH", "/does/not/exist.json"),
            ("SORT", "by-price"),
            ("GALLERY_PAGE", "gallery.txt"),
        ]);

        assert_eq!(config.cards_path, DEFAULT_CARDS_PATH);
        assert_eq!(config.sort_mode, SortMode::None);
        assert_eq!(config.gallery_page, DEFAULT_GALLERY_PAGE);
    }
}
