pub const DEFAULT_CARDS_PATH: &str = "data/WOT-Scryfall.json";

pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_GALLERY_PAGE: &str = "index.html";

pub const CARD_BACK_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/en/a/aa/Magic_the_gathering-card_back.jpg";

/// Horizontal drag distance, in logical units, a swipe has to exceed.
pub const SWIPE_THRESHOLD: f64 = 50.0;
