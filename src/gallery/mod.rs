pub mod filter_sort;
pub mod navigator;
pub mod state;

use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum GalleryError {
    /// Rank sorting needs every card to carry an `edhrec_rank`.
    #[error("cannot sort by rank: '{name}' ({id}) has no rank")]
    MissingRank { id: String, name: String },
    #[error("index {index} is out of range for {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
}
