#[allow(dead_code)]
pub mod core;

pub use crate::core::errors::Infeasible;
pub use crate::core::lotto_segmenter::{LottoSegmenter, LOTTO_SIZE, LOWER_BOUND, UPPER_BOUND};
pub use crate::core::segmentor::Segmenter;
pub use crate::core::token::Token;

/// Segment `text` with a fresh engine, returning `LOTTO_SIZE` distinct
/// picks in acceptance order, or the reason the input is infeasible.
pub fn segment(text: &str) -> Result<Vec<Token>, Infeasible> {
    let mut segmenter = LottoSegmenter::new();
    segmenter.tokenize(text)
}
