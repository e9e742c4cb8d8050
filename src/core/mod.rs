pub mod char_util;
pub mod errors;
pub mod lotto_segmenter;
pub mod preprocessor;
pub mod segmentor;
pub mod token;
