use thiserror::Error;

/// The single verdict surfaced when no valid lotto set exists for an input.
///
/// The variants carry the diagnostic sub-reason; callers that only care
/// about feasibility can treat every variant the same.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Infeasible {
    #[error("non-digit character at position {position}")]
    NonDigit { position: usize },
    #[error("empty after stripping leading zeros")]
    Empty,
    #[error("ends with \"00\", final pick would be 100 or more")]
    TrailingDoubleZero,
    #[error("length {len} outside the {min}..={max} window")]
    LengthOutOfWindow { len: usize, min: usize, max: usize },
    #[error("no valid lotto set found")]
    SearchExhausted,
}
