use std::collections::HashSet;

use crate::core::char_util::{digit_value, is_round_ten_lead};
use crate::core::errors::Infeasible;
use crate::core::lotto_segmenter::LOTTO_SIZE;

/// Output of the preprocessing pass: the normalized character buffer plus
/// the zero scan results the search engine consumes.
#[derive(Debug, PartialEq, Eq)]
pub struct Normalized {
    /// Input with the leading run of '0' stripped.
    pub chars: Vec<char>,
    /// Indices where a digit and the following '0' form a round-ten pick.
    /// Such positions are consumed as pairs whenever possible, because a
    /// lone '0' can never start or be a pick.
    pub zero_pairs: HashSet<usize>,
    /// Count of '0' characters past index 0.
    pub num_zeros: usize,
    /// Predicted number of two-digit picks still to be placed. Zeros are
    /// pre-deducted, so this can go negative.
    pub two_digit_quota: i32,
}

/// Normalize `raw` and scan it for zero pairs.
///
/// Rejects non-digit input, all-zero input, a trailing "00" and any
/// length outside the `LOTTO_SIZE..=2*LOTTO_SIZE + num_zeros` window.
pub fn preprocess(raw: &str) -> Result<Normalized, Infeasible> {
    for (position, c) in raw.chars().enumerate() {
        if digit_value(&c).is_none() {
            return Err(Infeasible::NonDigit { position });
        }
    }

    // leading zeros carry no information, a pick cannot start with '0'
    let chars: Vec<char> = raw.chars().skip_while(|c| *c == '0').collect();
    let len = chars.len();
    if len == 0 {
        return Err(Infeasible::Empty);
    }
    // a trailing "00" forces a final pick of 100 or more
    if len > 2 && chars[len - 2] == '0' && chars[len - 1] == '0' {
        return Err(Infeasible::TrailingDoubleZero);
    }

    // scan for zeros from index 1, recording valid round-ten pair positions
    let mut zero_pairs = HashSet::new();
    let mut num_zeros = 0_usize;
    let mut two_digit_quota = len as i32 - LOTTO_SIZE as i32;
    for i in 1..len {
        if chars[i] == '0' {
            if is_round_ten_lead(&chars[i - 1]) {
                zero_pairs.insert(i - 1);
            }
            two_digit_quota -= 1;
            num_zeros += 1;
        }
    }

    let max = 2 * LOTTO_SIZE + num_zeros;
    if len < LOTTO_SIZE || len > max {
        return Err(Infeasible::LengthOutOfWindow {
            len,
            min: LOTTO_SIZE,
            max,
        });
    }

    Ok(Normalized {
        chars,
        zero_pairs,
        num_zeros,
        two_digit_quota,
    })
}
