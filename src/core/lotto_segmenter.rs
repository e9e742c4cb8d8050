use std::collections::HashSet;

use log::debug;

use crate::core::char_util::digit_value;
use crate::core::errors::Infeasible;
use crate::core::preprocessor::{preprocess, Normalized};
use crate::core::segmentor::Segmenter;
use crate::core::token::Token;

const SEGMENTER_NAME: &str = "LOTTO_SEGMENTER";

/// Number of picks in one lotto set.
pub const LOTTO_SIZE: usize = 7;
/// Smallest valid pick.
pub const LOWER_BOUND: u32 = 1;
/// Largest valid pick.
pub const UPPER_BOUND: u32 = 59;

/// Backtracking segmenter: partitions a digit string into `LOTTO_SIZE`
/// distinct picks in `LOWER_BOUND..=UPPER_BOUND`, consuming the string
/// left to right in 1- or 2-character steps.
///
/// All search state lives on the instance and is reset per input, so one
/// segmenter can be reused across inputs but not shared across threads.
pub struct LottoSegmenter {
    // accepted picks in acceptance order
    results: Vec<Token>,
    // values already taken, O(1) duplicate lookup
    taken: HashSet<u32>,
    // round-ten pair positions, immutable during one search
    zero_pairs: HashSet<usize>,
    num_zeros: usize,
}

impl Segmenter for LottoSegmenter {
    fn segment(&mut self, input: &str) -> Result<Vec<Token>, Infeasible> {
        self.tokenize(input)
    }
    fn name(&self) -> &str {
        SEGMENTER_NAME
    }
}

impl Default for LottoSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl LottoSegmenter {
    pub fn new() -> Self {
        LottoSegmenter {
            results: Vec::with_capacity(LOTTO_SIZE),
            taken: HashSet::with_capacity(LOTTO_SIZE),
            zero_pairs: HashSet::new(),
            num_zeros: 0,
        }
    }

    /// Segment `text` into one valid lotto set, or report it infeasible.
    pub fn tokenize(&mut self, text: &str) -> Result<Vec<Token>, Infeasible> {
        let Normalized {
            chars,
            zero_pairs,
            num_zeros,
            two_digit_quota,
        } = preprocess(text)?;

        self.results.clear();
        self.taken.clear();
        self.zero_pairs = zero_pairs;
        self.num_zeros = num_zeros;

        if self.find_lotto(&chars, 0, two_digit_quota) {
            Ok(std::mem::take(&mut self.results))
        } else {
            Err(Infeasible::SearchExhausted)
        }
    }

    // duplicate or out-of-range values never enter the result set
    fn validate_value(&self, value: u32) -> bool {
        (LOWER_BOUND..=UPPER_BOUND).contains(&value) && !self.taken.contains(&value)
    }

    fn enter_item(&mut self, token: Token) -> bool {
        if !self.validate_value(token.get_value()) {
            return false;
        }
        self.taken.insert(token.get_value());
        self.results.push(token);
        true
    }

    // backtracking always undoes the most recent accept of the same frame
    fn remove_last(&mut self) {
        if let Some(token) = self.results.pop() {
            self.taken.remove(&token.get_value());
        }
    }

    // slack between the remaining bucket capacity and the remaining string;
    // every open bucket absorbs up to 2 characters and zeros compress into
    // pairs, so a non-positive value means the string can no longer fit
    fn calc_fit(&self, char_count: usize, next_ptr: usize) -> i32 {
        let last_idx = char_count as i32 - 1;
        2 * (LOTTO_SIZE as i32 - self.results.len() as i32) - (last_idx - next_ptr as i32)
            + self.num_zeros as i32
    }

    /// Recursive forward/backtrack search.
    ///
    /// Returns `true` once `LOTTO_SIZE` picks land exactly on the end of
    /// the string; on every `false` return the result set is restored to
    /// the shape it had when the call was entered.
    fn find_lotto(&mut self, chars: &[char], ptr: usize, mut quota: i32) -> bool {
        let char_count = chars.len();
        // the lotto set and the end of string must land in sync
        if ptr >= char_count {
            return self.results.len() == LOTTO_SIZE;
        }
        // buckets are full but mandatory two-digit picks remain
        if self.results.len() == LOTTO_SIZE && quota > 0 {
            return false;
        }

        let Some(first) = digit_value(&chars[ptr]) else {
            return false;
        };
        // a stray zero cannot start a pick, push the position forward
        if first < LOWER_BOUND {
            return self.find_lotto(chars, ptr + 1, quota);
        }

        let mut value = first;
        let mut width = 1_usize;
        // two-digit first: round-ten pairs always, otherwise while the
        // quota still calls for two-digit picks
        if self.zero_pairs.contains(&ptr) || quota > 0 {
            if ptr + 1 >= char_count {
                return false;
            }
            let Some(second) = digit_value(&chars[ptr + 1]) else {
                return false;
            };
            let pair = first * 10 + second;
            if self.validate_value(pair) {
                // round-ten pairs were never counted into the quota
                if !self.zero_pairs.contains(&ptr) {
                    quota -= 1;
                }
                value = pair;
                width = 2;
            }
            // otherwise retry with the first digit alone
        }

        if !self.enter_item(Token::new(ptr, width, value)) {
            return false;
        }

        let fit = self.calc_fit(char_count, ptr + width);
        debug!("fit -> {}", fit);
        if fit > 0 && self.find_lotto(chars, ptr + width, quota) {
            return true;
        }

        // fallback: break the stored pair apart and try its first digit
        let fit = self.calc_fit(char_count, ptr + width);
        debug!("fit <- {} on {}", fit, value);
        if width == 2 && fit > 1 {
            self.remove_last();
            quota += 1;
            if !self.enter_item(Token::new(ptr, 1, first)) {
                return false;
            }
            if self.find_lotto(chars, ptr + 1, quota) {
                return true;
            }
        }

        // routine removal, also the fallback for failed one-digit picks
        self.remove_last();
        false
    }
}
