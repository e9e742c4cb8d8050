use std::fmt::{Display, Formatter};

use serde::Serialize;

/// One accepted lotto pick: a 1- or 2-character slice of the normalized
/// input string, interpreted as its numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    // start index in the normalized string
    begin: usize,
    // number of characters consumed, 1 or 2
    length: usize,
    value: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token[begin:{}, length:{}, value:{}]",
            self.begin, self.length, self.value
        )
    }
}

impl Token {
    pub fn new(begin: usize, length: usize, value: u32) -> Self {
        Token {
            begin,
            length,
            value,
        }
    }

    pub fn get_begin(&self) -> usize {
        self.begin
    }

    pub fn get_end_position(&self) -> usize {
        self.begin + self.length
    }

    pub fn get_length(&self) -> usize {
        self.length
    }

    pub fn get_value(&self) -> u32 {
        self.value
    }

    /// The consumed substring. A two-character pick never starts with '0',
    /// so the decimal rendering of the value reproduces it exactly.
    pub fn text(&self) -> String {
        self.value.to_string()
    }
}
