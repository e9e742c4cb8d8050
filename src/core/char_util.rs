use phf::{phf_set, Set};

// lead digits that form a valid round-ten pick (10, 20, 30, 40, 50)
// when immediately followed by '0'
static ROUND_TEN_LEADS: Set<char> = phf_set! {
    '1',
    '2',
    '3',
    '4',
    '5',
};

// fallible parse of a single ASCII digit
pub fn digit_value(input: &char) -> Option<u32> {
    input.to_digit(10)
}

pub fn is_digit(input: &char) -> bool {
    input.is_ascii_digit()
}

// judge whether `input` followed by '0' makes a round-ten pick
pub fn is_round_ten_lead(input: &char) -> bool {
    ROUND_TEN_LEADS.contains(input)
}
