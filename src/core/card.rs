use serde::{Deserialize, Serialize};
use std::fmt;

/// Card brands accepted at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Discover,
    AmericanExpress,
}

impl CardBrand {
    /// Detect the brand from a raw card number.
    ///
    /// Numbers of ten characters or fewer, or without any digit, never match.
    pub fn detect(number: &str) -> Option<Self> {
        let len = number.len();
        if len <= 10 || !number.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }

        let bytes = number.as_bytes();
        match (bytes[0], bytes[1]) {
            (b'4', _) if len == 13 || len == 16 => Some(CardBrand::Visa),
            (b'5', b'1'..=b'5') if len == 16 => Some(CardBrand::Mastercard),
            (b'3', b'4' | b'7') if len == 15 => Some(CardBrand::AmericanExpress),
            _ if number.starts_with("6011") && len == 16 => Some(CardBrand::Discover),
            _ => None,
        }
    }

    /// Expected length of the card security code
    pub fn security_code_len(&self) -> usize {
        match self {
            CardBrand::AmericanExpress => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardBrand::Visa => write!(f, "Visa"),
            CardBrand::Mastercard => write!(f, "Mastercard"),
            CardBrand::Discover => write!(f, "Discover Card"),
            CardBrand::AmericanExpress => write!(f, "American Express"),
        }
    }
}

/// Display form of a card number that never reveals more than the last four digits,
/// e.g. `Visa ending in 1111`
pub fn masked_display(number: &str) -> String {
    let number = number.trim();
    let last4: String = {
        let chars: Vec<char> = number.chars().collect();
        let start = chars.len().saturating_sub(4);
        chars[start..].iter().collect()
    };

    match CardBrand::detect(number) {
        Some(brand) => format!("{} ending in {}", brand, last4),
        None => format!("Card ending in {}", last4),
    }
}
