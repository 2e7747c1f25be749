use crate::*;

/// Gate in front of [`GameEngine::start_game`], accepts whole numbers in an inclusive range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputValidator {
    min_value: SlotCount,
    max_value: SlotCount,
}

impl InputValidator {
    pub const DEFAULT_MIN: SlotCount = 3;
    pub const DEFAULT_MAX: SlotCount = 7;

    pub const fn new(min_value: SlotCount, max_value: SlotCount) -> Self {
        Self {
            min_value,
            max_value,
        }
    }

    pub const fn min_value(&self) -> SlotCount {
        self.min_value
    }

    pub const fn max_value(&self) -> SlotCount {
        self.max_value
    }

    pub fn valid_number_range(&self, raw: &str) -> bool {
        self.parse(raw).is_ok()
    }

    pub fn parse(&self, raw: &str) -> Result<SlotCount> {
        parse_whole_number(raw.trim())
            .filter(|&value| {
                value >= i64::from(self.min_value) && value <= i64::from(self.max_value)
            })
            .and_then(|value| SlotCount::try_from(value).ok())
            .ok_or(GameError::InvalidInput {
                min: self.min_value,
                max: self.max_value,
            })
    }

    pub const fn error_message(&self) -> Message {
        Message::InvalidInput {
            min: self.min_value,
            max: self.max_value,
        }
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

/// Signed decimal integer, optionally written with a zero fraction (`"5.0"`, `"5."`).
fn parse_whole_number(text: &str) -> Option<i64> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };

    if !fraction.bytes().all(|b| b == b'0') {
        return None;
    }

    let digits = whole.strip_prefix(['+', '-']).unwrap_or(whole);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    whole.parse().ok()
}
