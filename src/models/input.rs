//! Keypad entry buffer
//!
//! Holds the amount being typed as a decimal string. The buffer is never
//! empty, carries at most one decimal point, and at most two fractional digits.

use std::fmt;

use super::money::Money;

/// Placeholder shown before anything is typed
const PLACEHOLDER: &str = "0";

/// Maximum digits allowed after the decimal point
const MAX_FRACTION_DIGITS: usize = 2;

/// Maximum digits before the decimal point; keeps any typed amount well
/// inside `Money::MAX_BALANCE`
const MAX_WHOLE_DIGITS: usize = 12;

/// The in-progress numeric entry from the keypad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountInput {
    buffer: String,
}

impl AmountInput {
    /// Create an empty entry ("0")
    pub fn new() -> Self {
        Self {
            buffer: PLACEHOLDER.to_string(),
        }
    }

    /// The raw buffer contents
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Whether the buffer still shows the placeholder zero
    pub fn is_placeholder(&self) -> bool {
        self.buffer == PLACEHOLDER
    }

    /// Apply one keypad press
    ///
    /// Accepts '0'..='9' and '.'; anything else is ignored. Returns whether
    /// the buffer changed.
    pub fn push(&mut self, key: char) -> bool {
        if !(key.is_ascii_digit() || key == '.') {
            return false;
        }

        if key == '.' {
            if self.buffer.contains('.') {
                return false;
            }
            self.buffer.push('.');
            return true;
        }

        if self.is_placeholder() {
            self.buffer.clear();
            self.buffer.push(key);
            return true;
        }

        match self.buffer.split_once('.') {
            Some((_, fraction)) if fraction.len() >= MAX_FRACTION_DIGITS => return false,
            None if self.buffer.len() >= MAX_WHOLE_DIGITS => return false,
            _ => {}
        }

        self.buffer.push(key);
        true
    }

    /// Remove the last character, falling back to "0"
    ///
    /// Returns whether the buffer changed.
    pub fn pop(&mut self) -> bool {
        if self.buffer.len() <= 1 {
            let changed = !self.is_placeholder();
            self.clear();
            return changed;
        }
        self.buffer.pop();
        true
    }

    /// Reset to "0"
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer.push_str(PLACEHOLDER);
    }

    /// Parsed amount, zero if the buffer does not parse
    pub fn amount(&self) -> Money {
        Money::parse(&self.buffer).unwrap_or_default()
    }
}

impl Default for AmountInput {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> AmountInput {
        let mut input = AmountInput::new();
        for key in keys.chars() {
            input.push(key);
        }
        input
    }

    #[test]
    fn test_placeholder_is_replaced_by_first_digit() {
        assert_eq!(typed("4").as_str(), "4");
        assert_eq!(typed("00").as_str(), "0");
        assert_eq!(typed("07").as_str(), "7");
    }

    #[test]
    fn test_decimal_point_after_placeholder() {
        assert_eq!(typed(".").as_str(), "0.");
        assert_eq!(typed(".5").as_str(), "0.5");
    }

    #[test]
    fn test_second_decimal_point_ignored() {
        let mut input = typed("4.2");
        assert!(!input.push('.'));
        assert_eq!(input.as_str(), "4.2");
    }

    #[test]
    fn test_two_fraction_digits_max() {
        let mut input = typed("17.86");
        assert!(!input.push('5'));
        assert_eq!(input.as_str(), "17.86");
        assert_eq!(input.amount(), Money::from_cents(1786));
    }

    #[test]
    fn test_whole_digits_capped() {
        let mut input = typed("92233720368547758");
        assert_eq!(input.as_str(), "922337203685");
        assert!(!input.push('1'));

        assert!(input.push('.'));
        assert!(input.push('4'));
        assert_eq!(input.amount(), Money::from_cents(92_233_720_368_540));
    }

    #[test]
    fn test_non_keypad_chars_ignored() {
        assert_eq!(typed("1a-2").as_str(), "12");
    }

    #[test]
    fn test_invariant_holds_for_any_sequence() {
        let keys = ['0', '1', '5', '9', '.'];
        // Walk every sequence of length 6 over the keypad alphabet
        let mut counters = [0usize; 6];
        loop {
            let mut input = AmountInput::new();
            for &i in &counters {
                input.push(keys[i]);
                let s = input.as_str();
                assert!(!s.is_empty());
                assert!(s.matches('.').count() <= 1, "{}", s);
                assert!(s.split_once('.').map_or(0, |(_, f)| f.len()) <= 2, "{}", s);
                assert!(Money::parse(s).is_ok(), "{}", s);
            }

            let mut pos = 0;
            loop {
                counters[pos] += 1;
                if counters[pos] < keys.len() {
                    break;
                }
                counters[pos] = 0;
                pos += 1;
                if pos == counters.len() {
                    return;
                }
            }
        }
    }

    #[test]
    fn test_pop_floors_at_placeholder() {
        let mut input = AmountInput::new();
        assert!(!input.pop());
        assert_eq!(input.as_str(), "0");

        let mut input = typed("12.5");
        input.pop();
        assert_eq!(input.as_str(), "12.");
        input.pop();
        input.pop();
        assert_eq!(input.as_str(), "1");
        assert!(input.pop());
        assert_eq!(input.as_str(), "0");
    }

    #[test]
    fn test_clear() {
        let mut input = typed("99.99");
        input.clear();
        assert!(input.is_placeholder());
        assert_eq!(input.amount(), Money::zero());
    }

    #[test]
    fn test_trailing_point_parses() {
        assert_eq!(typed("3.").amount(), Money::from_cents(300));
    }
}
