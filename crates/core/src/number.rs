use regex::Regex;
use std::sync::LazyLock;

/// Optional leading minus followed by ASCII digits only.
///
/// `\d` would also accept non-ASCII Unicode digits, so the class is spelled out.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("number pattern is a valid regex"));

/// Raw input that could not be turned into an `i64`
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidNumber {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("'{0}' does not fit in a 64-bit signed integer")]
    OutOfRange(String),
}

impl InvalidNumber {
    /// The rejected input, unchanged
    pub fn input(&self) -> &str {
        match self {
            InvalidNumber::NotAnInteger(raw) | InvalidNumber::OutOfRange(raw) => raw,
        }
    }
}

/// Validate and parse a requested number.
///
/// The input is not trimmed: surrounding whitespace, `+` signs, decimals and
/// empty strings are all rejected. Values outside the `i64` range are rejected
/// instead of being clamped.
pub fn parse_number(raw: &str) -> Result<i64, InvalidNumber> {
    if !NUMBER_PATTERN.is_match(raw) {
        return Err(InvalidNumber::NotAnInteger(raw.to_string()));
    }

    raw.parse::<i64>()
        .map_err(|_| InvalidNumber::OutOfRange(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_integers() {
        assert_eq!(parse_number("371"), Ok(371));
        assert_eq!(parse_number("0"), Ok(0));
        assert_eq!(parse_number("-5"), Ok(-5));
        assert_eq!(parse_number("007"), Ok(7));
        assert_eq!(parse_number("-0"), Ok(0));
    }

    #[test]
    fn test_parse_number_accepts_i64_bounds() {
        assert_eq!(parse_number("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_number("-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn test_parse_number_rejects_non_integers() {
        for raw in ["", "abc", "12a", "1.5", "-", "--1", "+5", " 5", "5 ", "1e3", "0x1F"] {
            assert_eq!(
                parse_number(raw),
                Err(InvalidNumber::NotAnInteger(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_number_rejects_unicode_digits() {
        // Arabic-Indic digits are `\d` in Unicode regexes
        assert!(matches!(
            parse_number("١٢٣"),
            Err(InvalidNumber::NotAnInteger(_))
        ));
    }

    #[test]
    fn test_parse_number_rejects_out_of_range() {
        let raw = "9223372036854775808";
        assert_eq!(
            parse_number(raw),
            Err(InvalidNumber::OutOfRange(raw.to_string()))
        );
        assert!(parse_number("-99999999999999999999").is_err());
    }

    #[test]
    fn test_invalid_number_keeps_raw_input() {
        let err = parse_number("abc").unwrap_err();
        assert_eq!(err.input(), "abc");
        assert_eq!(err.to_string(), "'abc' is not an integer");
    }
}
