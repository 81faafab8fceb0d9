use std::fmt;
use std::str::FromStr;

/// Returned in place of a fun fact whenever the provider cannot supply one
pub const FALLBACK_FUN_FACT: &str = "Fun fact not available";

/// Default Numbers API endpoint
pub const DEFAULT_FACT_API_URL: &str = "http://numbersapi.com";

/// Kind of fact requested from the Numbers API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FactCategory {
    Trivia,
    #[default]
    Math,
    Year,
    Date,
}

impl FactCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactCategory::Trivia => "trivia",
            FactCategory::Math => "math",
            FactCategory::Year => "year",
            FactCategory::Date => "date",
        }
    }
}

impl fmt::Display for FactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown fact category '{0}' (expected trivia, math, year or date)")]
pub struct UnknownCategory(pub String);

impl FromStr for FactCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trivia" => Ok(FactCategory::Trivia),
            "math" => Ok(FactCategory::Math),
            "year" => Ok(FactCategory::Year),
            "date" => Ok(FactCategory::Date),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Build the provider URL for `number`: `{base}/{number}/{category}`
pub fn fact_url(base: &str, number: i64, category: FactCategory) -> String {
    format!("{}/{number}/{category}", base.trim_end_matches('/'))
}

/// Turn a provider outcome into the string placed in the response.
///
/// Errors and blank bodies both resolve to [`FALLBACK_FUN_FACT`].
pub fn resolve_fun_fact<E>(outcome: Result<String, E>) -> String {
    match outcome {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => FALLBACK_FUN_FACT.to_string(),
    }
}
