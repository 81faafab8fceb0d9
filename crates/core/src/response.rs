use serde::Serialize;

use crate::classify::{Classification, Property};

/// Successful classification payload
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

impl ClassificationResult {
    pub fn new(classification: &Classification, fun_fact: String) -> Self {
        Self {
            number: classification.number,
            is_prime: classification.is_prime,
            is_perfect: classification.is_perfect,
            properties: classification.properties(),
            digit_sum: classification.digit_sum,
            fun_fact,
        }
    }
}

/// Payload returned for rejected input
///
/// `number` echoes the raw query value unchanged, or `null` when the
/// parameter was missing.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ErrorResult {
    pub number: Option<String>,
    pub error: bool,
}

impl ErrorResult {
    pub fn new(number: Option<String>) -> Self {
        Self {
            number,
            error: true,
        }
    }
}
