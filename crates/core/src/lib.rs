//! Core library for numclass
//!
//! This crate implements the **Functional Core** of the numclass service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`numclass_core`** (this crate): Pure classification and validation with zero I/O
//! - **`numclass`**: HTTP transport, the outbound fact provider and the CLI (the Imperative Shell)
//!
//! Every function here is deterministic and side-effect free, so it can be
//! tested with plain values and no mocking.
//!
//! # Module Organization
//!
//! - [`classify`]: Parity, primality, perfection, Armstrong status and digit sums
//! - [`number`]: Strict validation of the requested number
//! - [`fact`]: Fact provider URLs and fallback resolution
//! - [`response`]: JSON payloads returned to callers
//!
//! # Example Usage
//!
//! ```rust
//! use numclass_core::classify::classify;
//! use numclass_core::fact::resolve_fun_fact;
//! use numclass_core::number::parse_number;
//! use numclass_core::response::ClassificationResult;
//!
//! let number = parse_number("371").unwrap();
//! let outcome: Result<String, ()> = Err(());
//! let result = ClassificationResult::new(&classify(number), resolve_fun_fact(outcome));
//!
//! assert_eq!(result.digit_sum, 11);
//! assert_eq!(result.fun_fact, "Fun fact not available");
//! ```

pub mod classify;
pub mod fact;
pub mod number;
pub mod response;
