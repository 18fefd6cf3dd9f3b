//! Core currency model for Razoo.
//!
//! This crate contains the pure monetary value types with ZERO I/O or
//! locale dependencies. Everything here is an immutable value: amounts,
//! percentages, and the errors their parsers report.
//!
//! # Modules
//!
//! - `amount` - Canonical two-decimal currency amounts
//! - `percent` - Percentage points for rate arithmetic
//! - `error` - Parse errors for amount literals

pub mod amount;
pub mod error;
pub mod percent;

pub use amount::CurrencyAmount;
pub use error::ParseAmountError;
pub use percent::Percent;
