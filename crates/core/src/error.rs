//! Parse errors for currency amount literals.

use thiserror::Error;

/// Errors reported when parsing a currency amount from a string.
///
/// The parser accepts only plain decimal literals: an optional leading `-`,
/// ASCII digits, and at most one `.`. Anything a locale formatter adds
/// (currency symbols, grouping separators) must be stripped by the caller
/// before parsing, and each gets its own variant so callers can say what
/// was wrong with the input.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    /// The input string is empty.
    #[error("amount string is empty")]
    Empty,

    /// The input carries a currency symbol.
    #[error("amount string '{0}' contains a currency symbol; strip the symbol before parsing")]
    CurrencySymbol(String),

    /// The input carries grouping separators (comma, underscore, space).
    #[error("amount string '{0}' contains grouping separators; pass a plain decimal literal")]
    GroupingSeparator(String),

    /// The input contains a character outside the plain-literal grammar.
    #[error("amount string '{input}' contains invalid character '{character}'")]
    InvalidCharacter {
        /// The rejected input.
        input: String,
        /// The first offending character.
        character: char,
    },

    /// The input passed the character checks but is not a decimal number.
    #[error("amount string '{input}' is not a valid decimal number: {source}")]
    InvalidNumber {
        /// The rejected input.
        input: String,
        /// The underlying decimal parse error.
        #[source]
        source: rust_decimal::Error,
    },
}
