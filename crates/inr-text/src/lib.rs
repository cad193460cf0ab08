//! INR Text - Indian Rupee amount formatting
//!
//! This crate provides:
//! - Exact half-up rounding of money amounts (no binary floating point)
//! - Fixed two-decimal and whole-rupee renderings
//! - English number words in the Indian numbering system (Thousand, Lakh, Crore)
//! - Amount-in-words lines as printed on Indian invoices
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//! use rust_decimal::Decimal;
//! use inr_text::{format_fixed2, money_to_words, number_to_indian_words};
//!
//! assert_eq!(number_to_indian_words(100_000), "One Lakh");
//! assert_eq!(format_fixed2(Decimal::from_str("10.005").unwrap()), "10.01");
//! assert_eq!(
//!     money_to_words(Decimal::from_str("1.50").unwrap()).unwrap(),
//!     "Indian Rupees One and Fifty Paise Only"
//! );
//! ```

mod money;
mod words;

pub use money::{
    format_fixed2, format_indian_grouping, money_to_words, round_money, round_to_integer,
    MoneyText,
};
pub use words::{number_to_indian_words, three_digit_words, two_digit_words};

use thiserror::Error;

/// Errors that can occur while rendering money amounts
#[derive(Debug, Error)]
pub enum InrTextError {
    #[error("Negative amount cannot be written in words: {0}")]
    NegativeAmount(String),

    #[error("Amount too large to write in words: {0}")]
    AmountTooLarge(String),
}

/// Result type for money formatting operations
pub type Result<T> = std::result::Result<T, InrTextError>;
