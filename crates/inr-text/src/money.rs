//! Money rounding and rupee/paise rendering

use crate::words::{number_to_indian_words, two_digit_words};
use crate::{InrTextError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rendered forms of one money amount, as injected into an invoice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyText {
    /// Two-decimal rendering (e.g. "793658.00")
    pub fixed: String,
    /// Whole-rupee rendering (e.g. "793658")
    pub integer: String,
    /// Amount in words (e.g. "Indian Rupees ... Only")
    pub words: String,
}

impl MoneyText {
    /// Derive all renderings of an amount
    pub fn from_amount(amount: Decimal) -> Result<Self> {
        Ok(Self {
            fixed: format_fixed2(amount),
            integer: round_to_integer(amount).to_string(),
            words: money_to_words(amount)?,
        })
    }
}

/// Round to 2 decimal places, ties away from zero
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to 2 decimal places and render with exactly two fraction digits
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use rust_decimal::Decimal;
/// use inr_text::format_fixed2;
/// assert_eq!(format_fixed2(Decimal::from_str("672591.525").unwrap()), "672591.53");
/// assert_eq!(format_fixed2(Decimal::from(5)), "5.00");
/// ```
pub fn format_fixed2(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(2);
    rounded.to_string()
}

/// Round to the nearest whole number, ties away from zero
pub fn round_to_integer(amount: Decimal) -> i128 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i128()
        .unwrap_or_default()
}

/// Format an amount as an invoice words line
///
/// The paise clause is omitted when the rounded amount has no paise.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use rust_decimal::Decimal;
/// use inr_text::money_to_words;
/// assert_eq!(
///     money_to_words(Decimal::from_str("121066.47").unwrap()).unwrap(),
///     "Indian Rupees One Lakh Twenty One Thousand Sixty Six and Forty Seven Paise Only"
/// );
/// ```
pub fn money_to_words(amount: Decimal) -> Result<String> {
    let amount = round_money(amount);
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InrTextError::NegativeAmount(amount.to_string()));
    }

    let rupees = amount.trunc();
    // exact: amount carries at most two fraction digits after rounding
    let paise = ((amount - rupees) * Decimal::ONE_HUNDRED)
        .to_u64()
        .ok_or_else(|| InrTextError::AmountTooLarge(amount.to_string()))?;
    let rupees = rupees
        .to_u64()
        .ok_or_else(|| InrTextError::AmountTooLarge(amount.to_string()))?;

    let rupee_words = number_to_indian_words(rupees);
    if paise > 0 {
        Ok(format!(
            "Indian Rupees {} and {} Paise Only",
            rupee_words,
            two_digit_words(paise)
        ))
    } else {
        Ok(format!("Indian Rupees {rupee_words} Only"))
    }
}

/// Render a 2-decimal amount with Indian digit grouping (e.g. "7,93,658.00")
pub fn format_indian_grouping(amount: Decimal) -> String {
    let fixed = format_fixed2(amount);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    if int_part.len() <= 3 {
        return format!("{sign}{int_part}.{frac_part}");
    }

    let (head, last_three) = int_part.split_at(int_part.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{sign}{},{last_three}.{frac_part}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec("0.005")), dec("0.01"));
        assert_eq!(round_money(dec("0.004")), dec("0.00"));
        assert_eq!(round_money(dec("2.675")), dec("2.68"));
        assert_eq!(round_money(dec("-0.005")), dec("-0.01"));
    }

    #[test]
    fn test_format_fixed2() {
        assert_eq!(format_fixed2(dec("672591.525")), "672591.53");
        assert_eq!(format_fixed2(dec("672591.52")), "672591.52");
        assert_eq!(format_fixed2(dec("793658")), "793658.00");
        assert_eq!(format_fixed2(dec("0.1")), "0.10");
        assert_eq!(format_fixed2(dec("121066.4749")), "121066.47");
    }

    #[test]
    fn test_round_to_integer() {
        assert_eq!(round_to_integer(dec("793658.00")), 793658);
        assert_eq!(round_to_integer(dec("793657.5")), 793658);
        assert_eq!(round_to_integer(dec("793657.49")), 793657);
        assert_eq!(round_to_integer(dec("-1.5")), -2);
    }

    #[test]
    fn test_money_to_words_without_paise() {
        assert_eq!(
            money_to_words(dec("793658.00")).unwrap(),
            "Indian Rupees Seven Lakh Ninety Three Thousand Six Hundred Fifty Eight Only"
        );
        // rounds away the paise before deciding on the clause
        assert_eq!(
            money_to_words(dec("99.999")).unwrap(),
            "Indian Rupees One Hundred Only"
        );
    }

    #[test]
    fn test_money_to_words_with_paise() {
        assert_eq!(
            money_to_words(dec("121066.47")).unwrap(),
            "Indian Rupees One Lakh Twenty One Thousand Sixty Six and Forty Seven Paise Only"
        );
        assert_eq!(
            money_to_words(dec("0.05")).unwrap(),
            "Indian Rupees Zero and Five Paise Only"
        );
        assert_eq!(
            money_to_words(dec("10.10")).unwrap(),
            "Indian Rupees Ten and Ten Paise Only"
        );
    }

    #[test]
    fn test_money_to_words_zero() {
        assert_eq!(money_to_words(dec("0")).unwrap(), "Indian Rupees Zero Only");
        assert_eq!(
            money_to_words(dec("0.004")).unwrap(),
            "Indian Rupees Zero Only"
        );
    }

    #[test]
    fn test_money_to_words_negative() {
        let err = money_to_words(dec("-1.00")).unwrap_err();
        assert!(matches!(err, InrTextError::NegativeAmount(_)));
    }

    #[test]
    fn test_money_text_from_amount() {
        let text = MoneyText::from_amount(dec("793658.00")).unwrap();
        assert_eq!(text.fixed, "793658.00");
        assert_eq!(text.integer, "793658");
        assert_eq!(
            text.words,
            "Indian Rupees Seven Lakh Ninety Three Thousand Six Hundred Fifty Eight Only"
        );
    }

    #[test]
    fn test_format_indian_grouping() {
        assert_eq!(format_indian_grouping(dec("793658")), "7,93,658.00");
        assert_eq!(format_indian_grouping(dec("12345678.9")), "1,23,45,678.90");
        assert_eq!(format_indian_grouping(dec("999")), "999.00");
        assert_eq!(format_indian_grouping(dec("-1000")), "-1,000.00");
    }
}
