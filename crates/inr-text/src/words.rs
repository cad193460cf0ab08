//! English number words in the Indian numbering system

/// Names for 0-19 (index 0 is intentionally empty)
const ONES: [&str; 20] = [
    "",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

/// Tens names indexed by the tens digit
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Render 0-99 as words. Zero renders as an empty string.
pub fn two_digit_words(n: u64) -> String {
    let n = n % 100;
    if n < 20 {
        return ONES[n as usize].to_string();
    }

    let (tens, ones) = (n / 10, n % 10);
    if ones == 0 {
        TENS[tens as usize].to_string()
    } else {
        format!("{} {}", TENS[tens as usize], ONES[ones as usize])
    }
}

/// Render 0-999 as words. Zero renders as an empty string.
pub fn three_digit_words(n: u64) -> String {
    let n = n % 1000;
    let (hundreds, rest) = (n / 100, n % 100);

    let mut parts = Vec::with_capacity(2);
    if hundreds > 0 {
        parts.push(format!("{} Hundred", ONES[hundreds as usize]));
    }
    if rest > 0 {
        parts.push(two_digit_words(rest));
    }
    parts.join(" ")
}

/// Format an integer as English words using crore, lakh and thousand groups
///
/// The crore portion may itself exceed 99 and is written by recursing on it.
///
/// # Examples
/// ```
/// use inr_text::number_to_indian_words;
/// assert_eq!(number_to_indian_words(0), "Zero");
/// assert_eq!(number_to_indian_words(1_00_000), "One Lakh");
/// assert_eq!(
///     number_to_indian_words(793_658),
///     "Seven Lakh Ninety Three Thousand Six Hundred Fifty Eight"
/// );
/// ```
pub fn number_to_indian_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let crore = n / CRORE;
    let lakh = (n % CRORE) / LAKH;
    let thousand = (n % LAKH) / THOUSAND;
    let rest = n % THOUSAND;

    let mut parts = Vec::with_capacity(4);
    if crore > 0 {
        parts.push(format!("{} Crore", number_to_indian_words(crore)));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digit_words(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digit_words(thousand)));
    }
    if rest > 0 {
        parts.push(three_digit_words(rest));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_digit_words() {
        assert_eq!(two_digit_words(0), "");
        assert_eq!(two_digit_words(7), "Seven");
        assert_eq!(two_digit_words(13), "Thirteen");
        assert_eq!(two_digit_words(20), "Twenty");
        assert_eq!(two_digit_words(47), "Forty Seven");
        assert_eq!(two_digit_words(99), "Ninety Nine");
    }

    #[test]
    fn test_three_digit_words() {
        assert_eq!(three_digit_words(100), "One Hundred");
        assert_eq!(three_digit_words(101), "One Hundred One");
        assert_eq!(three_digit_words(658), "Six Hundred Fifty Eight");
        assert_eq!(three_digit_words(66), "Sixty Six");
    }

    #[test]
    fn test_number_to_indian_words_small() {
        assert_eq!(number_to_indian_words(0), "Zero");
        assert_eq!(number_to_indian_words(1), "One");
        assert_eq!(number_to_indian_words(19), "Nineteen");
        assert_eq!(number_to_indian_words(100), "One Hundred");
        assert_eq!(number_to_indian_words(999), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn test_number_to_indian_words_groups() {
        assert_eq!(number_to_indian_words(1_000), "One Thousand");
        assert_eq!(number_to_indian_words(1_00_000), "One Lakh");
        assert_eq!(number_to_indian_words(1_00_00_000), "One Crore");
        assert_eq!(
            number_to_indian_words(1_21_066),
            "One Lakh Twenty One Thousand Sixty Six"
        );
        assert_eq!(
            number_to_indian_words(7_93_658),
            "Seven Lakh Ninety Three Thousand Six Hundred Fifty Eight"
        );
    }

    #[test]
    fn test_number_to_indian_words_skips_zero_groups() {
        assert_eq!(number_to_indian_words(1_00_00_005), "One Crore Five");
        assert_eq!(number_to_indian_words(20_00_010), "Twenty Lakh Ten");
    }

    #[test]
    fn test_number_to_indian_words_large_crore() {
        // crore portion above 99 recurses through the full grouping
        assert_eq!(
            number_to_indian_words(123_45_67_890),
            "One Hundred Twenty Three Crore Forty Five Lakh Sixty Seven Thousand \
             Eight Hundred Ninety"
        );
        assert_eq!(
            number_to_indian_words(123_456_789_012),
            "Twelve Thousand Three Hundred Forty Five Crore Sixty Seven Lakh \
             Eighty Nine Thousand Twelve"
        );
        assert_eq!(
            number_to_indian_words(250 * 1_00_00_000),
            "Two Hundred Fifty Crore"
        );
    }
}
