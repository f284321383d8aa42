//! EUR price display.
//!
//! The shop is French-only, so prices render the way
//! `Intl.NumberFormat('fr-FR', { style: 'currency', currency: 'EUR' })`
//! does: comma decimal separator, narrow no-break space (U+202F) between
//! thousand groups and before the € sign, always two decimal places.

use rust_decimal::Decimal;

/// Narrow no-break space used by the fr-FR locale.
const NNBSP: char = '\u{202f}';

/// Format a decimal amount as a French EUR price string.
///
/// ```
/// use cabella_core::format_eur;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_eur(Decimal::new(25000, 2)), "250,00\u{202f}€");
/// assert_eq!(format_eur(Decimal::new(123450, 2)), "1\u{202f}234,50\u{202f}€");
/// ```
#[must_use]
pub fn format_eur(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let plain = rounded.abs().to_string();

    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_owned(), f.to_owned()),
        None => (plain, String::new()),
    };
    let mut cents = frac_part;
    while cents.len() < 2 {
        cents.push('0');
    }

    // Group integer digits in threes from the right.
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(NNBSP);
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{cents}{NNBSP}€")
}
