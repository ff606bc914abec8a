//! Value formatting shared by the table views.

use rust_decimal::Decimal;

/// Currency amount as shown in the summary panel, e.g. `R 1234.50`.
#[must_use]
pub fn money(amount: Decimal) -> String {
    format!("R {:.2}", amount.round_dp(2))
}

/// Truncate `text` to `max` characters, marking the cut with an ellipsis.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(money(dec!(25)), "R 25.00");
        assert_eq!(money(dec!(1234.5)), "R 1234.50");
        assert_eq!(money(dec!(0.125)), "R 0.12");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Apple", 10), "Apple");
    }

    #[test]
    fn truncate_cuts_long_text() {
        assert_eq!(truncate("Strawberries", 6), "Straw…");
    }
}
