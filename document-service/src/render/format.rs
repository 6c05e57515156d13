//! Display formatting for amounts on the rendered page.

use rust_decimal::{Decimal, RoundingStrategy};

/// Two decimal places, half away from zero: `34.5` -> `34.50`.
pub fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Euro-prefixed money as printed in the totals block.
pub fn eur(amount: Decimal) -> String {
    format!("EUR {}", money(amount))
}

/// Quantity without trailing zeros: `1.00` -> `1`, `2.50` -> `2.5`.
pub fn quantity(qty: Decimal) -> String {
    qty.normalize().to_string()
}

/// Percentage with two decimals: `23` -> `23.00%`.
pub fn percent(rate: Decimal) -> String {
    format!("{}%", money(rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn money_pads_and_rounds() {
        assert_eq!(money(d("150")), "150.00");
        assert_eq!(money(d("34.5")), "34.50");
        assert_eq!(money(d("2.675")), "2.68");
        assert_eq!(money(d("0.125")), "0.13");
        assert_eq!(money(d("-1.005")), "-1.01");
    }

    #[test]
    fn eur_prefixes_currency() {
        assert_eq!(eur(d("184.5")), "EUR 184.50");
    }

    #[test]
    fn quantity_drops_trailing_zeros() {
        assert_eq!(quantity(d("1.00")), "1");
        assert_eq!(quantity(d("2.50")), "2.5");
        assert_eq!(quantity(d("12")), "12");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(percent(d("23")), "23.00%");
        assert_eq!(percent(d("13.5")), "13.50%");
    }
}
