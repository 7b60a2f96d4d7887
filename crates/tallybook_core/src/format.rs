//! Display formatting for amounts and dates.

use chrono::NaiveDate;

use crate::models::Currency;

/// Date format used in form inputs, filter values and JSON.
pub const ISO_DATE: &str = "%Y-%m-%d";

pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// "18 Oct 2026"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Two decimals with thousands separators: 1234.5 -> "1,234.50".
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let len = whole.len();
    let mut out = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    // "-0.00" reads as noise.
    if amount < 0.0 && fixed != "0.00" {
        format!("-{}.{}", out, frac)
    } else {
        format!("{}.{}", out, frac)
    }
}

pub fn format_money(amount: f64, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_get_separators_and_two_decimals() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(200.0), "200.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-4500.0), "-4,500.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn money_and_dates() {
        assert_eq!(format_money(99.9, Currency::USD), "$99.90");
        let d = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(iso_date(d), "2026-10-18");
        assert_eq!(format_date(d), "18 Oct 2026");
    }
}
