use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::NumberFormat;
use crate::decimal::Money;

/// format an amount for display, e.g. `Rp 3.484.429`
pub fn format_money(amount: Money, format: &NumberFormat) -> String {
    let rounded = amount
        .as_decimal()
        .round_dp_with_strategy(format.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.*}", format.fraction_digits as usize, rounded.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if !format.currency_symbol.is_empty() {
        out.push_str(&format.currency_symbol);
        out.push(' ');
    }
    out.push_str(&group_thousands(integer, format.thousands_separator));
    if let Some(fraction) = fraction {
        out.push(format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// format a percentage for display, e.g. `6,5%`
pub fn format_rate(percent: Decimal, format: &NumberFormat) -> String {
    let text = percent.normalize().to_string();
    format!("{}%", text.replace('.', &format.decimal_separator.to_string()))
}

fn group_thousands(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
