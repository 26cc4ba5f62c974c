//! Text-field parsing for calculator inputs.
//!
//! Form fields hold whatever the user has typed so far, including currency
//! symbols and grouping. Parsing never fails: anything without digits maps to
//! zero and the estimator clamps from there.

use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;

use crate::config::NumberFormat;
use crate::decimal::Money;
use crate::types::LoanInputs;

/// parse a currency-formatted amount such as `Rp 500.000.000` or `$1,250.50`
///
/// Digits and the first decimal separator are kept, a minus before the first
/// digit makes the amount negative, everything else is ignored.
pub fn parse_amount(text: &str, format: &NumberFormat) -> Money {
    let mut normalized = String::with_capacity(text.len());
    let mut seen_decimal = false;

    for c in text.chars() {
        if c.is_ascii_digit() {
            normalized.push(c);
        } else if c == format.decimal_separator && !seen_decimal {
            normalized.push('.');
            seen_decimal = true;
        }
    }

    match to_decimal(text, &normalized) {
        Some(value) => Money::from_decimal(value),
        None => Money::ZERO,
    }
}

/// parse an interest rate such as `6,5%` or `6.5`
///
/// Rates are never grouped, so either `.` or `,` is read as the decimal point.
/// More than one separator is not a number.
pub fn parse_percent(text: &str) -> Decimal {
    let mut normalized = String::with_capacity(text.len());
    let mut separators = 0;

    for c in text.chars() {
        match c {
            '0'..='9' => normalized.push(c),
            '.' | ',' => {
                separators += 1;
                normalized.push('.');
            }
            _ => {}
        }
    }

    if separators > 1 {
        debug!("rate field {:?} has {} separators, treating as 0", text, separators);
        return Decimal::ZERO;
    }

    to_decimal(text, &normalized).unwrap_or(Decimal::ZERO)
}

/// parse a whole number of years such as `15` or `15 tahun`
///
/// Only the integer part counts. Negative input is not a term and maps to zero,
/// oversized input saturates.
pub fn parse_years(text: &str) -> u32 {
    if is_negative(text) {
        debug!("term field {:?} is negative, treating as 0", text);
        return 0;
    }

    let digits: String = text
        .chars()
        .take_while(|c| *c != '.' && *c != ',')
        .filter(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        if !text.trim().is_empty() {
            debug!("term field {:?} is not numeric, treating as 0", text);
        }
        return 0;
    }

    match digits.parse::<u64>() {
        Ok(years) => u32::try_from(years).unwrap_or(u32::MAX),
        // only digits remain, so the sole failure is overflow
        Err(_) => u32::MAX,
    }
}

impl LoanInputs {
    /// build inputs from the four raw form fields
    pub fn from_text(
        principal_price: &str,
        down_payment: &str,
        annual_interest_rate_percent: &str,
        term_years: &str,
        format: &NumberFormat,
    ) -> Self {
        Self {
            principal_price: parse_amount(principal_price, format),
            down_payment: parse_amount(down_payment, format),
            annual_interest_rate_percent: parse_percent(annual_interest_rate_percent),
            term_years: parse_years(term_years),
        }
    }
}

/// minus sign appearing before the first digit
fn is_negative(text: &str) -> bool {
    text.chars()
        .take_while(|c| !c.is_ascii_digit())
        .any(|c| c == '-')
}

fn to_decimal(raw: &str, normalized: &str) -> Option<Decimal> {
    let digits = normalized.trim_end_matches('.');
    if !digits.chars().any(|c| c.is_ascii_digit()) {
        if !raw.trim().is_empty() {
            debug!("field {:?} is not numeric, treating as 0", raw);
        }
        return None;
    }

    let padded;
    let digits = if digits.starts_with('.') {
        padded = format!("0{}", digits);
        padded.as_str()
    } else {
        digits
    };

    match Decimal::from_str(digits) {
        Ok(value) if is_negative(raw) => Some(-value),
        Ok(value) => Some(value),
        Err(e) => {
            debug!("field {:?} is out of range ({}), treating as 0", raw, e);
            None
        }
    }
}
