//! Pure loan estimate over raw form inputs.
//!
//! `compute_loan` always returns a best-effort preview: out-of-domain inputs are
//! clamped, never rejected. `validate` and `is_submittable` answer the separate
//! question of whether the inputs may be treated as final.

#[cfg(test)]
mod proptests;

use log::trace;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{EstimatorError, Result};
use crate::payments::monthly_payment;
use crate::types::{LoanInputs, LoanResult};

const MONTHS_PER_YEAR: u64 = 12;

/// inputs pulled into the domain where the formula is defined
///
/// Negative amounts and rates become zero, a term below one year becomes one
/// year. A down payment above the price is kept: the principal floors at zero.
pub fn clamp_inputs(inputs: &LoanInputs) -> LoanInputs {
    let clamped = LoanInputs {
        principal_price: inputs.principal_price.non_negative(),
        down_payment: inputs.down_payment.non_negative(),
        annual_interest_rate_percent: inputs.annual_interest_rate_percent.max(Decimal::ZERO),
        term_years: inputs.term_years.max(1),
    };
    if clamped != *inputs {
        trace!("clamped loan inputs {:?} to {:?}", inputs, clamped);
    }
    clamped
}

/// compute the fixed monthly installment and totals for `inputs`
pub fn compute_loan(inputs: &LoanInputs) -> LoanResult {
    let inputs = clamp_inputs(inputs);

    let loan_principal = inputs.principal_price.saturating_sub(inputs.down_payment).non_negative();
    let monthly_rate: Rate = inputs.annual_rate().monthly_rate();
    let total_months = u64::from(inputs.term_years) * MONTHS_PER_YEAR;

    if !loan_principal.is_positive() {
        return LoanResult::empty(monthly_rate, total_months);
    }

    let payment = monthly_payment(loan_principal, monthly_rate, total_months);
    let total_payment = payment.saturating_mul(Decimal::from(total_months));
    let total_interest = total_payment.saturating_sub(loan_principal).non_negative();

    LoanResult {
        loan_principal,
        monthly_interest_rate: monthly_rate,
        total_months,
        monthly_payment: payment,
        total_payment,
        total_interest,
    }
}

/// first rule the raw inputs break, if any
pub fn validate(inputs: &LoanInputs) -> Result<()> {
    if !inputs.principal_price.is_positive() {
        return Err(EstimatorError::NonPositivePrice {
            price: inputs.principal_price,
        });
    }
    if inputs.down_payment.is_negative() {
        return Err(EstimatorError::NegativeDownPayment {
            amount: inputs.down_payment,
        });
    }
    if inputs.down_payment > inputs.principal_price {
        return Err(EstimatorError::DownPaymentExceedsPrice {
            price: inputs.principal_price,
            down_payment: inputs.down_payment,
        });
    }
    if inputs.annual_interest_rate_percent <= Decimal::ZERO {
        return Err(EstimatorError::NonPositiveInterestRate {
            rate: inputs.annual_interest_rate_percent,
        });
    }
    if inputs.term_years < 1 {
        return Err(EstimatorError::TermTooShort {
            years: inputs.term_years,
        });
    }
    Ok(())
}

/// whether the estimate may be treated as final
pub fn is_submittable(inputs: &LoanInputs) -> bool {
    validate(inputs).is_ok()
}

/// amount financed for given inputs, without computing the installment
pub fn loan_principal(inputs: &LoanInputs) -> Money {
    let inputs = clamp_inputs(inputs);
    inputs.principal_price.saturating_sub(inputs.down_payment).non_negative()
}
