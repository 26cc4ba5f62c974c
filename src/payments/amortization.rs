use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{EstimatorError, Result};
use crate::types::LoanResult;

/// fixed monthly installment that fully repays `principal` over `months`
///
/// Uses the annuity formula `P * r / (1 - (1 + r)^-n)`, which is the usual
/// `P * r * (1 + r)^n / ((1 + r)^n - 1)` rearranged so the large compound
/// factor only ever appears as a divisor. When `(1 + r)^n` is too large for a
/// decimal the installment is the limit `P * r`. A zero rate falls back to a
/// straight division of principal over the term.
pub fn monthly_payment(principal: Money, monthly_rate: Rate, months: u64) -> Money {
    if months == 0 || !principal.is_positive() {
        return Money::ZERO;
    }

    let r = monthly_rate.as_decimal();
    if r <= Decimal::ZERO {
        return straight_line(principal, months);
    }

    let factor = match (Decimal::ONE + r).checked_powu(months) {
        Some(compound) => {
            let discount = Decimal::ONE - Decimal::ONE / compound;
            // rate below decimal resolution, (1 + r) rounded to one
            if discount <= Decimal::ZERO {
                return straight_line(principal, months);
            }
            match r.checked_div(discount) {
                Some(factor) => factor,
                None => return straight_line(principal, months),
            }
        }
        None => r,
    };

    principal.saturating_mul(factor)
}

fn straight_line(principal: Money, months: u64) -> Money {
    principal / Decimal::from(months)
}

/// scheduled payment in amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub payment_date: NaiveDate,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// month-by-month breakdown of an estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub monthly_rate: Rate,
    pub term_months: u32,
    pub start_date: NaiveDate,
    pub payments: Vec<ScheduledPayment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// generate payment schedule for an estimate
    ///
    /// The first installment falls one month after `start_date`. The final row
    /// absorbs rounding so the loan closes at exactly zero. A loan with nothing
    /// to repay yields an empty schedule.
    pub fn generate(result: &LoanResult, start_date: NaiveDate, max_months: u64) -> Result<Self> {
        if result.total_months > max_months {
            return Err(EstimatorError::ScheduleTooLong {
                months: result.total_months,
                max: max_months,
            });
        }
        let term_months = u32::try_from(result.total_months).map_err(|_| {
            EstimatorError::ScheduleTooLong {
                months: result.total_months,
                max: u64::from(u32::MAX),
            }
        })?;

        let principal = result.loan_principal;
        let rate = result.monthly_interest_rate.as_decimal();
        let installment = result.monthly_payment;

        let mut payments = Vec::with_capacity(term_months as usize);
        if principal.is_positive() && installment.is_positive() {
            let mut balance = principal;
            let mut cumulative_interest = Money::ZERO;
            let mut cumulative_principal = Money::ZERO;

            for i in 1..=term_months {
                let payment_date = add_months(start_date, i)?;
                let interest_portion = balance
                    .checked_mul(rate)
                    .ok_or_else(|| overflow("interest", i))?;

                let (payment_amount, principal_portion) = if i == term_months {
                    // final installment settles whatever rounding left behind
                    let settlement = balance
                        .checked_add(interest_portion)
                        .ok_or_else(|| overflow("final payment", i))?;
                    (settlement, balance)
                } else {
                    let principal_portion = (installment - interest_portion).min(balance);
                    (installment, principal_portion)
                };

                cumulative_interest = cumulative_interest
                    .checked_add(interest_portion)
                    .ok_or_else(|| overflow("cumulative interest", i))?;
                cumulative_principal = cumulative_principal
                    .checked_add(principal_portion)
                    .ok_or_else(|| overflow("cumulative principal", i))?;

                let ending_balance = (balance - principal_portion).non_negative();

                payments.push(ScheduledPayment {
                    payment_number: i,
                    payment_date,
                    beginning_balance: balance,
                    payment_amount,
                    principal_portion,
                    interest_portion,
                    ending_balance,
                    cumulative_interest,
                    cumulative_principal,
                });

                balance = ending_balance;
            }
        }

        // cumulative interest already passed the range check
        let total_interest = payments
            .last()
            .map(|p| p.cumulative_interest)
            .unwrap_or(Money::ZERO);

        let total_payment = payments
            .iter()
            .try_fold(Money::ZERO, |acc, p| {
                acc.checked_add(p.payment_amount)
                    .ok_or_else(|| overflow("total payment", p.payment_number))
            })?;

        Ok(Self {
            principal,
            monthly_rate: result.monthly_interest_rate,
            term_months,
            start_date,
            payments,
            total_interest,
            total_payment,
        })
    }

    /// get payment for specific period (1-based)
    pub fn get_payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        let index = payment_number.checked_sub(1)?;
        self.payments.get(index as usize)
    }

    /// get remaining balance after payment
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        self.get_payment(payment_number)
            .map(|p| p.ending_balance)
            .unwrap_or(self.principal)
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

fn overflow(field: &str, payment_number: u32) -> EstimatorError {
    EstimatorError::ScheduleOverflow {
        field: field.to_string(),
        payment_number,
    }
}

/// add calendar months, clamping to the last day of shorter months
fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| EstimatorError::InvalidDate {
            message: format!("{} plus {} months is out of range", date, months),
        })
}
