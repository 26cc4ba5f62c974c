use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// raw calculator inputs as the user has typed them so far
///
/// Values are not guaranteed to satisfy the loan invariants: negative amounts,
/// a down payment above the price and a zero term are all representable so the
/// estimator can clamp them instead of rejecting keystrokes mid-edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanInputs {
    /// asset price
    pub principal_price: Money,
    /// upfront payment, reduces the financed principal
    pub down_payment: Money,
    /// nominal annual rate in percent (6.5 means 6.5% a year)
    pub annual_interest_rate_percent: Decimal,
    /// tenor in whole years
    pub term_years: u32,
}

impl LoanInputs {
    pub fn new(
        principal_price: Money,
        down_payment: Money,
        annual_interest_rate_percent: Decimal,
        term_years: u32,
    ) -> Self {
        Self {
            principal_price,
            down_payment,
            annual_interest_rate_percent,
            term_years,
        }
    }

    /// nominal annual rate as a fraction
    pub fn annual_rate(&self) -> Rate {
        Rate::from_percentage(self.annual_interest_rate_percent)
    }
}

/// derived estimate, recomputed from scratch on every input change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanResult {
    /// price minus down payment, floored at zero
    pub loan_principal: Money,
    pub monthly_interest_rate: Rate,
    pub total_months: u64,
    pub monthly_payment: Money,
    /// monthly payment times the number of months
    pub total_payment: Money,
    /// total payment minus principal, floored at zero
    pub total_interest: Money,
}

impl LoanResult {
    /// result for a loan with nothing to repay
    pub fn empty(monthly_interest_rate: Rate, total_months: u64) -> Self {
        Self {
            loan_principal: Money::ZERO,
            monthly_interest_rate,
            total_months,
            monthly_payment: Money::ZERO,
            total_payment: Money::ZERO,
            total_interest: Money::ZERO,
        }
    }
}

/// form fields a presentation layer feeds into the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    PrincipalPrice,
    DownPayment,
    AnnualInterestRate,
    TermYears,
}
