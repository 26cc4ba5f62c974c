/// serialization support for the calculator
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::LoanCalculator;
use crate::decimal::{Money, Rate};
use crate::format::{format_money, format_rate};

/// serializable view of a calculator's current state
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculatorView {
    pub inputs: InputsView,
    pub result: ResultView,
    pub display: DisplayView,
    pub submittable: bool,
    pub warning: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InputsView {
    pub principal_price: Money,
    pub down_payment: Money,
    pub annual_interest_rate_percent: Decimal,
    pub term_years: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResultView {
    pub loan_principal: Money,
    pub monthly_interest_rate: Rate,
    pub total_months: u64,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

/// locale-formatted strings ready to render
#[derive(Debug, Serialize, Deserialize)]
pub struct DisplayView {
    pub principal_price: String,
    pub down_payment: String,
    pub interest_rate: String,
    pub loan_principal: String,
    pub monthly_payment: String,
    pub total_payment: String,
    pub total_interest: String,
}

impl CalculatorView {
    pub fn from_calculator(calculator: &LoanCalculator) -> Self {
        let inputs = calculator.inputs();
        let result = calculator.result();
        let format = &calculator.config().number_format;

        CalculatorView {
            inputs: InputsView {
                principal_price: inputs.principal_price,
                down_payment: inputs.down_payment,
                annual_interest_rate_percent: inputs.annual_interest_rate_percent,
                term_years: inputs.term_years,
            },
            result: ResultView {
                loan_principal: result.loan_principal,
                monthly_interest_rate: result.monthly_interest_rate,
                total_months: result.total_months,
                monthly_payment: result.monthly_payment,
                total_payment: result.total_payment,
                total_interest: result.total_interest,
            },
            display: DisplayView {
                principal_price: format_money(inputs.principal_price, format),
                down_payment: format_money(inputs.down_payment, format),
                interest_rate: format_rate(inputs.annual_interest_rate_percent, format),
                loan_principal: format_money(result.loan_principal, format),
                monthly_payment: format_money(result.monthly_payment, format),
                total_payment: format_money(result.total_payment, format),
                total_interest: format_money(result.total_interest, format),
            },
            submittable: calculator.is_submittable(),
            warning: calculator.warning(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
