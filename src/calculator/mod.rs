pub mod serialization;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::config::EstimatorConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::estimator;
use crate::input::{parse_amount, parse_percent, parse_years};
use crate::payments::AmortizationSchedule;
use crate::types::{InputField, LoanInputs, LoanResult};

pub use serialization::CalculatorView;

/// live loan calculator backing a form
///
/// Holds the inputs as typed so far. Every read of `result` recomputes the
/// estimate from scratch.
#[derive(Debug, Clone)]
pub struct LoanCalculator {
    config: EstimatorConfig,
    inputs: LoanInputs,
}

impl LoanCalculator {
    /// calculator seeded with the default KPR preset
    pub fn new() -> Self {
        Self::with_config(EstimatorConfig::default())
    }

    /// calculator seeded from `config`
    pub fn with_config(config: EstimatorConfig) -> Self {
        let inputs = config.seed;
        Self { config, inputs }
    }

    /// builder for creating calculators
    pub fn builder() -> LoanCalculatorBuilder {
        LoanCalculatorBuilder::new()
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn inputs(&self) -> &LoanInputs {
        &self.inputs
    }

    /// apply one keystroke's worth of text to a field
    pub fn update(&mut self, field: InputField, text: &str) {
        let format = &self.config.number_format;
        match field {
            InputField::PrincipalPrice => {
                self.inputs.principal_price = parse_amount(text, format);
            }
            InputField::DownPayment => {
                self.inputs.down_payment = parse_amount(text, format);
            }
            InputField::AnnualInterestRate => {
                self.inputs.annual_interest_rate_percent = parse_percent(text);
            }
            InputField::TermYears => {
                self.inputs.term_years = parse_years(text);
            }
        }
        debug!("{:?} set from {:?}, inputs now {:?}", field, text, self.inputs);
    }

    pub fn set_principal_price(&mut self, price: Money) {
        self.inputs.principal_price = price;
    }

    pub fn set_down_payment(&mut self, down_payment: Money) {
        self.inputs.down_payment = down_payment;
    }

    pub fn set_annual_interest_rate_percent(&mut self, percent: Decimal) {
        self.inputs.annual_interest_rate_percent = percent;
    }

    pub fn set_term_years(&mut self, years: u32) {
        self.inputs.term_years = years;
    }

    /// replace all inputs at once
    pub fn set_inputs(&mut self, inputs: LoanInputs) {
        self.inputs = inputs;
    }

    /// back to the configured seed values
    pub fn reset(&mut self) {
        self.inputs = self.config.seed;
    }

    /// current best-effort estimate
    pub fn result(&self) -> LoanResult {
        estimator::compute_loan(&self.inputs)
    }

    pub fn is_submittable(&self) -> bool {
        estimator::is_submittable(&self.inputs)
    }

    /// message to show next to the form while inputs are not final
    pub fn warning(&self) -> Option<String> {
        estimator::validate(&self.inputs).err().map(|e| e.to_string())
    }

    /// month-by-month schedule, first installment one month after `start_date`
    pub fn schedule(&self, start_date: NaiveDate) -> Result<AmortizationSchedule> {
        AmortizationSchedule::generate(
            &self.result(),
            start_date,
            self.config.max_schedule_months(),
        )
    }

    /// get json representation of current state
    pub fn to_json_pretty(&self) -> String {
        CalculatorView::from_calculator(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

impl Default for LoanCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// builder for loan calculators
pub struct LoanCalculatorBuilder {
    config: Option<EstimatorConfig>,
    principal_price: Option<Money>,
    down_payment: Option<Money>,
    annual_interest_rate_percent: Option<Decimal>,
    term_years: Option<u32>,
}

impl LoanCalculatorBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            principal_price: None,
            down_payment: None,
            annual_interest_rate_percent: None,
            term_years: None,
        }
    }

    pub fn config(mut self, config: EstimatorConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn principal_price(mut self, price: Money) -> Self {
        self.principal_price = Some(price);
        self
    }

    pub fn down_payment(mut self, down_payment: Money) -> Self {
        self.down_payment = Some(down_payment);
        self
    }

    pub fn annual_interest_rate_percent(mut self, percent: Decimal) -> Self {
        self.annual_interest_rate_percent = Some(percent);
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    /// build, falling back to the config seed for any unset field
    pub fn build(self) -> Result<LoanCalculator> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let seed = config.seed;
        let inputs = LoanInputs {
            principal_price: self.principal_price.unwrap_or(seed.principal_price),
            down_payment: self.down_payment.unwrap_or(seed.down_payment),
            annual_interest_rate_percent: self
                .annual_interest_rate_percent
                .unwrap_or(seed.annual_interest_rate_percent),
            term_years: self.term_years.unwrap_or(seed.term_years),
        };

        Ok(LoanCalculator { config, inputs })
    }
}

impl Default for LoanCalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumberFormat;
    use crate::errors::EstimatorError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_seeded_on_creation() {
        let calculator = LoanCalculator::new();
        assert_eq!(*calculator.inputs(), EstimatorConfig::kpr().seed);
        assert!(calculator.is_submittable());
        assert!(calculator.warning().is_none());
        assert_eq!(calculator.result().loan_principal, Money::from_major(400_000_000));
    }

    #[test]
    fn test_keystrokes_update_preview() {
        let mut calculator = LoanCalculator::new();

        // user clears the down payment field and types a larger amount
        calculator.update(InputField::DownPayment, "");
        assert_eq!(calculator.result().loan_principal, Money::from_major(500_000_000));

        calculator.update(InputField::DownPayment, "Rp 600.000.000");
        let result = calculator.result();
        assert_eq!(result.loan_principal, Money::ZERO);
        assert_eq!(result.monthly_payment, Money::ZERO);
        assert!(!calculator.is_submittable());
        assert_eq!(
            calculator.warning().as_deref(),
            Some("down payment must not exceed price: down payment 600000000, price 500000000")
        );

        calculator.update(InputField::DownPayment, "Rp 100.000.000");
        assert!(calculator.is_submittable());
    }

    #[test]
    fn test_rate_and_term_fields() {
        let mut calculator = LoanCalculator::new();
        calculator.update(InputField::AnnualInterestRate, "0");
        calculator.update(InputField::TermYears, "10");
        calculator.update(InputField::PrincipalPrice, "Rp 220.000.000");

        let result = calculator.result();
        assert_eq!(result.loan_principal, Money::from_major(120_000_000));
        assert_eq!(result.monthly_payment, Money::from_major(1_000_000));
        assert!(!calculator.is_submittable());

        calculator.update(InputField::TermYears, "");
        assert_eq!(calculator.inputs().term_years, 0);
        assert_eq!(calculator.result().total_months, 12);
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut calculator = LoanCalculator::new();
        calculator.set_principal_price(Money::from_major(1));
        calculator.set_term_years(3);
        calculator.reset();
        assert_eq!(*calculator.inputs(), calculator.config().seed);
    }

    #[test]
    fn test_builder_overrides_seed() {
        let calculator = LoanCalculator::builder()
            .principal_price(Money::from_major(300_000_000))
            .annual_interest_rate_percent(dec!(7.5))
            .build()
            .unwrap();

        let inputs = calculator.inputs();
        assert_eq!(inputs.principal_price, Money::from_major(300_000_000));
        assert_eq!(inputs.annual_interest_rate_percent, dec!(7.5));
        // untouched fields come from the preset
        assert_eq!(inputs.down_payment, Money::from_major(100_000_000));
        assert_eq!(inputs.term_years, 15);
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let mut config = EstimatorConfig::kpr();
        config.max_schedule_years = 0;
        let err = LoanCalculator::builder().config(config).build().unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_schedule_respects_config_bound() {
        let mut config = EstimatorConfig::kpr();
        config.max_schedule_years = 10;
        let calculator = LoanCalculator::with_config(config);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        assert!(matches!(
            calculator.schedule(start),
            Err(EstimatorError::ScheduleTooLong { months: 180, max: 120 })
        ));

        let calculator = LoanCalculator::new();
        let schedule = calculator.schedule(start).unwrap();
        assert_eq!(schedule.payments.len(), 180);
    }

    #[test]
    fn test_schedule_beyond_decimal_range_is_an_error() {
        let mut calculator = LoanCalculator::new();
        calculator.update(InputField::PrincipalPrice, "Rp 10.000.000.000.000.000.000.000.000.000");
        calculator.update(InputField::DownPayment, "0");
        calculator.update(InputField::AnnualInterestRate, "20");
        calculator.update(InputField::TermYears, "50");
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        assert!(matches!(
            calculator.schedule(start),
            Err(EstimatorError::ScheduleOverflow { .. })
        ));

        calculator.update(InputField::AnnualInterestRate, "2400");
        calculator.update(InputField::TermYears, "1");
        assert!(matches!(
            calculator.schedule(start),
            Err(EstimatorError::ScheduleOverflow { .. })
        ));
    }

    #[test]
    fn test_json_view() {
        let calculator = LoanCalculator::new();
        let json: serde_json::Value = serde_json::from_str(&calculator.json()).unwrap();

        assert_eq!(json["submittable"], true);
        assert!(json["warning"].is_null());
        assert_eq!(json["inputs"]["term_years"], 15);
        assert_eq!(json["display"]["principal_price"], "Rp 500.000.000");
        assert_eq!(json["display"]["interest_rate"], "6,5%");
        assert_eq!(json["display"]["monthly_payment"], "Rp 3.484.429");
        assert_eq!(json["result"]["total_months"], 180);
    }

    #[test]
    fn test_dollar_locale() {
        let config = EstimatorConfig {
            number_format: NumberFormat::usd(),
            ..EstimatorConfig::kpr()
        };
        let mut calculator = LoanCalculator::with_config(config);
        calculator.update(InputField::PrincipalPrice, "$250,000.00");
        calculator.update(InputField::DownPayment, "$50,000");
        assert_eq!(calculator.result().loan_principal, Money::from_major(200_000));
    }
}
