pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod estimator;
pub mod format;
pub mod input;
pub mod payments;
pub mod types;

// re-export key types
pub use calculator::{CalculatorView, LoanCalculator, LoanCalculatorBuilder};
pub use config::{EstimatorConfig, NumberFormat};
pub use decimal::{Money, Rate};
pub use errors::{EstimatorError, Result};
pub use estimator::{clamp_inputs, compute_loan, is_submittable, validate};
pub use format::{format_money, format_rate};
pub use input::{parse_amount, parse_percent, parse_years};
pub use payments::{monthly_payment, AmortizationSchedule, ScheduledPayment};
pub use types::{InputField, LoanInputs, LoanResult};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
