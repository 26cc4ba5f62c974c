use log::debug;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{EstimatorError, Result};
use crate::types::LoanInputs;

/// estimator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// values shown when the calculator is first mounted or reset
    pub seed: LoanInputs,
    pub number_format: NumberFormat,
    /// longest term, in years, for which a full schedule is produced
    #[serde(default = "default_max_schedule_years")]
    pub max_schedule_years: u32,
}

fn default_max_schedule_years() -> u32 {
    50
}

/// how amounts are typed and displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub currency_symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    /// decimal places shown for money
    pub fraction_digits: u32,
}

impl NumberFormat {
    /// Indonesian rupiah: `Rp 3.484.429`
    pub fn idr() -> Self {
        Self {
            currency_symbol: "Rp".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            fraction_digits: 0,
        }
    }

    /// US dollar: `$ 1,234.56`
    pub fn usd() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
            fraction_digits: 2,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.thousands_separator == self.decimal_separator {
            return Err(EstimatorError::InvalidConfiguration {
                message: format!(
                    "thousands and decimal separator are both '{}'",
                    self.decimal_separator
                ),
            });
        }
        for sep in [self.thousands_separator, self.decimal_separator] {
            if sep.is_ascii_digit() || sep == '-' {
                return Err(EstimatorError::InvalidConfiguration {
                    message: format!("'{}' cannot be used as a separator", sep),
                });
            }
        }
        if self.fraction_digits > 8 {
            return Err(EstimatorError::InvalidConfiguration {
                message: format!("at most 8 fraction digits, got {}", self.fraction_digits),
            });
        }
        Ok(())
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::idr()
    }
}

impl EstimatorConfig {
    /// home-ownership loan preset in rupiah
    pub fn kpr() -> Self {
        Self {
            seed: LoanInputs::new(
                Money::from_major(500_000_000),
                Money::from_major(100_000_000),
                dec!(6.5),
                15,
            ),
            number_format: NumberFormat::idr(),
            max_schedule_years: default_max_schedule_years(),
        }
    }

    /// load and validate configuration from json
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EstimatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            "loaded estimator config: seed {:?}, currency {}",
            config.seed, config.number_format.currency_symbol
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.number_format.validate()?;

        if self.seed.principal_price.is_negative() || self.seed.down_payment.is_negative() {
            return Err(EstimatorError::InvalidConfiguration {
                message: "seed amounts must not be negative".to_string(),
            });
        }
        if self.seed.annual_interest_rate_percent.is_sign_negative() {
            return Err(EstimatorError::InvalidConfiguration {
                message: "seed interest rate must not be negative".to_string(),
            });
        }
        if self.max_schedule_years == 0 {
            return Err(EstimatorError::InvalidConfiguration {
                message: "max_schedule_years must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// schedule bound in months
    pub fn max_schedule_months(&self) -> u64 {
        u64::from(self.max_schedule_years) * 12
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::kpr()
    }
}
