use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("price must be greater than zero: {price}")]
    NonPositivePrice {
        price: Money,
    },

    #[error("down payment must not be negative: {amount}")]
    NegativeDownPayment {
        amount: Money,
    },

    #[error("down payment must not exceed price: down payment {down_payment}, price {price}")]
    DownPaymentExceedsPrice {
        price: Money,
        down_payment: Money,
    },

    #[error("interest rate must be greater than zero: {rate}%")]
    NonPositiveInterestRate {
        rate: Decimal,
    },

    #[error("term must be at least one year: {years}")]
    TermTooShort {
        years: u32,
    },

    #[error("schedule too long: {months} months exceeds maximum {max}")]
    ScheduleTooLong {
        months: u64,
        max: u64,
    },

    #[error("schedule overflow: {field} exceeds the decimal range at payment {payment_number}")]
    ScheduleOverflow {
        field: String,
        payment_number: u32,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
