//! Property-based tests for the estimator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{compute_loan, is_submittable};
use crate::decimal::Money;
use crate::types::LoanInputs;

/// rate in hundredths of a percent, 0.01% ..= 30%
fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (1u32..=3_000).prop_map(|bps| Decimal::new(i64::from(bps), 2))
}

fn amount_strategy() -> impl Strategy<Value = Money> {
    (1_000_000i64..=10_000_000_000).prop_map(Money::from_major)
}

proptest! {
    #[test]
    fn test_zero_interest_is_linear(principal in amount_strategy(), years in 1u32..=40) {
        let result = compute_loan(&LoanInputs::new(principal, Money::ZERO, Decimal::ZERO, years));
        let months = Decimal::from(years * 12);

        let expected = principal.as_decimal() / months;
        prop_assert!((result.monthly_payment.as_decimal() - expected).abs() <= Decimal::new(1, 8));
        // 8dp rounding of the installment, times the number of months
        prop_assert!((result.total_payment - principal).abs().as_decimal() <= months * Decimal::new(1, 8));
    }

    #[test]
    fn test_results_are_never_negative(
        price in -10_000_000_000i64..=10_000_000_000,
        down in -10_000_000_000i64..=10_000_000_000,
        rate in -3_000i64..=3_000,
        years in 0u32..=60,
    ) {
        let inputs = LoanInputs::new(
            Money::from_major(price),
            Money::from_major(down),
            Decimal::new(rate, 2),
            years,
        );
        let result = compute_loan(&inputs);
        prop_assert!(!result.monthly_payment.is_negative());
        prop_assert!(!result.total_payment.is_negative());
        prop_assert!(!result.total_interest.is_negative());
        prop_assert!(!result.loan_principal.is_negative());
    }

    #[test]
    fn test_installments_fully_amortize(
        principal in amount_strategy(),
        rate in rate_strategy(),
        years in 1u32..=35,
    ) {
        let result = compute_loan(&LoanInputs::new(principal, Money::ZERO, rate, years));
        let r = result.monthly_interest_rate.as_decimal();
        let payment = result.monthly_payment.as_decimal();

        let mut balance = principal.as_decimal();
        for _ in 0..result.total_months {
            balance = balance * (Decimal::ONE + r) - payment;
        }
        let tolerance = principal.as_decimal() * Decimal::new(1, 6);
        prop_assert!(balance.abs() <= tolerance, "residual {} on {}", balance, principal);
    }

    #[test]
    fn test_payment_rises_with_rate(
        principal in amount_strategy(),
        rate in rate_strategy(),
        years in 1u32..=35,
    ) {
        let lower = compute_loan(&LoanInputs::new(principal, Money::ZERO, rate, years));
        let higher = compute_loan(&LoanInputs::new(principal, Money::ZERO, rate + Decimal::ONE, years));
        prop_assert!(higher.monthly_payment > lower.monthly_payment);

        let zero = compute_loan(&LoanInputs::new(principal, Money::ZERO, Decimal::ZERO, years));
        prop_assert!(lower.monthly_payment > zero.monthly_payment);
    }

    #[test]
    fn test_payment_falls_with_term(
        principal in amount_strategy(),
        rate in (0u32..=3_000).prop_map(|bps| Decimal::new(i64::from(bps), 2)),
        years in 1u32..=35,
    ) {
        let shorter = compute_loan(&LoanInputs::new(principal, Money::ZERO, rate, years));
        let longer = compute_loan(&LoanInputs::new(principal, Money::ZERO, rate, years + 1));
        prop_assert!(longer.monthly_payment < shorter.monthly_payment);
    }

    #[test]
    fn test_estimate_is_deterministic(
        price in 0i64..=10_000_000_000,
        down in 0i64..=10_000_000_000,
        rate in rate_strategy(),
        years in 0u32..=60,
    ) {
        let inputs = LoanInputs::new(Money::from_major(price), Money::from_major(down), rate, years);
        prop_assert_eq!(compute_loan(&inputs), compute_loan(&inputs));
        prop_assert_eq!(is_submittable(&inputs), is_submittable(&inputs));
    }

    #[test]
    fn test_submittable_implies_positive_estimate(
        price in 1i64..=10_000_000_000,
        down_share in 0u32..100,
        rate in rate_strategy(),
        years in 1u32..=35,
    ) {
        let down = price * i64::from(down_share) / 100;
        let inputs = LoanInputs::new(Money::from_major(price), Money::from_major(down), rate, years);
        prop_assert!(is_submittable(&inputs));
        let result = compute_loan(&inputs);
        prop_assert!(result.monthly_payment.is_positive());
        prop_assert!(result.total_payment >= result.loan_principal);
    }
}
