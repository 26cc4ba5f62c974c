/// quick start - minimal example to get started
use kpr_estimator_rs::{compute_loan, is_submittable, Decimal, LoanInputs, Money};

fn main() {
    // Rp 500 juta house, Rp 100 juta down payment, 6.5% for 15 years
    let inputs = LoanInputs::new(
        Money::from_major(500_000_000),
        Money::from_major(100_000_000),
        Decimal::new(65, 1),
        15,
    );

    let result = compute_loan(&inputs);

    println!("loan principal:  {}", result.loan_principal.round_dp(0));
    println!("monthly payment: {}", result.monthly_payment.round_dp(0));
    println!("total payment:   {}", result.total_payment.round_dp(0));
    println!("submittable:     {}", is_submittable(&inputs));
}
