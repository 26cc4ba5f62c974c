/// json state - serialization for debugging and front-end handoff
use kpr_estimator_rs::{EstimatorConfig, InputField, LoanCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json state serialization ===\n");

    let config = EstimatorConfig::from_json(&EstimatorConfig::kpr().to_json()?)?;
    let mut calculator = LoanCalculator::with_config(config);

    println!("stage 1: seeded");
    println!("---------------");
    println!("{}\n", calculator.json());

    calculator.update(InputField::DownPayment, "Rp 750.000.000");
    println!("stage 2: down payment above price");
    println!("----------------------------------");
    println!("{}\n", calculator.json());

    calculator.update(InputField::AnnualInterestRate, "0");
    calculator.update(InputField::DownPayment, "Rp 20.000.000");
    println!("stage 3: zero-interest promo");
    println!("----------------------------");
    println!("{}", calculator.json());

    Ok(())
}
