/// live preview - feeding raw keystrokes into the calculator
use kpr_estimator_rs::{format_money, InputField, LoanCalculator};

fn main() {
    println!("=== live preview example ===\n");

    let mut calculator = LoanCalculator::new();
    let format = calculator.config().number_format.clone();

    // user retypes the down payment one keystroke at a time
    let keystrokes = ["", "R", "Rp 6", "Rp 60", "Rp 600.000.000", "Rp 60.000.000"];

    for text in keystrokes {
        calculator.update(InputField::DownPayment, text);
        let result = calculator.result();

        println!("down payment field: {:?}", text);
        println!("  monthly payment: {}", format_money(result.monthly_payment, &format));
        match calculator.warning() {
            Some(warning) => println!("  warning: {}", warning),
            None => println!("  ready to submit"),
        }
    }
}
