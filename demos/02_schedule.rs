/// schedule - month-by-month breakdown of an estimate
use kpr_estimator_rs::chrono::NaiveDate;
use kpr_estimator_rs::{format_money, Decimal, LoanCalculator, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== amortization schedule example ===\n");

    let calculator = LoanCalculator::builder()
        .principal_price(Money::from_major(350_000_000))
        .down_payment(Money::from_major(70_000_000))
        .annual_interest_rate_percent(Decimal::new(75, 1))
        .term_years(5)
        .build()?;

    let format = &calculator.config().number_format;
    let start = NaiveDate::from_ymd_opt(2025, 1, 15).ok_or("invalid start date")?;
    let schedule = calculator.schedule(start)?;

    println!("{:>3}  {:<10}  {:>16}  {:>16}  {:>16}", "#", "date", "interest", "principal", "balance");
    for payment in &schedule.payments {
        println!(
            "{:>3}  {:<10}  {:>16}  {:>16}  {:>16}",
            payment.payment_number,
            payment.payment_date,
            format_money(payment.interest_portion, format),
            format_money(payment.principal_portion, format),
            format_money(payment.ending_balance, format),
        );
    }

    println!("\ntotal interest: {}", format_money(schedule.total_interest, format));
    println!("total payment:  {}", format_money(schedule.total_payment, format));

    Ok(())
}
