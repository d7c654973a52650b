/// chart lifecycle - each calculation replaces the previous chart
use mortgage_calculator_rs::{format_currency, LoanForm, MortgageCalculator, TextPieRenderer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== chart lifecycle example ===\n");

    let mut calculator = MortgageCalculator::new(TextPieRenderer::new(30));

    for form in [
        LoanForm::new("350000", "6.5", "30"),
        LoanForm::new("350000", "4.25", "15"),
        LoanForm::new("350000", "0", "15"),
    ] {
        let view = calculator.calculate(&form)?;
        println!(
            "{} at {}% for {} years: {} / month, {} interest",
            format_currency(view.inputs.principal),
            form.interest_rate,
            form.loan_term,
            view.monthly_payment,
            view.total_interest
        );
        if let Some(chart) = calculator.chart() {
            println!("chart #{}\n{chart}\n", chart.id());
        }
    }

    // invalid input leaves the last chart in place
    let err = calculator.calculate(&LoanForm::new("350000", "4", "0")).unwrap_err();
    println!("rejected: {err}");
    println!("still showing chart #{}", calculator.chart().map(|c| c.id()).unwrap_or(0));

    Ok(())
}
