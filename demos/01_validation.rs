/// validation - checking inputs before computing
use mortgage_calculator_rs::{AmortizationEngine, Error, LoanField, LoanInputs};

fn main() {
    println!("=== validation example ===\n");

    // single fields, straight from form text
    for (field, raw) in [
        (LoanField::Principal, "0"),
        (LoanField::Principal, "0.01"),
        (LoanField::AnnualRatePercent, "100.01"),
        (LoanField::TermYears, "fifty"),
    ] {
        let valid = AmortizationEngine::validate_raw(field, raw);
        println!("{:<13} {:>8} -> {}", field.form_id(), raw, if valid { "ok" } else { "invalid" });
    }

    // a whole loan, every bad field is reported
    let inputs = LoanInputs::new(-5.0, 7.5, 60.0);
    match AmortizationEngine::calculate(&inputs) {
        Ok(result) => println!("\nmonthly payment: {:.2}", result.monthly_payment),
        Err(Error::InvalidInput { fields }) => {
            println!("\nrejected:");
            for field in fields {
                println!("  {} {}", field.label(), field.constraint());
            }
        }
        Err(e) => println!("\nunexpected error: {e}"),
    }
}
