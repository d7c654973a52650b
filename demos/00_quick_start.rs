/// quick start - minimal example to get started
use mortgage_calculator_rs::AmortizationEngine;

fn main() {
    // $200,000 over 30 years at 6%
    let result = AmortizationEngine::compute_summary(200_000.0, 6.0, 30.0);

    println!("monthly payment: {:.2}", result.monthly_payment);
    println!("total payment:   {:.2}", result.total_payment);
    println!("total interest:  {:.2}", result.total_interest);
}
