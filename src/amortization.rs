use crate::errors::{Error, Result};
use crate::types::{
    LoanField, LoanInputs, LoanResult, ValidationReport, MONTHS_PER_YEAR, RATE_RANGE, TERM_RANGE,
};

/// fixed-rate mortgage math and input validation
///
/// every function here is pure: no state is kept between calls, so identical
/// inputs always produce bitwise identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizationEngine;

impl AmortizationEngine {
    /// range check for a single field, non-finite values are never valid
    pub fn validate(field: LoanField, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }

        match field {
            LoanField::Principal => value > 0.0,
            LoanField::AnnualRatePercent => RATE_RANGE.contains(&value),
            LoanField::TermYears => TERM_RANGE.contains(&value),
        }
    }

    /// parse raw form text and range check it
    pub fn validate_raw(field: LoanField, raw: &str) -> bool {
        parse_amount(raw)
            .map(|value| Self::validate(field, value))
            .unwrap_or(false)
    }

    /// validate all three fields of a loan
    pub fn validate_all(inputs: &LoanInputs) -> ValidationReport {
        ValidationReport::from_fn(|field| Self::validate(field, inputs.value(field)))
    }

    /// monthly payment for a fully amortizing fixed-rate loan
    pub fn compute_monthly_payment(
        principal: f64,
        annual_rate_percent: f64,
        term_years: f64,
    ) -> f64 {
        let monthly_rate = annual_rate_percent / 100.0 / MONTHS_PER_YEAR;
        let number_of_payments = term_years * MONTHS_PER_YEAR;

        // annuity formula divides by zero at r = 0
        if monthly_rate == 0.0 {
            return principal / number_of_payments;
        }

        // payment = P * r * (1 + r)^n / ((1 + r)^n - 1), with growth = (1 + r)^n - 1
        // taken through ln_1p/exp_m1 so tiny rates are not lost against 1.0
        let growth = (number_of_payments * monthly_rate.ln_1p()).exp_m1();
        let annuity = principal * monthly_rate * (growth + 1.0) / growth;

        // never below straight-line repayment, even after rounding
        annuity.max(principal / number_of_payments)
    }

    /// monthly payment plus totals; inputs must already be validated
    pub fn compute_summary(
        principal: f64,
        annual_rate_percent: f64,
        term_years: f64,
    ) -> LoanResult {
        let monthly_payment =
            Self::compute_monthly_payment(principal, annual_rate_percent, term_years);
        let total_payment = monthly_payment * term_years * MONTHS_PER_YEAR;
        let total_interest = total_payment - principal;

        LoanResult {
            monthly_payment,
            total_payment,
            total_interest,
        }
    }

    /// validate then compute, nothing is computed if any field is invalid
    pub fn calculate(inputs: &LoanInputs) -> Result<LoanResult> {
        let report = Self::validate_all(inputs);
        if !report.all_valid() {
            return Err(Error::InvalidInput {
                fields: report.invalid_fields(),
            });
        }

        Ok(Self::compute_summary(
            inputs.principal,
            inputs.annual_rate_percent,
            inputs.term_years,
        ))
    }
}

/// parse a form value, surrounding whitespace is ignored
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
