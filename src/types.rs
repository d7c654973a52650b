use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// months per year, used to turn years into payment periods
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// valid annual rate range, in percent
pub const RATE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// valid term range, in years
pub const TERM_RANGE: RangeInclusive<f64> = 1.0..=50.0;

/// one of the three loan form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoanField {
    /// borrowed amount, must be strictly positive
    Principal,
    /// annual rate in percent, 0 to 100 inclusive
    AnnualRatePercent,
    /// term in years, 1 to 50 inclusive
    TermYears,
}

impl LoanField {
    pub const ALL: [LoanField; 3] = [
        LoanField::Principal,
        LoanField::AnnualRatePercent,
        LoanField::TermYears,
    ];

    /// id of the matching input element on the calculator form
    pub fn form_id(&self) -> &'static str {
        match self {
            LoanField::Principal => "loanAmount",
            LoanField::AnnualRatePercent => "interestRate",
            LoanField::TermYears => "loanTerm",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanField::Principal => "loan amount",
            LoanField::AnnualRatePercent => "interest rate (%)",
            LoanField::TermYears => "loan term (years)",
        }
    }

    /// human readable description of the accepted values
    pub fn constraint(&self) -> &'static str {
        match self {
            LoanField::Principal => "must be greater than 0",
            LoanField::AnnualRatePercent => "must be between 0 and 100",
            LoanField::TermYears => "must be between 1 and 50",
        }
    }

    /// position in `LoanField::ALL`
    pub fn index(&self) -> usize {
        match self {
            LoanField::Principal => 0,
            LoanField::AnnualRatePercent => 1,
            LoanField::TermYears => 2,
        }
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form_id())
    }
}

/// loan parameters for a single calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInputs {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
}

impl LoanInputs {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    pub fn value(&self, field: LoanField) -> f64 {
        match field {
            LoanField::Principal => self.principal,
            LoanField::AnnualRatePercent => self.annual_rate_percent,
            LoanField::TermYears => self.term_years,
        }
    }
}

/// derived payment figures, unrounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// validity flag for each loan field, in `LoanField::ALL` order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    flags: [bool; 3],
}

impl ValidationReport {
    pub fn from_fn(mut check: impl FnMut(LoanField) -> bool) -> Self {
        let mut flags = [false; 3];
        for field in LoanField::ALL {
            flags[field.index()] = check(field);
        }
        Self { flags }
    }

    pub fn is_valid(&self, field: LoanField) -> bool {
        self.flags[field.index()]
    }

    pub fn all_valid(&self) -> bool {
        self.flags.iter().all(|v| *v)
    }

    pub fn invalid_fields(&self) -> Vec<LoanField> {
        LoanField::ALL
            .into_iter()
            .filter(|f| !self.is_valid(*f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_index_matches_all_order() {
        for (i, field) in LoanField::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
        assert_eq!(LoanField::TermYears.to_string(), "loanTerm");
    }

    #[test]
    fn test_report_lists_invalid_fields_in_order() {
        let report = ValidationReport::from_fn(|f| f == LoanField::AnnualRatePercent);
        assert!(!report.all_valid());
        assert!(report.is_valid(LoanField::AnnualRatePercent));
        assert!(!report.is_valid(LoanField::Principal));
        assert_eq!(
            report.invalid_fields(),
            vec![LoanField::Principal, LoanField::TermYears]
        );
    }

    #[test]
    fn test_report_serializes_as_flag_array() {
        let report = ValidationReport::from_fn(|f| f != LoanField::TermYears);
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["flags"], serde_json::json!([true, true, false]));
    }

    #[test]
    fn test_inputs_serialize_camel_case() {
        let inputs = LoanInputs::new(1000.0, 5.0, 2.0);
        let json = serde_json::to_value(inputs).unwrap();
        assert_eq!(json["annualRatePercent"], 5.0);
        assert_eq!(inputs.value(LoanField::TermYears), 2.0);
    }
}
