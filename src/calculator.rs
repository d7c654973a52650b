use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::amortization::{parse_amount, AmortizationEngine};
use crate::chart::{ChartRenderer, PaymentBreakdown};
use crate::currency::format_currency;
use crate::errors::{Error, Result};
use crate::types::{LoanField, LoanInputs, LoanResult, ValidationReport};

/// raw text of the three calculator inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanForm {
    pub loan_amount: String,
    pub interest_rate: String,
    pub loan_term: String,
}

impl LoanForm {
    pub fn new(
        loan_amount: impl Into<String>,
        interest_rate: impl Into<String>,
        loan_term: impl Into<String>,
    ) -> Self {
        Self {
            loan_amount: loan_amount.into(),
            interest_rate: interest_rate.into(),
            loan_term: loan_term.into(),
        }
    }

    pub fn raw(&self, field: LoanField) -> &str {
        match field {
            LoanField::Principal => &self.loan_amount,
            LoanField::AnnualRatePercent => &self.interest_rate,
            LoanField::TermYears => &self.loan_term,
        }
    }

    /// parse every field, None if any of them is not a number
    pub fn parse(&self) -> Option<LoanInputs> {
        Some(LoanInputs::new(
            parse_amount(&self.loan_amount)?,
            parse_amount(&self.interest_rate)?,
            parse_amount(&self.loan_term)?,
        ))
    }
}

/// what the calculator shows after a successful calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationView {
    pub inputs: LoanInputs,
    pub result: LoanResult,
    pub monthly_payment: String,
    pub total_payment: String,
    pub total_interest: String,
}

impl CalculationView {
    fn new(inputs: LoanInputs, result: LoanResult) -> Self {
        Self {
            inputs,
            result,
            monthly_payment: format_currency(result.monthly_payment),
            total_payment: format_currency(result.total_payment),
            total_interest: format_currency(result.total_interest),
        }
    }

    pub fn breakdown(&self) -> PaymentBreakdown {
        PaymentBreakdown::new(self.inputs.principal, self.result.total_interest)
    }
}

/// drives the engine from form input and keeps the current chart
pub struct MortgageCalculator<R: ChartRenderer> {
    renderer: R,
    chart: Option<R::Chart>,
}

impl<R: ChartRenderer> MortgageCalculator<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            chart: None,
        }
    }

    /// check one raw input, flagging it when invalid
    pub fn validate_input(&self, field: LoanField, raw: &str) -> bool {
        let valid = AmortizationEngine::validate_raw(field, raw);
        if !valid {
            debug!(field = field.form_id(), value = raw, "input flagged invalid");
        }
        valid
    }

    /// validity of every field; all fields are checked so each one gets feedback
    pub fn validate_form(&self, form: &LoanForm) -> ValidationReport {
        ValidationReport::from_fn(|field| self.validate_input(field, form.raw(field)))
    }

    /// validate, compute, format and redraw the chart
    ///
    /// on invalid input nothing is computed and the previous chart stays.
    pub fn calculate(&mut self, form: &LoanForm) -> Result<CalculationView> {
        let report = self.validate_form(form);
        let inputs = match form.parse() {
            Some(inputs) if report.all_valid() => inputs,
            _ => {
                return Err(Error::InvalidInput {
                    fields: report.invalid_fields(),
                })
            }
        };

        let result = AmortizationEngine::compute_summary(
            inputs.principal,
            inputs.annual_rate_percent,
            inputs.term_years,
        );
        let view = CalculationView::new(inputs, result);

        info!(
            monthly_payment = %view.monthly_payment,
            total_payment = %view.total_payment,
            total_interest = %view.total_interest,
            "loan calculated"
        );

        self.update_chart(&view.breakdown())?;
        Ok(view)
    }

    /// the chart for the most recent successful calculation
    pub fn chart(&self) -> Option<&R::Chart> {
        self.chart.as_ref()
    }

    fn update_chart(&mut self, breakdown: &PaymentBreakdown) -> Result<()> {
        // release the old chart before a new one is acquired
        drop(self.chart.take());
        self.chart = Some(self.renderer.render(breakdown)?);
        Ok(())
    }
}
