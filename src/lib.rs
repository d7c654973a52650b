pub mod amortization;
pub mod api;
pub mod calculator;
pub mod chart;
pub mod config;
pub mod currency;
pub mod errors;
pub mod logging;
pub mod types;
pub mod users;

// re-export key types
pub use amortization::AmortizationEngine;
pub use calculator::{CalculationView, LoanForm, MortgageCalculator};
pub use chart::{ChartRenderer, LegendPosition, PaymentBreakdown, Slice, TextChart, TextPieRenderer};
pub use config::{load_settings, Settings};
pub use currency::format_currency;
pub use errors::{Error, Result};
pub use types::{LoanField, LoanInputs, LoanResult, ValidationReport};
pub use users::{NewUser, User, UserStore, UserUpdate};
