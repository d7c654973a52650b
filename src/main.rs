use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mortgage_calculator_rs::{
    api::{build_router, AppState},
    load_settings, logging, Error, LoanField, LoanForm, MortgageCalculator, Settings,
    TextPieRenderer,
};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "mortgage", version, about = "fixed-rate mortgage calculator and user api")]
struct Cli {
    /// more detailed logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// config file, defaults to ./mortgage.toml when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// compute monthly payment, totals and a principal/interest chart
    Calculate {
        /// loan amount
        #[arg(long, allow_hyphen_values = true)]
        principal: String,
        /// annual interest rate in percent
        #[arg(long, allow_hyphen_values = true)]
        rate: String,
        /// loan term in years
        #[arg(long, allow_hyphen_values = true)]
        term: String,
        /// print the result as json
        #[arg(long)]
        json: bool,
        /// skip the chart
        #[arg(long)]
        no_chart: bool,
    },
    /// run the user api
    Serve {
        /// address to listen on, overrides config
        #[arg(long)]
        bind: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Command::Serve { bind: Some(bind) } = &cli.command {
        settings.bind_addr = bind.clone();
    }

    logging::init_logger(&settings, cli.verbose);

    let outcome = match cli.command {
        Command::Calculate {
            principal,
            rate,
            term,
            json,
            no_chart,
        } => calculate(LoanForm::new(principal, rate, term), json, no_chart),
        Command::Serve { .. } => serve(settings).map(|()| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        // rejected input was already reported field by field
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// one line per rejected field, naming the form input and its constraint
fn invalid_field_lines(form: &LoanForm, fields: &[LoanField]) -> Vec<String> {
    fields
        .iter()
        .map(|field| {
            format!(
                "{} ({}): {:?} {}",
                field.label(),
                field.form_id(),
                form.raw(*field),
                field.constraint()
            )
        })
        .collect()
}

/// returns false when the form was rejected
fn calculate(form: LoanForm, json: bool, no_chart: bool) -> anyhow::Result<bool> {
    let mut calculator = MortgageCalculator::new(TextPieRenderer::default());

    let view = match calculator.calculate(&form) {
        Ok(view) => view,
        Err(Error::InvalidInput { fields }) => {
            if json {
                let report = calculator.validate_form(&form);
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            for line in invalid_field_lines(&form, &fields) {
                eprintln!("{line}");
            }
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(true);
    }

    println!("monthly payment: {}", view.monthly_payment);
    println!("total payment:   {}", view.total_payment);
    println!("total interest:  {}", view.total_interest);

    if !no_chart {
        if let Some(chart) = calculator.chart() {
            println!("\n{chart}");
        }
    }
    Ok(true)
}

#[tokio::main]
async fn serve(settings: Settings) -> anyhow::Result<()> {
    let addr = settings.socket_addr()?;
    let app = build_router(AppState::default());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_get_one_line_each() {
        let form = LoanForm::new("0", "6", "51");
        let lines = invalid_field_lines(&form, &[LoanField::Principal, LoanField::TermYears]);

        assert_eq!(
            lines,
            vec![
                "loan amount (loanAmount): \"0\" must be greater than 0",
                "loan term (years) (loanTerm): \"51\" must be between 1 and 50",
            ]
        );
    }

    #[test]
    fn rejected_form_is_a_plain_failure() {
        let calculated = calculate(LoanForm::new("0", "6", "51"), false, true).expect("no error");
        assert!(!calculated);
    }

    #[test]
    fn valid_form_succeeds() {
        let form = LoanForm::new("200000", "6", "30");
        let calculated = calculate(form, true, true).expect("no error");
        assert!(calculated);
    }
}
