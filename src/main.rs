use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use mortgage_calc::application::engine::MortgageEngine;
use mortgage_calc::interfaces::csv::application_reader::LoanApplicationReader;
use mortgage_calc::interfaces::input::QuoteInput;
use mortgage_calc::interfaces::json::quote_writer::{QuoteResponse, QuoteWriter};
use mortgage_calc::logging;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every calculation at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a single mortgage and print the response as JSON
    Quote {
        /// Property price
        #[arg(long, allow_negative_numbers = true)]
        price: Decimal,

        /// Down payment
        #[arg(long, allow_negative_numbers = true)]
        down_payment: Decimal,

        /// Annual interest rate, in percent
        #[arg(long, allow_negative_numbers = true)]
        rate: Decimal,

        /// Amortization period in years (5, 10, 15, 20, 25 or 30)
        #[arg(long, allow_negative_numbers = true)]
        years: Decimal,

        /// Payment schedule: "monthly", "bi-weekly" or "accelerated bi-weekly"
        #[arg(long)]
        schedule: String,
    },
    /// Price every request in a CSV file, one JSON response per line
    Batch {
        /// Input CSV file
        input: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let engine = MortgageEngine::new();
    let stdout = io::stdout();
    let mut writer = QuoteWriter::new(BufWriter::new(stdout.lock()));

    let exit_code = match cli.command {
        Command::Quote {
            price,
            down_payment,
            rate,
            years,
            schedule,
        } => {
            let input = QuoteInput {
                property_price: Some(price),
                down_payment: Some(down_payment),
                annual_interest_rate: Some(rate),
                amortization_period: Some(years),
                payment_schedule: Some(schedule),
            };
            let response = quote(&engine, input);
            writer.write_response(&response).into_diagnostic()?;

            if response.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Command::Batch { input } => {
            let file = File::open(&input).into_diagnostic()?;
            let reader = LoanApplicationReader::new(file);

            let mut processed = 0usize;
            let mut rejected = 0usize;
            for (row, record) in reader.applications().enumerate() {
                let response = match record {
                    Ok(input) => quote(&engine, input),
                    Err(e) => {
                        warn!(row = row + 1, error = %e, "Error reading loan application");
                        QuoteResponse::from(e)
                    }
                };
                processed += 1;
                if response.is_error() {
                    rejected += 1;
                }
                writer.write_response(&response).into_diagnostic()?;
            }

            info!(processed, rejected, file = %input.display(), "batch complete");
            ExitCode::SUCCESS
        }
    };

    writer.flush().into_diagnostic()?;
    Ok(exit_code)
}

fn quote(engine: &MortgageEngine, input: QuoteInput) -> QuoteResponse {
    input
        .into_application()
        .and_then(|application| engine.calculate_payment(&application))
        .into()
}
