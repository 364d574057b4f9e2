use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payout_service::application::service::PayoutService;
use payout_service::config::{MAX_PAYOUT_AMOUNT, PayoutLimits, USER_TOTAL_LIMIT};
use payout_service::domain::ports::PayoutStoreBox;
use payout_service::infrastructure::in_memory::InMemoryPayoutStore;
use payout_service::interfaces::csv::decision_writer::{Decision, DecisionWriter, OutputFormat};
use payout_service::interfaces::csv::request_reader::RequestReader;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payout requests CSV file (user_id,amount,currency)
    input: PathBuf,

    /// Largest amount accepted for a single payout
    #[arg(long, default_value_t = MAX_PAYOUT_AMOUNT)]
    max_amount: Decimal,

    /// Largest cumulative amount accepted per user
    #[arg(long, default_value_t = USER_TOTAL_LIMIT)]
    user_limit: Decimal,

    /// Output format for the decision report
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let limits = PayoutLimits::new(cli.max_amount, cli.user_limit).into_diagnostic()?;
    let store: PayoutStoreBox = Box::new(InMemoryPayoutStore::new());
    let service = PayoutService::with_limits(store, limits);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = DecisionWriter::new(stdout.lock(), cli.format);

    for (index, request_result) in reader.requests().enumerate() {
        let row = index + 1;
        match request_result {
            Ok(request) => {
                let outcome = service.process_payout(request.clone()).await;
                if let Err(e) = &outcome {
                    info!(row, reason = %e, "payout rejected");
                }
                writer
                    .write_decision(&Decision::new(row, request, outcome))
                    .into_diagnostic()?;
            }
            Err(e) => {
                warn!(row, "Error reading payout request: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
