use cake_orders::application::pipeline::OrderPipeline;
use cake_orders::domain::ports::OrderStoreBox;
use cake_orders::error::OrderError;
use cake_orders::infrastructure::csv_log::{CsvOrderStore, DEFAULT_ORDER_LOG};
use cake_orders::interfaces::csv::submission_reader::SubmissionReader;
use cake_orders::interfaces::http::views::Views;
use cake_orders::interfaces::http::{AppState, router};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file accepted orders are appended to
    #[arg(long, global = true, default_value = DEFAULT_ORDER_LOG)]
    orders_log: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the order form over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
    /// Place every order found in a CSV file of form submissions
    Import {
        /// Input submissions CSV file
        input: PathBuf,

        /// Print receipts as JSON lines
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let log = CsvOrderStore::open(&cli.orders_log);
    info!(orders_log = %log.path().display(), "appending accepted orders");
    let store: OrderStoreBox = Box::new(log);
    let pipeline = OrderPipeline::new(store);

    match cli.command {
        Command::Serve { bind } => serve(pipeline, bind).await,
        Command::Import { input, json } => import(pipeline, input, json).await,
    }
}

async fn serve(pipeline: OrderPipeline, bind: SocketAddr) -> Result<()> {
    let views = Views::new().into_diagnostic()?;
    let app = router(AppState::new(pipeline, views));

    let listener = tokio::net::TcpListener::bind(bind).await.into_diagnostic()?;
    info!(%bind, "serving order form");
    axum::serve(listener, app).await.into_diagnostic()
}

async fn import(pipeline: OrderPipeline, input: PathBuf, json: bool) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = SubmissionReader::new(file);

    for (row, submission) in reader.submissions().enumerate() {
        let row = row + 1;
        let submission = match submission {
            Ok(submission) => submission,
            Err(e) => {
                eprintln!("Error reading submission {row}: {e}");
                continue;
            }
        };

        match pipeline.process(&submission).await {
            Ok(receipt) if json => {
                println!("{}", serde_json::to_string(&receipt).into_diagnostic()?);
            }
            Ok(receipt) => {
                println!(
                    "{},{},{},{}",
                    receipt.customer,
                    receipt.cake_summary(),
                    receipt.delivery_date,
                    receipt.total_price
                );
            }
            Err(OrderError::Validation(errors)) => {
                eprintln!("Rejected submission {row}: {errors}");
            }
            // A log that cannot be written fails every later order too.
            Err(e) => return Err(e).into_diagnostic(),
        }
    }

    Ok(())
}
