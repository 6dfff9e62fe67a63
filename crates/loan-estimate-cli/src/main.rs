mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::{EstimateArgs, ScheduleArgs};
use commands::partners::PartnersArgs;
use commands::receipt::ReceiptArgs;

/// Consumer loan estimation with decimal precision
#[derive(Parser)]
#[command(
    name = "vay",
    version,
    about = "Consumer loan estimation with decimal precision",
    long_about = "Estimates consumer loans the way the lending partners quote them: \
                  fixed-payment reducing-balance amortization with the insurance \
                  premium financed into the principal. Produces the monthly \
                  installment, the full repayment schedule, and a shareable text \
                  receipt with consultant contact details."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full loan estimate (payment, totals, schedule)
    Estimate(EstimateArgs),
    /// Print only the amortization schedule
    Schedule(ScheduleArgs),
    /// Render the shareable estimate receipt
    Receipt(ReceiptArgs),
    /// List the lending partner registry
    Partners(PartnersArgs),
    /// Show offered rates and slider limits
    Limits,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Estimate(args) => commands::loan::run_estimate(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Receipt(args) => {
            // The receipt is a text artifact, not a data payload; it bypasses
            // the structured formatters.
            match commands::receipt::run_receipt(args) {
                Ok(()) => return,
                Err(e) => {
                    eprintln!("{}: {}", "error".red().bold(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Partners(args) => commands::partners::run_partners(args),
        Commands::Limits => commands::partners::run_limits(),
        Commands::Version => {
            println!("vay {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
