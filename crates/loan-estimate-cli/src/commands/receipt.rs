use chrono::Local;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use loan_estimate_core::amortization;
use loan_estimate_core::receipt::{render_receipt, ConsultantInfo};

use super::loan::{resolve_input, EstimateArgs};

/// Arguments for receipt rendering
#[derive(Args)]
pub struct ReceiptArgs {
    #[command(flatten)]
    pub loan: EstimateArgs,

    /// Consultant display name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Consultant phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Consultant Zalo handle
    #[arg(long, default_value = "")]
    pub zalo: String,

    /// Consultant Facebook handle
    #[arg(long, default_value = "")]
    pub facebook: String,

    /// Lending partner id (see `vay partners`)
    #[arg(long, default_value = "fe")]
    pub partner: String,

    /// Override the partner's default hotline
    #[arg(long)]
    pub hotline: Option<String>,

    /// Write the receipt to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run_receipt(args: ReceiptArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loan_input = resolve_input(&args.loan)?;
    let result = amortization::compute_loan(&loan_input)?;

    let consultant = ConsultantInfo {
        name: args.name,
        phone: args.phone,
        zalo: args.zalo,
        facebook: args.facebook,
        avatar: None,
        bank_id: args.partner,
        hotline: args.hotline.unwrap_or_default(),
    };

    let text = render_receipt(
        &loan_input,
        &result.result,
        &consultant,
        Local::now().naive_local(),
    );

    match args.out {
        Some(path) => {
            fs::write(&path, &text)
                .map_err(|e| format!("Failed to write '{}': {e}", path.display()))?;
            println!("Receipt written to {}", path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}
