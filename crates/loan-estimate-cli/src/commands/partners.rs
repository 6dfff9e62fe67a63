use clap::Args;
use serde_json::Value;

use loan_estimate_core::partners::{partner_by_id, PARTNERS};
use loan_estimate_core::presets::{INSURANCE_RATES, INTEREST_RATES, LOAN_LIMITS};

/// Arguments for the partner listing
#[derive(Args)]
pub struct PartnersArgs {
    /// Show a single partner by id
    #[arg(long)]
    pub id: Option<String>,
}

pub fn run_partners(args: PartnersArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match args.id {
        Some(id) => {
            let partner =
                partner_by_id(&id).ok_or_else(|| format!("Unknown partner id '{id}'"))?;
            Ok(serde_json::to_value(partner)?)
        }
        None => Ok(serde_json::to_value(PARTNERS.as_slice())?),
    }
}

pub fn run_limits() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::json!({
        "limits": LOAN_LIMITS,
        "interest_rates_pct": INTEREST_RATES.as_slice(),
        "insurance_rates_pct": INSURANCE_RATES.as_slice(),
    }))
}
