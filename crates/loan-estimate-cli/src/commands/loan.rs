use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use loan_estimate_core::amortization::{self, LoanInput};
use loan_estimate_core::currency::format_vnd;

use crate::input;

/// Loan parameters, shared by `estimate`, `schedule`, and `receipt`.
/// Defaults match the product's initial slider state.
#[derive(Args)]
pub struct EstimateArgs {
    /// Path to a JSON LoanInput file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Net disbursed amount in dong
    #[arg(long, default_value = "20000000")]
    pub amount: Decimal,

    /// Loan term in months
    #[arg(long, default_value_t = 12)]
    pub months: u32,

    /// Nominal annual interest rate in percent
    #[arg(long, default_value = "44")]
    pub interest_rate: Decimal,

    /// Insurance premium in percent of the net amount
    #[arg(long, default_value = "5.5")]
    pub insurance_rate: Decimal,
}

/// Precedence: --input file, then piped stdin, then the flags.
pub(crate) fn resolve_input(args: &EstimateArgs) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        input::file::read_json(path)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Ok(serde_json::from_value(data)?)
    } else {
        Ok(LoanInput {
            amount: args.amount,
            months: args.months,
            interest_rate: args.interest_rate,
            insurance_rate: args.insurance_rate,
        })
    }
}

pub fn run_estimate(args: EstimateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = resolve_input(&args)?;
    let result = amortization::compute_loan(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for the schedule listing
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: EstimateArgs,

    /// Render VND display strings instead of raw decimals
    #[arg(long)]
    pub formatted: bool,
}

#[derive(Serialize)]
struct FormattedRow {
    month: u32,
    principal_paid: String,
    interest_paid: String,
    monthly_payment: String,
    remaining_balance: String,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = resolve_input(&args.loan)?;
    let result = amortization::compute_loan(&loan_input)?;
    let schedule = result.result.schedule;

    if args.formatted {
        let rows: Vec<FormattedRow> = schedule
            .iter()
            .map(|r| FormattedRow {
                month: r.month,
                principal_paid: format_vnd(r.principal_paid),
                interest_paid: format_vnd(r.interest_paid),
                monthly_payment: format_vnd(r.monthly_payment),
                remaining_balance: format_vnd(r.remaining_balance),
            })
            .collect();
        Ok(serde_json::to_value(rows)?)
    } else {
        Ok(serde_json::to_value(schedule)?)
    }
}
