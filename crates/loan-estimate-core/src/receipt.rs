//! Plain-text rendering of the shareable estimate receipt ("phiếu tạm
//! tính"): partner branding, the computed figures, and the consultant's
//! contact block. The timestamp is a parameter so rendering stays
//! deterministic; callers pass `Local::now()`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::amortization::{LoanInput, LoanSummary};
use crate::currency::format_vnd;
use crate::partners::partner_or_default;

const WIDTH: usize = 40;

/// Contact details of the consultant stamped onto the receipt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsultantInfo {
    pub name: String,
    pub phone: String,
    pub zalo: String,
    pub facebook: String,
    pub avatar: Option<String>,
    /// Selected partner identity; unknown ids fall back to the first
    /// registry entry.
    pub bank_id: String,
    /// Overrides the partner's default hotline when non-empty.
    pub hotline: String,
}

impl ConsultantInfo {
    /// The hotline to print: the consultant's override, else the partner's.
    pub fn effective_hotline(&self) -> &str {
        if self.hotline.trim().is_empty() {
            partner_or_default(&self.bank_id).hotline
        } else {
            &self.hotline
        }
    }
}

/// Render the receipt as fixed-width text.
pub fn render_receipt(
    input: &LoanInput,
    summary: &LoanSummary,
    consultant: &ConsultantInfo,
    timestamp: NaiveDateTime,
) -> String {
    let partner = partner_or_default(&consultant.bank_id);

    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);

    let mut out = String::new();
    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&center(partner.name));
    out.push_str(&center("ƯỚC TÍNH SƠ BỘ KHOẢN VAY"));
    out.push_str(&center(&format!(
        "Ngày {} - {}",
        timestamp.format("%d/%m/%Y"),
        timestamp.format("%H:%M"),
    )));
    out.push_str(&light);
    out.push('\n');

    push_row(&mut out, "Số tiền vay", &format_vnd(input.amount));
    push_row(&mut out, "Thời hạn vay", &format!("{} tháng", input.months));
    push_row(
        &mut out,
        "Lãi suất",
        &format!("{}%/năm", input.interest_rate.normalize()),
    );
    push_row(
        &mut out,
        "Phí bảo hiểm",
        &format!(
            "{}% ({})",
            input.insurance_rate.normalize(),
            format_vnd(summary.insurance_fee)
        ),
    );

    out.push_str(&light);
    out.push('\n');
    push_row(&mut out, "GÓP MỖI THÁNG", &format_vnd(summary.monthly_payment));
    out.push_str(&light);
    out.push('\n');

    push_row(&mut out, "Gốc + bảo hiểm", &format_vnd(summary.total_principal));
    push_row(&mut out, "Tổng lãi", &format_vnd(summary.total_interest));
    push_row(&mut out, "Tổng thanh toán", &format_vnd(summary.total_payment));

    out.push_str(&light);
    out.push('\n');
    push_optional_row(&mut out, "Tư vấn viên", &consultant.name);
    push_optional_row(&mut out, "Điện thoại", &consultant.phone);
    push_optional_row(&mut out, "Zalo", &consultant.zalo);
    push_optional_row(&mut out, "Facebook", &consultant.facebook);
    push_row(&mut out, "Hotline", consultant.effective_hotline());

    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&center("Kết quả chỉ mang tính tham khảo"));
    out
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    let pad = WIDTH.saturating_sub(len) / 2;
    format!("{}{}\n", " ".repeat(pad), text)
}

fn push_row(out: &mut String, label: &str, value: &str) {
    let label_len = label.chars().count();
    let value_len = value.chars().count();
    let gap = WIDTH.saturating_sub(label_len + value_len).max(1);
    out.push_str(label);
    out.push_str(&" ".repeat(gap));
    out.push_str(value);
    out.push('\n');
}

// Blank consultant fields are simply left off the receipt.
fn push_optional_row(out: &mut String, label: &str, value: &str) {
    if !value.trim().is_empty() {
        push_row(out, label, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::compute_loan;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sample() -> (LoanInput, LoanSummary) {
        let input = LoanInput {
            amount: dec!(20_000_000),
            months: 12,
            interest_rate: dec!(44),
            insurance_rate: dec!(5.5),
        };
        let summary = compute_loan(&input).unwrap().result;
        (input, summary)
    }

    fn at_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 24)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_receipt_contains_branding_and_figures() {
        let (input, summary) = sample();
        let consultant = ConsultantInfo {
            name: "Trần Thị B".into(),
            phone: "0900 123 456".into(),
            bank_id: "home".into(),
            ..Default::default()
        };

        let text = render_receipt(&input, &summary, &consultant, at_noon());
        assert!(text.contains("Home Credit"));
        assert!(text.contains("ƯỚC TÍNH SƠ BỘ KHOẢN VAY"));
        assert!(text.contains("Ngày 24/08/2026 - 12:30"));
        assert!(text.contains("20.000.000 ₫"));
        assert!(text.contains("12 tháng"));
        assert!(text.contains("44%/năm"));
        assert!(text.contains("1.100.000 ₫"));
        assert!(text.contains("Trần Thị B"));
        assert!(text.contains("0900 123 456"));
        // Partner hotline used when no override is given
        assert!(text.contains("1900 633 633"));
    }

    #[test]
    fn test_blank_contact_lines_are_omitted() {
        let (input, summary) = sample();
        let consultant = ConsultantInfo {
            bank_id: "fe".into(),
            ..Default::default()
        };

        let text = render_receipt(&input, &summary, &consultant, at_noon());
        assert!(!text.contains("Zalo"));
        assert!(!text.contains("Facebook"));
        assert!(text.contains("1900 6535"));
    }

    #[test]
    fn test_hotline_override() {
        let consultant = ConsultantInfo {
            bank_id: "fe".into(),
            hotline: "0911 000 111".into(),
            ..Default::default()
        };
        assert_eq!(consultant.effective_hotline(), "0911 000 111");
    }

    #[test]
    fn test_unknown_partner_falls_back() {
        let (input, summary) = sample();
        let consultant = ConsultantInfo {
            bank_id: "defunct".into(),
            ..Default::default()
        };
        let text = render_receipt(&input, &summary, &consultant, at_noon());
        assert!(text.contains("FE Credit"));
    }
}
