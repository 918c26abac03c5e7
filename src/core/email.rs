//! Notification email composed from an inquiry.

use chrono::{DateTime, Utc};
use inquiry_core::InquiryPayload;
use serde::Serialize;

/// A message ready to hand to an [`EmailRelay`](super::relay::EmailRelay).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// Compose the studio notification for one inquiry.
///
/// Field values are embedded as submitted.
#[must_use]
pub fn compose(
    inquiry: &InquiryPayload,
    sender: &str,
    recipient: &str,
    received: DateTime<Utc>,
) -> OutboundEmail {
    OutboundEmail {
        from: sender.to_string(),
        to: recipient.to_string(),
        reply_to: inquiry.email().to_string(),
        subject: format!(
            "New {} Project Inquiry from {}",
            inquiry.project_type(),
            inquiry.name()
        ),
        html: render_html(inquiry, received),
    }
}

fn render_html(inquiry: &InquiryPayload, received: DateTime<Utc>) -> String {
    let fields = [
        ("Client Name", inquiry.name()),
        ("Email", inquiry.email()),
        ("Project Type", inquiry.project_type()),
        ("Budget Range", inquiry.budget().unwrap_or("Not specified")),
        ("Project Details", inquiry.message()),
    ];

    let rows: String = fields
        .iter()
        .map(|(label, value)| {
            format!(
                "<div class=\"field\"><div class=\"field-label\">{label}</div>\
                 <div class=\"field-value\">{value}</div></div>\n"
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><style>{STYLE}</style></head>\n<body>\n\
         <div class=\"container\">\n\
         <div class=\"header\"><h1>New Project Inquiry</h1></div>\n\
         <div class=\"content\">\n{rows}</div>\n\
         <div class=\"footer\"><p>Submitted from nirvana-interiors.com on {}</p></div>\n\
         </div>\n</body>\n</html>\n",
        received.format("%Y-%m-%d %H:%M UTC"),
    )
}

const STYLE: &str = "body{font-family:Arial,sans-serif;color:#333;line-height:1.6}\
.container{max-width:600px;margin:0 auto;padding:20px}\
.header{background:#0B0B0B;color:#C9A24D;padding:30px;text-align:center}\
.content{background:#f9f9f9;padding:30px}\
.field{margin-bottom:20px}\
.field-label{font-weight:bold;color:#C9A24D;text-transform:uppercase;font-size:12px}\
.field-value{margin-top:5px;padding:10px;background:white;border-left:3px solid #C9A24D}\
.footer{text-align:center;padding:20px;color:#666;font-size:12px}";

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn inquiry(budget: &str) -> InquiryPayload {
        InquiryPayload {
            name: Some("Asha".to_string()),
            email: Some("asha@x.com".to_string()),
            project_type: Some("Residential".to_string()),
            budget: Some(budget.to_string()),
            message: Some("Need a kitchen redesign".to_string()),
        }
    }

    fn received() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn subject_names_type_and_client() {
        let email = compose(&inquiry(""), "Studio <a@b.c>", "owner@b.c", received());
        assert_eq!(email.subject, "New Residential Project Inquiry from Asha");
        assert_eq!(email.reply_to, "asha@x.com");
        assert_eq!(email.from, "Studio <a@b.c>");
        assert_eq!(email.to, "owner@b.c");
    }

    #[test]
    fn body_embeds_all_fields() {
        let email = compose(&inquiry("₹5L"), "s", "r", received());
        for value in ["Asha", "asha@x.com", "Residential", "₹5L", "Need a kitchen redesign"] {
            assert!(email.html.contains(value), "missing {value}");
        }
        assert!(email.html.contains("2026-03-14 09:30 UTC"));
    }

    #[test]
    fn empty_budget_reads_not_specified() {
        let email = compose(&inquiry(""), "s", "r", received());
        assert!(email.html.contains("Not specified"));
    }
}
