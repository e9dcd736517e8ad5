use crate::errors::ClientError;
use crate::models::{Region, UpdateOutcome, WaterReport};

pub const SUBMIT_FAILED: &str = "An error occurred. Is server running?";
pub const UPDATE_FAILED: &str = "An error occurred while updating water intake.";
pub const VIEW_FAILED: &str = "An error occurred while fetching water data.";
pub const STATUS_FAILED: &str = "Server is not reachable.";

pub fn report(report: &WaterReport) -> String {
    format!(
        "<p>{} {} {} {}</p>",
        escape_html(&report.timestamp),
        report.water_intake,
        report.target,
        report.percentage
    )
}

pub fn update_confirmation(water_intake: i32, outcome: Option<&UpdateOutcome>) -> String {
    let mut html = format!("<p>You drank {water_intake}ml!</p>");
    if let Some(outcome) = outcome {
        html.push_str(&text(&outcome.previous_entry));
        html.push_str(&text(&outcome.updated_entry));
    }
    html
}

pub fn text(body: &str) -> String {
    format!("<p>{}</p>", escape_html(body))
}

pub fn failure(region: Region, err: &ClientError) -> String {
    match err {
        ClientError::InvalidInput {
            field,
            value,
            reason,
        } => format!("Invalid {field}: '{}' {reason}.", escape_html(value)),
        _ => failure_message(region).to_string(),
    }
}

pub fn failure_message(region: Region) -> &'static str {
    match region {
        Region::SubmitResponse => SUBMIT_FAILED,
        Region::UpdateConfirmation => UPDATE_FAILED,
        Region::View => VIEW_FAILED,
        Region::ServerStatus => STATUS_FAILED,
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
