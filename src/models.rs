use crate::errors::ClientError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaterReading {
    pub water_intake: i32,
    pub target: i32,
}

impl WaterReading {
    pub fn parse(water_intake: &str, target: &str) -> Result<Self, ClientError> {
        let water_intake = parse_amount("water intake", water_intake)?;
        let target = parse_integer("target", target)?;
        if target <= 0 {
            return Err(ClientError::invalid_input(
                "target",
                target.to_string(),
                "must be greater than zero",
            ));
        }

        Ok(Self {
            water_intake,
            target,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateReading {
    pub water_intake: i32,
}

impl UpdateReading {
    pub fn parse(water_intake: &str) -> Result<Self, ClientError> {
        Ok(Self {
            water_intake: parse_amount("water intake", water_intake)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewRequest {
    pub id: i32,
}

impl ViewRequest {
    pub fn parse(id: &str) -> Result<Self, ClientError> {
        Ok(Self {
            id: parse_integer("id", id)?,
        })
    }
}

/// A recorded reading as the server reports it back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WaterReport {
    pub timestamp: String,
    pub water_intake: i32,
    pub target: i32,
    pub percentage: f64,
}

/// Before/after summary returned by `/update_water`. The server sends it as
/// a JSON string holding the encoded object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateOutcome {
    #[serde(rename = "previous entry")]
    pub previous_entry: String,
    #[serde(rename = "updated entry")]
    pub updated_entry: String,
}

impl UpdateOutcome {
    pub fn parse(body: &str) -> Option<Self> {
        if let Ok(outcome) = serde_json::from_str::<Self>(body) {
            return Some(outcome);
        }
        let inner = serde_json::from_str::<String>(body).ok()?;
        serde_json::from_str(&inner).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SubmitResponse,
    UpdateConfirmation,
    View,
    ServerStatus,
}

/// One operation's output: an HTML fragment and the region it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub region: Region,
    pub html: String,
}

impl Rendered {
    pub fn new(region: Region, html: impl Into<String>) -> Self {
        Self {
            region,
            html: html.into(),
        }
    }
}

fn parse_integer(field: &'static str, text: &str) -> Result<i32, ClientError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| ClientError::invalid_input(field, text, "is not a whole number"))
}

fn parse_amount(field: &'static str, text: &str) -> Result<i32, ClientError> {
    let amount = parse_integer(field, text)?;
    if amount < 0 {
        return Err(ClientError::invalid_input(field, text, "cannot be negative"));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_parses_trimmed_integers() {
        let reading = WaterReading::parse(" 250 ", "2000\n").unwrap();
        assert_eq!(
            reading,
            WaterReading {
                water_intake: 250,
                target: 2000
            }
        );
    }

    #[test]
    fn reading_rejects_non_numeric_intake() {
        let err = WaterReading::parse("250ml", "2000").unwrap_err();
        match err {
            ClientError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "water intake");
                assert_eq!(value, "250ml");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reading_rejects_zero_target() {
        let err = WaterReading::parse("250", "0").unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput { field: "target", .. }));
    }

    #[test]
    fn update_rejects_negative_amount() {
        assert!(UpdateReading::parse("-5").is_err());
        assert_eq!(UpdateReading::parse("0").unwrap().water_intake, 0);
    }

    #[test]
    fn view_request_rejects_empty_id() {
        assert!(ViewRequest::parse("").is_err());
        assert_eq!(ViewRequest::parse("3").unwrap(), ViewRequest { id: 3 });
    }

    #[test]
    fn report_reads_server_json() {
        let report: WaterReport = serde_json::from_str(
            r#"{"timestamp":"2024-05-01","water_intake":500,"target":2000,"percentage":25.0}"#,
        )
        .unwrap();
        assert_eq!(report.timestamp, "2024-05-01");
        assert_eq!(report.percentage, 25.0);
    }

    #[test]
    fn update_outcome_reads_string_encoded_object() {
        let body = serde_json::to_string(
            r#"{"previous entry":"Latest entry (ID: 1): Date: 2024-05-01, Current Water Intake: 500, Target: 2000","updated entry":"Updated entry: Date: 2024-05-01, Water Intake: 750, Target: 2000"}"#,
        )
        .unwrap();

        let outcome = UpdateOutcome::parse(&body).expect("outcome");
        assert_eq!(
            outcome.updated_entry,
            "Updated entry: Date: 2024-05-01, Water Intake: 750, Target: 2000"
        );
        assert!(outcome.previous_entry.starts_with("Latest entry (ID: 1)"));
    }

    #[test]
    fn update_outcome_ignores_other_bodies() {
        assert_eq!(UpdateOutcome::parse(r#""ok""#), None);
        assert_eq!(UpdateOutcome::parse(""), None);
    }
}
