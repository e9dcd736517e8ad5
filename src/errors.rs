use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid {field}: '{value}' {reason}")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("HTTP error! status: {status}")]
    Http { status: StatusCode },

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    pub fn invalid_input(
        field: &'static str,
        value: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
            reason,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = ClientError::invalid_input("target", "0", "must be greater than zero");
        assert_eq!(err.to_string(), "invalid target: '0' must be greater than zero");
        assert!(err.is_invalid_input());

        let err = ClientError::Http {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 404 Not Found");
        assert!(!err.is_invalid_input());
    }
}
