use thiserror::Error;

/// Markers the clinic API embeds in unique-constraint violations.
const DUPLICATE_KEY_CODE: &str = "E11000";
const DUPLICATE_KEY_WORD: &str = "duplicate";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("Duplicate entry: {0}")]
    DuplicateKey(String),
}

impl AppError {
    /// Reclassifies a server error whose message signals a unique-key clash.
    pub fn classify(self) -> Self {
        match self {
            AppError::Server { message, .. } if is_duplicate_key_message(&message) => {
                AppError::DuplicateKey(message)
            }
            other => other,
        }
    }

    /// Text shown to the operator in the notice banner.
    pub fn notice(&self) -> String {
        match self {
            AppError::Server { message, .. } => message.clone(),
            AppError::Validation(message) => message.clone(),
            AppError::DuplicateKey(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

pub fn is_duplicate_key_message(message: &str) -> bool {
    message.contains(DUPLICATE_KEY_CODE) || message.to_lowercase().contains(DUPLICATE_KEY_WORD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn mongo_duplicate_code_is_classified() {
        let err = AppError::Server {
            status: 500,
            message: "E11000 duplicate key error collection: clinic.patients index: email_1".into(),
        };
        assert_matches!(err.classify(), AppError::DuplicateKey(msg) if msg.starts_with("E11000"));
    }

    #[test]
    fn duplicate_word_matches_any_case() {
        assert!(is_duplicate_key_message("Duplicate entry for email"));
        assert!(!is_duplicate_key_message("Patient not found"));
    }

    #[test]
    fn ordinary_server_errors_pass_through_verbatim() {
        let err = AppError::Server { status: 400, message: "name is required".into() };
        let classified = err.classify();
        assert_matches!(classified, AppError::Server { status: 400, .. });
        assert_eq!(classified.notice(), "name is required");
    }
}
