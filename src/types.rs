use serde::Serialize;

use crate::error::ValidationError;

/// Outcome of validating user input: a validity flag plus the message to show
/// when the input is rejected.
///
/// `error` is present exactly when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    valid: bool,
    error: Option<String>,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn into_result(self) -> Result<(), String> {
        match self.error {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}

impl From<ValidationError> for Validation {
    fn from(err: ValidationError) -> Self {
        Self {
            valid: false,
            error: Some(err.to_string()),
        }
    }
}

impl From<Result<(), ValidationError>> for Validation {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(err) => err.into(),
        }
    }
}
