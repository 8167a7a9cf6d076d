use once_cell::sync::Lazy;
use rand::{distr::Alphanumeric, Rng};
use regex::Regex;
use tracing::{debug, trace};

use crate::{config::Config, error::ValidationError, types::Validation};

pub const MIN_CUSTOM_CODE_LENGTH: usize = 3;
pub const MAX_CUSTOM_CODE_LENGTH: usize = 50;

static CUSTOM_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("invalid custom code pattern"));

/// Validates an optional user-chosen short code against the stock reserved list.
pub fn validate_custom_code(code: Option<&str>) -> Validation {
    validate_custom_code_with(code, &Config::default())
}

pub(crate) fn validate_custom_code_with(code: Option<&str>, config: &Config) -> Validation {
    let result = check_custom_code(code, config);
    if let Err(e) = &result {
        debug!(code = ?code, error = %e, "Rejected custom code");
    }
    result.into()
}

fn check_custom_code(code: Option<&str>, config: &Config) -> Result<(), ValidationError> {
    // the field is optional
    let original = match code {
        None | Some("") => return Ok(()),
        Some(code) => code,
    };
    let code = original.trim();

    let len = code.chars().count();
    if !(MIN_CUSTOM_CODE_LENGTH..=MAX_CUSTOM_CODE_LENGTH).contains(&len) {
        return Err(ValidationError::CodeLength {
            min: MIN_CUSTOM_CODE_LENGTH,
            max: MAX_CUSTOM_CODE_LENGTH,
        });
    }
    if !CUSTOM_CODE.is_match(code) {
        return Err(ValidationError::CodeCharacters);
    }
    if config.is_reserved(code) {
        return Err(ValidationError::ReservedCode(original.to_string()));
    }
    Ok(())
}

/// Random code of `length` ASCII letters and digits.
pub fn generate_random_code(length: usize) -> String {
    let code: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();
    trace!(short_code = %code, "Generated short code");
    code
}

pub fn generate_default_code() -> String {
    generate_random_code(crate::config::DEFAULT_CODE_LENGTH)
}
