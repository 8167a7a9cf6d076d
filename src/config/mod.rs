use std::{env, fmt::Display, str::FromStr};

pub const DEFAULT_CODE_LENGTH: usize = 6;
pub const DEFAULT_MAX_EXPIRATION_DAYS: i64 = 5 * 365;
pub const DEFAULT_DISPLAY_OFFSET_HOURS: i32 = -3;
pub const DEFAULT_RESERVED_CODES: [&str; 7] =
    ["api", "static", "www", "mail", "ftp", "admin", "root"];

/// Tunable rules for code generation, expiration and display.
///
/// `Config::default()` reproduces the stock behaviour of the free functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub code_length: usize,
    pub max_expiration_days: i64,
    pub display_offset_hours: i32,
    /// Stored lower-cased; matching is case-insensitive.
    pub reserved_codes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_expiration_days: DEFAULT_MAX_EXPIRATION_DAYS,
            display_offset_hours: DEFAULT_DISPLAY_OFFSET_HOURS,
            reserved_codes: DEFAULT_RESERVED_CODES
                .iter()
                .map(|code| code.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Reads overrides from the environment (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let reserved_codes = match env::var("RESERVED_CODES") {
            Ok(raw) => parse_reserved_codes(&raw),
            Err(_) => defaults.reserved_codes,
        };
        Self {
            code_length: get_env_or("SHORT_CODE_LENGTH", defaults.code_length),
            max_expiration_days: get_env_matching(
                "MAX_EXPIRATION_DAYS",
                defaults.max_expiration_days,
                is_positive,
            ),
            display_offset_hours: get_env_or(
                "DISPLAY_UTC_OFFSET_HOURS",
                defaults.display_offset_hours,
            ),
            reserved_codes,
        }
    }

    pub fn is_reserved(&self, code: &str) -> bool {
        let code = code.to_lowercase();
        self.reserved_codes.iter().any(|reserved| *reserved == code)
    }
}

fn get_env_or<T>(var: &str, default: T) -> T
where
    T: FromStr + Display,
{
    get_env_matching(var, default, |_| true)
}

fn get_env_matching<T, F>(var: &str, default: T, accept: F) -> T
where
    T: FromStr + Display,
    F: Fn(&T) -> bool,
{
    let Ok(raw) = env::var(var) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => value,
        _ => {
            tracing::warn!(
                "{} environment variable has invalid value '{}', using default: {}",
                var,
                raw,
                default
            );
            default
        }
    }
}

// a ceiling at or before now would expire every link on creation
fn is_positive(days: &i64) -> bool {
    *days > 0
}

fn parse_reserved_codes(raw: &str) -> Vec<String> {
    let mut codes: Vec<String> = raw
        .split(',')
        .map(|code| code.trim().to_lowercase())
        .filter(|code| !code.is_empty())
        .collect();
    codes.sort();
    codes.dedup();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_stock_rules() {
        let config = Config::default();
        assert_eq!(config.code_length, 6);
        assert_eq!(config.max_expiration_days, 1825);
        assert_eq!(config.display_offset_hours, -3);
        assert_eq!(config.reserved_codes.len(), 7);
    }

    #[test]
    fn reserved_lookup_ignores_case() {
        let config = Config::default();
        assert!(config.is_reserved("ADMIN"));
        assert!(config.is_reserved("Www"));
        assert!(!config.is_reserved("docs"));
    }

    #[test]
    fn reserved_list_is_normalized() {
        let codes = parse_reserved_codes(" API, www,,WWW ,docs ");
        assert_eq!(codes, vec!["api", "docs", "www"]);
    }

    #[test]
    fn unparseable_env_value_falls_back() {
        env::set_var("TLONG_TEST_BAD_NUMBER", "six");
        assert_eq!(get_env_or("TLONG_TEST_BAD_NUMBER", 6usize), 6);
        env::set_var("TLONG_TEST_GOOD_NUMBER", " 8 ");
        assert_eq!(get_env_or("TLONG_TEST_GOOD_NUMBER", 6usize), 8);
    }

    #[test]
    fn non_positive_expiration_ceiling_falls_back() {
        env::set_var("TLONG_TEST_ZERO_DAYS", "0");
        assert_eq!(get_env_matching("TLONG_TEST_ZERO_DAYS", 1825i64, is_positive), 1825);
        env::set_var("TLONG_TEST_NEGATIVE_DAYS", "-30");
        assert_eq!(get_env_matching("TLONG_TEST_NEGATIVE_DAYS", 1825i64, is_positive), 1825);
        env::set_var("TLONG_TEST_SHORT_DAYS", "90");
        assert_eq!(get_env_matching("TLONG_TEST_SHORT_DAYS", 1825i64, is_positive), 90);
    }
}
