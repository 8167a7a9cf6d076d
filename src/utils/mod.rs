pub mod code;
pub mod expiration;
pub mod time;
pub mod url;

pub use code::{generate_default_code, generate_random_code, validate_custom_code};
pub use expiration::{parse_expiration_time, ExpirationSpec, ExpirationUnit};
pub use time::{format_datetime, format_relative_time, NEVER};
pub use self::url::validate_url;
