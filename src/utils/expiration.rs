//! Compact expiration strings such as `"2h"`, `"7d"`, `"1w"` or `"3m"`.

use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{
    clock::{Clock, SystemClock},
    config::DEFAULT_MAX_EXPIRATION_DAYS,
    error::ExpirationParseError,
};

static EXPIRATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)([hdwm])$").expect("invalid expiration pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationUnit {
    Hours,
    Days,
    Weeks,
    /// Thirty days.
    Months,
}

/// A parsed `<count><unit>` expiration.
///
/// `count` is `None` when the digits do not fit in a `u64`; such a span is
/// longer than any ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationSpec {
    pub count: Option<u64>,
    pub unit: ExpirationUnit,
}

impl ExpirationSpec {
    /// Length of the span, or `None` if it overflows `TimeDelta`.
    pub fn duration(&self) -> Option<TimeDelta> {
        let count = i64::try_from(self.count?).ok()?;
        match self.unit {
            ExpirationUnit::Hours => TimeDelta::try_hours(count),
            ExpirationUnit::Days => TimeDelta::try_days(count),
            ExpirationUnit::Weeks => TimeDelta::try_weeks(count),
            ExpirationUnit::Months => TimeDelta::try_days(count.checked_mul(30)?),
        }
    }
}

impl FromStr for ExpirationSpec {
    type Err = ExpirationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        let normalized = normalized.trim();
        if normalized.is_empty() {
            return Err(ExpirationParseError::Empty);
        }
        let caps = EXPIRATION
            .captures(normalized)
            .ok_or_else(|| ExpirationParseError::Malformed(s.to_string()))?;

        let unit = match &caps[2] {
            "h" => ExpirationUnit::Hours,
            "d" => ExpirationUnit::Days,
            "w" => ExpirationUnit::Weeks,
            _ => ExpirationUnit::Months,
        };
        Ok(Self {
            count: caps[1].parse().ok(),
            unit,
        })
    }
}

/// Absolute expiry for `expires_in`, clamped to five years from now.
///
/// Returns `None` both when no expiration was requested and when the string
/// cannot be parsed.
pub fn parse_expiration_time(expires_in: Option<&str>) -> Option<DateTime<Utc>> {
    parse_expiration_time_with(expires_in, &SystemClock, DEFAULT_MAX_EXPIRATION_DAYS)
}

pub(crate) fn parse_expiration_time_with<C: Clock>(
    expires_in: Option<&str>,
    clock: &C,
    max_days: i64,
) -> Option<DateTime<Utc>> {
    let raw = expires_in.filter(|s| !s.is_empty())?;
    let spec = match raw.parse::<ExpirationSpec>() {
        Ok(spec) => spec,
        Err(e) => {
            debug!(expires_in = %raw, error = %e, "Ignoring unparseable expiration");
            return None;
        }
    };

    let expiration = spec
        .duration()
        .and_then(|delta| clock.now().checked_add_signed(delta));
    let ceiling = ceiling(clock.now(), max_days);

    match expiration {
        Some(expiration) if expiration <= ceiling => Some(expiration),
        _ => {
            debug!(expires_in = %raw, ceiling = %ceiling, "Clamping expiration");
            Some(ceiling)
        }
    }
}

fn ceiling(now: DateTime<Utc>, max_days: i64) -> DateTime<Utc> {
    TimeDelta::try_days(max_days)
        .and_then(|max| now.checked_add_signed(max))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
