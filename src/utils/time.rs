use chrono::{DateTime, FixedOffset, Offset, TimeDelta, Utc};

use crate::{
    clock::{Clock, SystemClock},
    config::DEFAULT_DISPLAY_OFFSET_HOURS,
};

pub const NEVER: &str = "Nunca";

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";
const SECONDS_PER_DAY: i64 = 86_400;
const MICROS_PER_DAY: i64 = SECONDS_PER_DAY * 1_000_000;

/// `DD/MM/YYYY HH:MM` in Brasília time (fixed UTC-3, no daylight saving).
pub fn format_datetime(dt: Option<DateTime<Utc>>) -> String {
    format_datetime_with(dt, DEFAULT_DISPLAY_OFFSET_HOURS)
}

pub(crate) fn format_datetime_with(dt: Option<DateTime<Utc>>, offset_hours: i32) -> String {
    let Some(dt) = dt else {
        return NEVER.to_string();
    };
    let offset = offset_hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    dt.with_timezone(&offset).format(DISPLAY_FORMAT).to_string()
}

/// Portuguese "time ago" text for `dt`.
pub fn format_relative_time(dt: Option<DateTime<Utc>>) -> String {
    format_relative_time_with(dt, &SystemClock)
}

pub(crate) fn format_relative_time_with<C: Clock>(dt: Option<DateTime<Utc>>, clock: &C) -> String {
    let Some(dt) = dt else {
        return NEVER.to_string();
    };
    let (days, seconds) = split_days(clock.now() - dt);

    match days {
        0 if seconds < 60 => "Agora há pouco".to_string(),
        0 if seconds < 3600 => ago(seconds / 60, "minuto", "minutos"),
        0 => ago(seconds / 3600, "hora", "horas"),
        1 => "Ontem".to_string(),
        d if d < 30 => ago(d, "dia", "dias"),
        d if d < 365 => ago(d / 30, "mês", "meses"),
        d => ago(d / 365, "ano", "anos"),
    }
}

fn ago(n: i64, singular: &str, plural: &str) -> String {
    format!("Há {} {}", n, if n == 1 { singular } else { plural })
}

/// Whole days (floored, so negative for future instants) and the remaining
/// seconds in `0..86400`.
fn split_days(diff: TimeDelta) -> (i64, i64) {
    match diff.num_microseconds() {
        Some(micros) => (
            micros.div_euclid(MICROS_PER_DAY),
            micros.rem_euclid(MICROS_PER_DAY) / 1_000_000,
        ),
        None => {
            let secs = diff.num_seconds();
            (secs.div_euclid(SECONDS_PER_DAY), secs.rem_euclid(SECONDS_PER_DAY))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn ago_by(delta: TimeDelta) -> String {
        format_relative_time_with(Some(now() - delta), &now)
    }

    #[test]
    fn never() {
        assert_eq!(format_datetime(None), "Nunca");
        assert_eq!(format_relative_time(None), "Nunca");
    }

    #[test]
    fn formats_in_brasilia_time() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 14, 7, 59).unwrap();
        assert_eq!(format_datetime(Some(dt)), "05/01/2024 11:07");
    }

    #[test]
    fn shift_crosses_midnight_and_year() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 1, 30, 0).unwrap();
        assert_eq!(format_datetime(Some(dt)), "31/12/2023 22:30");
    }

    #[test]
    fn configurable_offset() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 1, 30, 0).unwrap();
        assert_eq!(format_datetime_with(Some(dt), 0), "01/01/2024 01:30");
        assert_eq!(format_datetime_with(Some(dt), 2), "01/01/2024 03:30");
    }

    #[test]
    fn same_day_buckets() {
        assert_eq!(ago_by(TimeDelta::zero()), "Agora há pouco");
        assert_eq!(ago_by(TimeDelta::seconds(30)), "Agora há pouco");
        assert_eq!(ago_by(TimeDelta::seconds(59)), "Agora há pouco");
        assert_eq!(ago_by(TimeDelta::seconds(60)), "Há 1 minuto");
        assert_eq!(ago_by(TimeDelta::seconds(150)), "Há 2 minutos");
        assert_eq!(ago_by(TimeDelta::seconds(3599)), "Há 59 minutos");
        assert_eq!(ago_by(TimeDelta::hours(1)), "Há 1 hora");
        assert_eq!(ago_by(TimeDelta::hours(23)), "Há 23 horas");
    }

    #[test]
    fn day_buckets() {
        assert_eq!(ago_by(TimeDelta::hours(24)), "Ontem");
        assert_eq!(ago_by(TimeDelta::hours(25)), "Ontem");
        assert_eq!(ago_by(TimeDelta::hours(47)), "Ontem");
        assert_eq!(ago_by(TimeDelta::hours(48)), "Há 2 dias");
        assert_eq!(ago_by(TimeDelta::days(29)), "Há 29 dias");
    }

    #[test]
    fn month_and_year_buckets() {
        assert_eq!(ago_by(TimeDelta::days(30)), "Há 1 mês");
        assert_eq!(ago_by(TimeDelta::days(59)), "Há 1 mês");
        assert_eq!(ago_by(TimeDelta::days(60)), "Há 2 meses");
        assert_eq!(ago_by(TimeDelta::days(364)), "Há 12 meses");
        assert_eq!(ago_by(TimeDelta::days(365)), "Há 1 ano");
        assert_eq!(ago_by(TimeDelta::days(400)), "Há 1 ano");
        assert_eq!(ago_by(TimeDelta::days(800)), "Há 2 anos");
    }

    #[test]
    fn future_instants_fall_through_to_days() {
        assert_eq!(ago_by(TimeDelta::milliseconds(-500)), "Há -1 dias");
        assert_eq!(ago_by(TimeDelta::days(-3)), "Há -3 dias");
    }

    #[test]
    fn split_floors_negative_spans() {
        assert_eq!(split_days(TimeDelta::seconds(-1)), (-1, 86_399));
        assert_eq!(split_days(TimeDelta::seconds(90_061)), (1, 3_661));
    }
}
