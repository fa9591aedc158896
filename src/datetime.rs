use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Named display formats for show start times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatetimePreset {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    #[default]
    Medium,
}

impl DatetimePreset {
    fn pattern(self) -> &'static str {
        match self {
            Self::Full => "%A %B, %-d, %Y at %-I:%M%p",
            Self::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

impl FromStr for DatetimePreset {
    type Err = DatetimeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "medium" => Ok(Self::Medium),
            _ => Err(DatetimeError::UnknownPreset(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatetimeError {
    #[error("Unknown datetime format: {0}")]
    UnknownPreset(String),
    #[error("Unrecognized datetime: {0}")]
    Unparseable(String),
}

/// A value the formatter accepts: a stored timestamp or its text form.
#[derive(Debug, Clone, Copy)]
pub enum DatetimeInput<'a> {
    Naive(NaiveDateTime),
    Text(&'a str),
}

impl From<NaiveDateTime> for DatetimeInput<'_> {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl<'a> From<&'a str> for DatetimeInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// Parses RFC 3339 (offset dropped, wall clock kept), `YYYY-MM-DD[ T]HH:MM[:SS[.f]]`
/// or a bare `YYYY-MM-DD` (midnight).
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, DatetimeError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DatetimeError::Unparseable(raw.to_string()))
}

fn format_naive(value: NaiveDateTime, preset: DatetimePreset) -> String {
    value.format(preset.pattern()).to_string()
}

pub fn format_datetime<'a>(
    value: impl Into<DatetimeInput<'a>>,
    preset: DatetimePreset,
) -> Result<String, DatetimeError> {
    let value = match value.into() {
        DatetimeInput::Naive(value) => value,
        DatetimeInput::Text(raw) => parse_datetime(raw)?,
    };
    Ok(format_naive(value, preset))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::{DatetimeError, DatetimePreset, format_datetime, parse_datetime};

    fn may_21_2019_930pm() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 5, 21)
            .and_then(|date| date.and_hms_opt(21, 30, 0))
            .expect("timestamp should be valid")
    }

    #[test]
    fn full_preset_spells_out_day_and_month() {
        let formatted = format_datetime(may_21_2019_930pm(), DatetimePreset::Full)
            .expect("format should succeed");
        assert_eq!(formatted, "Tuesday May, 21, 2019 at 9:30PM");
    }

    #[test]
    fn medium_preset_is_the_default() {
        let formatted = format_datetime(may_21_2019_930pm(), DatetimePreset::default())
            .expect("format should succeed");
        assert_eq!(formatted, "Tue 05, 21, 2019 9:30PM");
    }

    #[test]
    fn string_inputs_are_parsed_first() {
        for raw in [
            "2019-05-21T21:30:00.000Z",
            "2019-05-21 21:30:00",
            "2019-05-21T21:30",
            "2019-05-21 21:30",
        ] {
            let formatted =
                format_datetime(raw, DatetimePreset::Medium).expect("format should succeed");
            assert_eq!(formatted, "Tue 05, 21, 2019 9:30PM", "input {raw}");
        }
    }

    #[test]
    fn bare_dates_parse_as_midnight() {
        let parsed = parse_datetime("2035-04-01").expect("date should parse");
        assert_eq!(
            format_datetime(parsed, DatetimePreset::Full).expect("format should succeed"),
            "Sunday April, 1, 2035 at 12:00AM"
        );
    }

    #[test]
    fn rejects_garbage_and_unknown_presets() {
        assert_eq!(
            parse_datetime("next tuesday"),
            Err(DatetimeError::Unparseable("next tuesday".to_string()))
        );
        assert!("short".parse::<DatetimePreset>().is_err());
        assert_eq!("FULL".parse::<DatetimePreset>(), Ok(DatetimePreset::Full));
    }
}
