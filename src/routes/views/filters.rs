//! Template filters, in scope for every page module that renders show times.

use std::fmt::Display;

use crate::datetime::{DatetimePreset, format_datetime};

/// `{{ show.start_time|datetime("full") }}`; the preset is `full` or `medium`.
#[askama::filter_fn]
pub fn datetime<T: Display>(
    value: T,
    _: &dyn askama::Values,
    preset: &str,
) -> askama::Result<String> {
    let preset: DatetimePreset = preset.parse().map_err(askama::Error::custom)?;
    format_datetime(value.to_string().as_str(), preset).map_err(askama::Error::custom)
}
