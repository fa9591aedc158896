use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidationError, ValidationErrors};

pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Optional `+`, then 7 to 15 digits with `-`, `.`, space or parentheses between them.
pub static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[\s().-]*(?:[0-9][\s().-]*){7,15}$").expect("valid regex")
});

/// One `<option>` of a select box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub selected: bool,
}

pub fn options(choices: &'static [&'static str], selected: &[String]) -> Vec<SelectOption> {
    choices
        .iter()
        .map(|value| SelectOption {
            value,
            selected: selected.iter().any(|chosen| chosen == value),
        })
        .collect()
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn validate_state(state: &str) -> Result<(), ValidationError> {
    if state.is_empty() {
        return Err(invalid("required", "State is required"));
    }
    if !STATES.contains(&state) {
        return Err(invalid("state", "State must be a US state code"));
    }
    Ok(())
}

pub fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.is_empty() {
        return Err(invalid("required", "Pick at least one genre"));
    }
    if genres.iter().any(|genre| !GENRES.contains(&genre.as_str())) {
        return Err(invalid("genre", "Genres must come from the offered list"));
    }
    Ok(())
}

/// Flattens validation failures into display messages, ordered by field name.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut by_field: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            let messages = errs
                .iter()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
                .collect();
            (field, messages)
        })
        .collect();
    by_field.sort_by(|a, b| a.0.cmp(&b.0));
    by_field.into_iter().flat_map(|(_, messages)| messages).collect()
}
