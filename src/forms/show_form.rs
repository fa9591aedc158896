use chrono::NaiveDateTime;
use sea_orm::Set;
use validator::{Validate, ValidationError};

use super::FormFields;
use super::choices;
use crate::datetime;
use crate::db::entities::show;

fn validate_id(raw: &str) -> Result<(), ValidationError> {
    raw.parse::<i32>().map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("id");
        err.message = Some("IDs must be whole numbers".into());
        err
    })
}

fn validate_start_time(raw: &str) -> Result<(), ValidationError> {
    datetime::parse_datetime(raw).map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("start_time");
        err.message = Some("Start time must look like 2019-05-21 21:30:00".into());
        err
    })
}

/// Raw show submission; kept as text so a rejected form can be re-rendered as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ShowForm {
    #[validate(custom(function = "validate_id"))]
    pub artist_id: String,
    #[validate(custom(function = "validate_id"))]
    pub venue_id: String,
    #[validate(custom(function = "validate_start_time"))]
    pub start_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    /// Blank form with the start time defaulted to `now`.
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self {
            start_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            ..Self::default()
        }
    }

    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id"),
            venue_id: fields.text("venue_id"),
            start_time: fields.text("start_time"),
        }
    }

    pub fn parse(&self) -> Result<NewShow, Vec<String>> {
        if let Err(errors) = self.validate() {
            return Err(choices::error_messages(&errors));
        }

        let invalid = |detail: String| vec![detail];
        Ok(NewShow {
            artist_id: self
                .artist_id
                .parse()
                .map_err(|err| invalid(format!("Invalid artist id: {err}")))?,
            venue_id: self
                .venue_id
                .parse()
                .map_err(|err| invalid(format!("Invalid venue id: {err}")))?,
            start_time: datetime::parse_datetime(&self.start_time)
                .map_err(|err| invalid(err.to_string()))?,
        })
    }
}

impl NewShow {
    pub fn into_active_model(self) -> show::ActiveModel {
        show::ActiveModel {
            artist_id: Set(self.artist_id),
            venue_id: Set(self.venue_id),
            start_time: Set(self.start_time),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{NewShow, ShowForm};

    #[test]
    fn parses_a_valid_submission() {
        let form = ShowForm {
            artist_id: "4".to_string(),
            venue_id: "1".to_string(),
            start_time: "2019-05-21 21:30:00".to_string(),
        };

        let show = form.parse().expect("form should be valid");
        assert_eq!(
            show,
            NewShow {
                artist_id: 4,
                venue_id: 1,
                start_time: NaiveDate::from_ymd_opt(2019, 5, 21)
                    .and_then(|date| date.and_hms_opt(21, 30, 0))
                    .expect("timestamp should be valid"),
            }
        );
    }

    #[test]
    fn rejects_non_numeric_ids_and_bad_times() {
        let form = ShowForm {
            artist_id: "four".to_string(),
            venue_id: "1".to_string(),
            start_time: "soon".to_string(),
        };

        let errors = form.parse().expect_err("form should be invalid");
        assert_eq!(
            errors,
            vec![
                "IDs must be whole numbers".to_string(),
                "Start time must look like 2019-05-21 21:30:00".to_string(),
            ]
        );
    }

    #[test]
    fn default_start_time_is_now() {
        let now = NaiveDate::from_ymd_opt(2024, 2, 29)
            .and_then(|date| date.and_hms_opt(8, 5, 0))
            .expect("timestamp should be valid");
        assert_eq!(ShowForm::starting_at(now).start_time, "2024-02-29 08:05:00");
    }
}
