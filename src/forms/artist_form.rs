use sea_orm::Set;
use validator::Validate;

use super::choices::{self, GENRES, PHONE_RE, STATES, SelectOption, validate_genres, validate_state};
use super::FormFields;
use crate::db::entities::{GenreList, artist};

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ArtistForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[validate(regex(path = *PHONE_RE, message = "Phone must be a valid phone number"))]
    pub phone: Option<String>,
    #[validate(url(message = "Image link must be a valid URL"))]
    pub image_link: Option<String>,
    #[validate(custom(function = "validate_genres"))]
    pub genres: Vec<String>,
    #[validate(url(message = "Facebook link must be a valid URL"))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Website link must be a valid URL"))]
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.optional("phone"),
            image_link: fields.optional("image_link"),
            genres: fields.all("genres"),
            facebook_link: fields.optional("facebook_link"),
            website_link: fields.optional("website_link"),
            seeking_venue: fields.flag("seeking_venue"),
            seeking_description: fields.optional("seeking_description"),
        }
    }

    pub fn from_model(model: &artist::Model) -> Self {
        Self {
            name: model.name.clone(),
            city: model.city.clone(),
            state: model.state.clone(),
            phone: model.phone.clone(),
            image_link: model.image_link.clone(),
            genres: model.genres.as_slice().to_vec(),
            facebook_link: model.facebook_link.clone(),
            website_link: model.website_link.clone(),
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description.clone(),
        }
    }

    /// Validation messages for the submission, ordered by field.
    pub fn check(&self) -> Result<(), Vec<String>> {
        self.validate()
            .map_err(|errors| choices::error_messages(&errors))
    }

    pub fn apply(self, active: &mut artist::ActiveModel) {
        active.name = Set(self.name);
        active.city = Set(self.city);
        active.state = Set(self.state);
        active.phone = Set(self.phone);
        active.image_link = Set(self.image_link);
        active.genres = Set(GenreList::from(self.genres));
        active.facebook_link = Set(self.facebook_link);
        active.website_link = Set(self.website_link);
        active.seeking_venue = Set(self.seeking_venue);
        active.seeking_description = Set(self.seeking_description);
    }

    pub fn into_active_model(self) -> artist::ActiveModel {
        let mut active = artist::ActiveModel::default();
        self.apply(&mut active);
        active
    }

    pub fn state_options(&self) -> Vec<SelectOption> {
        choices::options(STATES, std::slice::from_ref(&self.state))
    }

    pub fn genre_options(&self) -> Vec<SelectOption> {
        choices::options(GENRES, &self.genres)
    }
}
