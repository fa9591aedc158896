use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::db::entities::{artist, venue};

/// A venue or artist with the number of its shows still to come.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySummary {
    pub id: i32,
    pub name: String,
    pub upcoming_show_count: u64,
}

impl EntitySummary {
    pub fn new(id: i32, name: String, upcoming: &HashMap<i32, u64>) -> Self {
        Self {
            id,
            name,
            upcoming_show_count: upcoming.get(&id).copied().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<EntitySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub results: Vec<EntitySummary>,
}

impl SearchResults {
    pub fn new(results: Vec<EntitySummary>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistListItem {
    pub id: i32,
    pub name: String,
}

impl From<artist::Model> for ArtistListItem {
    fn from(model: artist::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// One show on a detail page, described by the other party: the artist on a
/// venue page, the venue on an artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowAppearance {
    pub id: i32,
    pub name: String,
    pub image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ShowAppearance>,
    pub upcoming_shows: Vec<ShowAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(
        venue: venue::Model,
        past_shows: Vec<ShowAppearance>,
        upcoming_shows: Vec<ShowAppearance>,
    ) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres.into_inner(),
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website_link: venue.website_link,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ShowAppearance>,
    pub upcoming_shows: Vec<ShowAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(
        artist: artist::Model,
        past_shows: Vec<ShowAppearance>,
        upcoming_shows: Vec<ShowAppearance>,
    ) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres.into_inner(),
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website_link: artist.website_link,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
