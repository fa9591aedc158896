use std::collections::HashMap;

use crate::db::dao::{ArtistDao, DaoBase, ShowDao, VenueDao};
use crate::db::entities::show;
use crate::error::AppError;
use crate::forms::NewShow;
use crate::services::crud_service::{CrudErrors, CrudOp, CrudService};
use crate::services::schedule;
use crate::services::view_models::ShowListing;

#[derive(Clone)]
pub struct ShowService {
    show_dao: ShowDao,
    venue_dao: VenueDao,
    artist_dao: ArtistDao,
}

#[async_trait::async_trait]
impl CrudService for ShowService {
    type Dao = ShowDao;

    fn dao(&self) -> &Self::Dao {
        &self.show_dao
    }

    fn errors(&self) -> CrudErrors {
        CrudErrors {
            create_failed: "Show could not be listed",
            find_failed: "Show lookup failed",
            not_found: "Show not found",
            ..CrudErrors::default()
        }
    }
}

impl ShowService {
    pub fn new(show_dao: ShowDao, venue_dao: VenueDao, artist_dao: ArtistDao) -> Self {
        Self {
            show_dao,
            venue_dao,
            artist_dao,
        }
    }

    /// Every show with its venue and artist names, earliest first.
    pub async fn list(&self) -> Result<Vec<ShowListing>, AppError> {
        let shows = self
            .show_dao
            .list_all()
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))?;
        if shows.is_empty() {
            return Ok(Vec::new());
        }

        let venue_ids = schedule::distinct_ids(&shows, |show| show.venue_id);
        let venues: HashMap<i32, _> = self
            .venue_dao
            .find_many(&venue_ids)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))?
            .into_iter()
            .map(|venue| (venue.id, venue))
            .collect();
        let artist_ids = schedule::distinct_ids(&shows, |show| show.artist_id);
        let artists: HashMap<i32, _> = self
            .artist_dao
            .find_many(&artist_ids)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))?
            .into_iter()
            .map(|artist| (artist.id, artist))
            .collect();

        Ok(shows
            .into_iter()
            .filter_map(|show| {
                let venue = venues.get(&show.venue_id)?;
                let artist = artists.get(&show.artist_id)?;
                Some(ShowListing {
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect())
    }

    /// Inserts the show. Unknown artist or venue ids are rejected by the
    /// store's foreign keys and surface as a write failure.
    pub async fn create(&self, new_show: NewShow) -> Result<show::Model, AppError> {
        let show = self
            .show_dao
            .insert(new_show.into_active_model())
            .await
            .map_err(|err| self.map_error(CrudOp::Create, err))?;
        tracing::info!(
            show_id = show.id,
            artist_id = show.artist_id,
            venue_id = show.venue_id,
            "show listed"
        );
        Ok(show)
    }
}
