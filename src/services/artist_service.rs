use std::collections::HashMap;

use crate::db::dao::{ArtistDao, DaoBase, ShowDao, ShowOwner, VenueDao};
use crate::db::entities::artist;
use crate::error::AppError;
use crate::forms::ArtistForm;
use crate::services::crud_service::{CrudErrors, CrudOp, CrudService};
use crate::services::schedule;
use crate::services::view_models::{ArtistDetail, ArtistListItem, EntitySummary, SearchResults};

#[derive(Clone)]
pub struct ArtistService {
    artist_dao: ArtistDao,
    venue_dao: VenueDao,
    show_dao: ShowDao,
}

#[async_trait::async_trait]
impl CrudService for ArtistService {
    type Dao = ArtistDao;

    fn dao(&self) -> &Self::Dao {
        &self.artist_dao
    }

    fn errors(&self) -> CrudErrors {
        CrudErrors {
            create_failed: "Artist could not be listed",
            find_failed: "Artist lookup failed",
            not_found: "Artist not found",
            update_failed: "Artist could not be updated",
            delete_failed: "Artist could not be deleted",
        }
    }
}

impl ArtistService {
    pub fn new(artist_dao: ArtistDao, venue_dao: VenueDao, show_dao: ShowDao) -> Self {
        Self {
            artist_dao,
            venue_dao,
            show_dao,
        }
    }

    pub async fn list(&self) -> Result<Vec<ArtistListItem>, AppError> {
        Ok(self
            .artist_dao
            .list_by_name()
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))?
            .into_iter()
            .map(ArtistListItem::from)
            .collect())
    }

    pub async fn search(&self, term: &str) -> Result<SearchResults, AppError> {
        let artists = self
            .artist_dao
            .search_by_name(term)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))?;
        if artists.is_empty() {
            return Ok(SearchResults::new(Vec::new()));
        }

        let ids: Vec<i32> = artists.iter().map(|found| found.id).collect();
        let upcoming = self
            .show_dao
            .upcoming_counts(ShowOwner::Artist, schedule::now(), Some(ids.as_slice()))
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))?;
        Ok(SearchResults::new(
            artists
                .into_iter()
                .map(|artist| EntitySummary::new(artist.id, artist.name, &upcoming))
                .collect(),
        ))
    }

    pub async fn recent(&self, limit: u64) -> Result<Vec<artist::Model>, AppError> {
        self.artist_dao
            .recent(limit)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))
    }

    pub async fn require(&self, id: i32) -> Result<artist::Model, AppError> {
        CrudService::find_by_id(self, id).await
    }

    pub async fn detail(&self, id: i32) -> Result<ArtistDetail, AppError> {
        let artist = self.require(id).await?;
        let shows = self
            .show_dao
            .list_for(ShowOwner::Artist, id)
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))?;
        let venue_ids = schedule::distinct_ids(&shows, |show| show.venue_id);
        let venues: HashMap<i32, _> = self
            .venue_dao
            .find_many(&venue_ids)
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))?
            .into_iter()
            .map(|venue| (venue.id, venue))
            .collect();

        let appearances = schedule::appearances(
            shows,
            &venues,
            |show| show.venue_id,
            |venue| (venue.name.clone(), venue.image_link.clone()),
        );
        let (past, upcoming) = schedule::split_past_upcoming(appearances, schedule::now());
        Ok(ArtistDetail::new(artist, past, upcoming))
    }

    pub async fn create(&self, form: ArtistForm) -> Result<artist::Model, AppError> {
        let artist = self
            .artist_dao
            .insert(form.into_active_model())
            .await
            .map_err(|err| self.map_error(CrudOp::Create, err))?;
        tracing::info!(artist_id = artist.id, name = %artist.name, "artist listed");
        Ok(artist)
    }

    pub async fn update(&self, id: i32, form: ArtistForm) -> Result<artist::Model, AppError> {
        let artist = self
            .artist_dao
            .replace(id, move |active| form.apply(active))
            .await
            .map_err(|err| self.map_error(CrudOp::Update, err))?;
        tracing::info!(artist_id = artist.id, "artist updated");
        Ok(artist)
    }

    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        CrudService::delete(self, id).await?;
        tracing::info!(artist_id = id, "artist deleted");
        Ok(())
    }
}
