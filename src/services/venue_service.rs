use std::collections::{BTreeMap, HashMap};

use crate::db::dao::{ArtistDao, DaoBase, ShowDao, ShowOwner, VenueDao};
use crate::db::entities::venue;
use crate::error::AppError;
use crate::forms::VenueForm;
use crate::services::crud_service::{CrudErrors, CrudOp, CrudService};
use crate::services::schedule;
use crate::services::view_models::{CityArea, EntitySummary, SearchResults, VenueDetail};

#[derive(Clone)]
pub struct VenueService {
    venue_dao: VenueDao,
    artist_dao: ArtistDao,
    show_dao: ShowDao,
}

#[async_trait::async_trait]
impl CrudService for VenueService {
    type Dao = VenueDao;

    fn dao(&self) -> &Self::Dao {
        &self.venue_dao
    }

    fn errors(&self) -> CrudErrors {
        CrudErrors {
            create_failed: "Venue could not be listed",
            find_failed: "Venue lookup failed",
            not_found: "Venue not found",
            update_failed: "Venue could not be updated",
            delete_failed: "Venue could not be deleted",
        }
    }
}

impl VenueService {
    pub fn new(venue_dao: VenueDao, artist_dao: ArtistDao, show_dao: ShowDao) -> Self {
        Self {
            venue_dao,
            artist_dao,
            show_dao,
        }
    }

    /// Every venue grouped by (state, city) with its upcoming show count.
    pub async fn list_areas(&self) -> Result<Vec<CityArea>, AppError> {
        let venues = self
            .venue_dao
            .list_by_area()
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))?;
        if venues.is_empty() {
            return Ok(Vec::new());
        }

        let upcoming = self
            .show_dao
            .upcoming_counts(ShowOwner::Venue, schedule::now(), None)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))?;
        Ok(group_by_area(venues, &upcoming))
    }

    pub async fn search(&self, term: &str) -> Result<SearchResults, AppError> {
        let venues = self
            .venue_dao
            .search_by_name(term)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))?;
        if venues.is_empty() {
            return Ok(SearchResults::new(Vec::new()));
        }

        let ids: Vec<i32> = venues.iter().map(|found| found.id).collect();
        let upcoming = self
            .show_dao
            .upcoming_counts(ShowOwner::Venue, schedule::now(), Some(ids.as_slice()))
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))?;
        Ok(SearchResults::new(
            venues
                .into_iter()
                .map(|venue| EntitySummary::new(venue.id, venue.name, &upcoming))
                .collect(),
        ))
    }

    pub async fn recent(&self, limit: u64) -> Result<Vec<venue::Model>, AppError> {
        self.venue_dao
            .recent(limit)
            .await
            .map_err(|err| self.map_error(CrudOp::List, err))
    }

    pub async fn require(&self, id: i32) -> Result<venue::Model, AppError> {
        CrudService::find_by_id(self, id).await
    }

    pub async fn detail(&self, id: i32) -> Result<VenueDetail, AppError> {
        let venue = self.require(id).await?;
        let shows = self
            .show_dao
            .list_for(ShowOwner::Venue, id)
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))?;
        let artist_ids = schedule::distinct_ids(&shows, |show| show.artist_id);
        let artists: HashMap<i32, _> = self
            .artist_dao
            .find_many(&artist_ids)
            .await
            .map_err(|err| self.map_error(CrudOp::Find, err))?
            .into_iter()
            .map(|artist| (artist.id, artist))
            .collect();

        let appearances = schedule::appearances(
            shows,
            &artists,
            |show| show.artist_id,
            |artist| (artist.name.clone(), artist.image_link.clone()),
        );
        let (past, upcoming) = schedule::split_past_upcoming(appearances, schedule::now());
        Ok(VenueDetail::new(venue, past, upcoming))
    }

    pub async fn create(&self, form: VenueForm) -> Result<venue::Model, AppError> {
        let venue = self
            .venue_dao
            .insert(form.into_active_model())
            .await
            .map_err(|err| self.map_error(CrudOp::Create, err))?;
        tracing::info!(venue_id = venue.id, name = %venue.name, "venue listed");
        Ok(venue)
    }

    /// Replaces every field of venue `id` with the form's values.
    pub async fn update(&self, id: i32, form: VenueForm) -> Result<venue::Model, AppError> {
        let venue = self
            .venue_dao
            .replace(id, move |active| form.apply(active))
            .await
            .map_err(|err| self.map_error(CrudOp::Update, err))?;
        tracing::info!(venue_id = venue.id, "venue updated");
        Ok(venue)
    }

    /// Deletes the venue; its shows go with it.
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        CrudService::delete(self, id).await?;
        tracing::info!(venue_id = id, "venue deleted");
        Ok(())
    }
}

/// Buckets venues by (state, city); each venue lands in exactly the group
/// matching its own location. Input order is kept within a group.
pub fn group_by_area(venues: Vec<venue::Model>, upcoming: &HashMap<i32, u64>) -> Vec<CityArea> {
    let mut areas: BTreeMap<(String, String), Vec<EntitySummary>> = BTreeMap::new();
    for venue in venues {
        areas
            .entry((venue.state, venue.city))
            .or_default()
            .push(EntitySummary::new(venue.id, venue.name, upcoming));
    }

    areas
        .into_iter()
        .map(|((state, city), venues)| CityArea {
            city,
            state,
            venues,
        })
        .collect()
}
