use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryOrder, QuerySelect,
};

use super::{DaoBase, DaoResult, filter_name_contains, in_transaction};
use crate::db::entities::prelude::Venue;
use crate::db::entities::venue;

#[derive(Clone)]
pub struct VenueDao {
    db: DatabaseConnection,
}

impl DaoBase for VenueDao {
    type Entity = Venue;
    const ENTITY_NAME: &'static str = "venue";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn id_column() -> venue::Column {
        venue::Column::Id
    }
}

impl VenueDao {
    /// All venues ordered by state, then city, then name.
    pub async fn list_by_area(&self) -> DaoResult<Vec<venue::Model>> {
        Ok(Venue::find()
            .order_by_asc(venue::Column::State)
            .order_by_asc(venue::Column::City)
            .order_by_asc(venue::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// The `limit` most recently listed venues, newest first.
    pub async fn recent(&self, limit: u64) -> DaoResult<Vec<venue::Model>> {
        Ok(Venue::find()
            .order_by_desc(venue::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    pub async fn search_by_name(&self, term: &str) -> DaoResult<Vec<venue::Model>> {
        let backend = self.db.get_database_backend();
        Ok(filter_name_contains(Venue::find(), venue::Column::Name, term, backend)
            .order_by_asc(venue::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn insert(&self, model: venue::ActiveModel) -> DaoResult<venue::Model> {
        in_transaction(&self.db, move |txn| {
            Box::pin(async move { Ok(model.insert(txn).await?) })
        })
        .await
    }

    /// Loads the venue, lets `apply` overwrite its fields and saves it in one transaction.
    pub async fn replace<F>(&self, id: i32, apply: F) -> DaoResult<venue::Model>
    where
        F: FnOnce(&mut venue::ActiveModel) + Send + 'static,
    {
        in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let existing = Venue::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_else(|| Self::not_found(id))?;
                let mut active = existing.into_active_model();
                apply(&mut active);
                Ok(active.update(txn).await?)
            })
        })
        .await
    }
}
