use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryOrder, QuerySelect,
};

use super::{DaoBase, DaoResult, filter_name_contains, in_transaction};
use crate::db::entities::artist;
use crate::db::entities::prelude::Artist;

#[derive(Clone)]
pub struct ArtistDao {
    db: DatabaseConnection,
}

impl DaoBase for ArtistDao {
    type Entity = Artist;
    const ENTITY_NAME: &'static str = "artist";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn id_column() -> artist::Column {
        artist::Column::Id
    }
}

impl ArtistDao {
    pub async fn list_by_name(&self) -> DaoResult<Vec<artist::Model>> {
        Ok(Artist::find()
            .order_by_asc(artist::Column::Name)
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// The `limit` most recently listed artists, newest first.
    pub async fn recent(&self, limit: u64) -> DaoResult<Vec<artist::Model>> {
        Ok(Artist::find()
            .order_by_desc(artist::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    pub async fn search_by_name(&self, term: &str) -> DaoResult<Vec<artist::Model>> {
        let backend = self.db.get_database_backend();
        Ok(filter_name_contains(Artist::find(), artist::Column::Name, term, backend)
            .order_by_asc(artist::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn insert(&self, model: artist::ActiveModel) -> DaoResult<artist::Model> {
        in_transaction(&self.db, move |txn| {
            Box::pin(async move { Ok(model.insert(txn).await?) })
        })
        .await
    }

    pub async fn replace<F>(&self, id: i32, apply: F) -> DaoResult<artist::Model>
    where
        F: FnOnce(&mut artist::ActiveModel) + Send + 'static,
    {
        in_transaction(&self.db, move |txn| {
            Box::pin(async move {
                let existing = Artist::find_by_id(id)
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
