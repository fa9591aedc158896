use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect,
};

use super::{DaoBase, DaoResult, in_transaction};
use crate::db::entities::prelude::Show;
use crate::db::entities::show;

/// Which side of a show a query is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOwner {
    Venue,
    Artist,
}

impl ShowOwner {
    fn column(self) -> show::Column {
        match self {
            Self::Venue => show::Column::VenueId,
            Self::Artist => show::Column::ArtistId,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct OwnerShowCount {
    owner_id: i32,
    upcoming: i64,
}

#[derive(Clone)]
pub struct ShowDao {
    db: DatabaseConnection,
}

impl DaoBase for ShowDao {
    type Entity = Show;
    const ENTITY_NAME: &'static str = "show";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn id_column() -> show::Column {
        show::Column::Id
    }
}

impl ShowDao {
    /// Number of shows starting after `now`, keyed by venue or artist id.
    /// `only` narrows the count to those owners. Owners without upcoming
    /// shows are absent from the map.
    pub async fn upcoming_counts(
        &self,
        owner: ShowOwner,
        now: NaiveDateTime,
        only: Option<&[i32]>,
    ) -> DaoResult<HashMap<i32, u64>> {
        let column = owner.column();
        let mut query = Show::find()
            .select_only()
            .column_as(column, "owner_id")
            .column_as(show::Column::Id.count(), "upcoming")
            .filter(show::Column::StartTime.gt(now));
        if let Some(ids) = only {
            query = query.filter(column.is_in(ids.to_vec()));
        }

        let rows = query
            .group_by(column)
            .into_model::<OwnerShowCount>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.owner_id, u64::try_from(row.upcoming).unwrap_or(0)))
            .collect())
    }

    pub async fn list_for(&self, owner: ShowOwner, id: i32) -> DaoResult<Vec<show::Model>> {
        Ok(Show::find()
            .filter(owner.column().eq(id))
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await?)
    }

    pub async fn list_all(&self) -> DaoResult<Vec<show::Model>> {
        Ok(Show::find()
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn insert(&self, model: show::ActiveModel) -> DaoResult<show::Model> {
        in_transaction(&self.db, move |txn| {
            Box::pin(async move { Ok(model.insert(txn).await?) })
        })
        .await
    }
}
