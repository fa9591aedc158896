use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub artist_id: i32,
    #[sea_orm(indexed)]
    pub venue_id: i32,
    pub start_time: DateTime,
    #[sea_orm(belongs_to, from = "artist_id", to = "id", on_delete = "Cascade")]
    pub artist: HasOne<super::artist::Entity>,
    #[sea_orm(belongs_to, from = "venue_id", to = "id", on_delete = "Cascade")]
    pub venue: HasOne<super::venue::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
