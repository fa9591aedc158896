use sea_orm::entity::prelude::*;

use super::GenreList;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: GenreList,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    #[sea_orm(default_value = false)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    #[sea_orm(has_many)]
    pub shows: HasMany<super::show::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
