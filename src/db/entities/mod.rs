#[allow(unused_imports)]
pub mod prelude {
    pub use super::artist::Entity as Artist;
    pub use super::show::Entity as Show;
    pub use super::venue::Entity as Venue;
}

pub mod artist;
mod genre_list;
pub mod show;
pub mod venue;

pub use genre_list::GenreList;
