pub mod artist_dao;
pub mod base;
mod context;
pub mod error;
pub mod show_dao;
pub mod venue_dao;

pub use artist_dao::ArtistDao;
pub use base::{DaoBase, filter_name_contains, in_transaction};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use show_dao::{ShowDao, ShowOwner};
pub use venue_dao::VenueDao;
