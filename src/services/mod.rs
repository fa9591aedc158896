pub mod artist_service;
pub mod context;
pub mod crud_service;
pub mod schedule;
pub mod show_service;
pub mod venue_service;
pub mod view_models;

pub use context::ServiceContext;
