pub mod config;
pub mod datetime;
pub mod db;
pub mod error;
pub mod forms;
pub mod logging;
pub mod routes;
pub mod services;
pub mod state;
pub mod test_helpers;
