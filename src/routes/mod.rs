mod entry;
pub mod middleware;
pub mod views;

pub use entry::router;
pub use middleware::{catch_panic_layer, error_page_middleware};
