mod error_pages;
mod panic;

pub use error_pages::error_page_middleware;
pub use panic::catch_panic_layer;
