mod artist_form;
pub mod choices;
mod fields;
mod show_form;
mod venue_form;

pub use artist_form::ArtistForm;
pub use choices::SelectOption;
pub use fields::FormFields;
pub use show_form::{NewShow, ShowForm};
pub use venue_form::VenueForm;
