pub mod entity;
pub mod invariants;

pub use entity::{Gender, PublicationStatus, ReadingStatus, StatusFlags, Title, Weekday};
pub use invariants::validate_title;
