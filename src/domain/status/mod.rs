pub mod transition;

pub use transition::{apply_status, StatusKind};
