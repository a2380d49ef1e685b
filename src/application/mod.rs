// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between presentation code and the services
// - Translates between DTOs and domain entities
// - Owns the explicitly constructed AppState

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
