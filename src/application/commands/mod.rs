// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Errors leave as JSON-encoded ErrorResponse strings
// - Commands NEVER contain business logic

pub mod search_commands;
pub mod statistics_commands;
pub mod title_commands;

#[cfg(test)]
mod command_tests;

pub use search_commands::*;
pub use statistics_commands::*;
pub use title_commands::*;
