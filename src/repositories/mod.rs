// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB snapshot holders
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - Writes replace the whole snapshot, never an element in place

pub mod title_repository;

pub use title_repository::{InMemoryTitleRepository, TitleRepository};
