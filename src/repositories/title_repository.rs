// src/repositories/title_repository.rs
//
// Title snapshot storage
//
// The catalog is one immutable Vec<Title> behind an Arc. Every write swaps
// in a whole new Vec; readers holding an older Arc keep a consistent view.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::domain::Title;
use crate::error::AppResult;

pub trait TitleRepository: Send + Sync {
    /// The current snapshot
    fn snapshot(&self) -> AppResult<Arc<Vec<Title>>>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Title>>;
    fn exists(&self, id: Uuid) -> AppResult<bool>;
    fn count(&self) -> AppResult<usize>;
    /// Swap in `titles` as the new snapshot
    fn replace(&self, titles: Vec<Title>) -> AppResult<()>;
    /// Build the next snapshot from the current one under the write lock.
    ///
    /// `f` returns `None` to leave the store untouched.
    /// Returns whether a new snapshot was stored.
    fn modify(&self, f: &mut dyn FnMut(&[Title]) -> Option<Vec<Title>>) -> AppResult<bool>;
}

pub struct InMemoryTitleRepository {
    titles: RwLock<Arc<Vec<Title>>>,
}

impl InMemoryTitleRepository {
    pub fn new() -> Self {
        Self::with_titles(Vec::new())
    }

    pub fn with_titles(titles: Vec<Title>) -> Self {
        Self {
            titles: RwLock::new(Arc::new(titles)),
        }
    }
}

impl Default for InMemoryTitleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleRepository for InMemoryTitleRepository {
    fn snapshot(&self) -> AppResult<Arc<Vec<Title>>> {
        Ok(Arc::clone(&*self.titles.read()?))
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Title>> {
        let titles = self.titles.read()?;
        Ok(titles.iter().find(|t| t.id == id).cloned())
    }

    fn exists(&self, id: Uuid) -> AppResult<bool> {
        let titles = self.titles.read()?;
        Ok(titles.iter().any(|t| t.id == id))
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.titles.read()?.len())
    }

    fn replace(&self, titles: Vec<Title>) -> AppResult<()> {
        *self.titles.write()? = Arc::new(titles);
        Ok(())
    }

    fn modify(&self, f: &mut dyn FnMut(&[Title]) -> Option<Vec<Title>>) -> AppResult<bool> {
        let mut guard = self.titles.write()?;
        match f(guard.as_slice()) {
            Some(next) => {
                *guard = Arc::new(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
