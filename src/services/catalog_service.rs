// src/services/catalog_service.rs
//
// Catalog Store
//
// The only sanctioned mutation surface for the Title list.
// - Every mutation builds a new snapshot; the previous one is never touched
// - Unknown Title or Chapter ids are absorbed as no-ops
// - Notices come from the mutation input and the snapshot it produced

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::domain::search::{available_categories, available_countries};
use crate::domain::{
    apply_status, filter_catalog, validate_title, DomainError, FacetValue, FilterOptions,
    StatusKind, Title,
};
use crate::error::AppResult;
use crate::events::{
    ChapterReadChanged, EventBus, FavoriteToggled, FiltersChanged, ReadingStatusChanged,
    TitleAdded, TitleRemoved, TitleUpdated,
};
use crate::infrastructure::Clock;
use crate::repositories::TitleRepository;
use crate::seed::SeedProvider;

/// Facet option lists for the filter sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub countries: Vec<String>,
}

pub struct CatalogService {
    title_repo: Arc<dyn TitleRepository>,
    event_bus: Arc<EventBus>,
    clock: Arc<dyn Clock>,
    filters: RwLock<FilterOptions>,
}

/// Copy `current`, replacing the Title with `id` by `change(title)`.
/// `None` when no Title has that id or `change` declines.
fn replace_title(
    current: &[Title],
    id: Uuid,
    change: impl FnOnce(&Title) -> Option<Title>,
) -> Option<Vec<Title>> {
    let index = current.iter().position(|t| t.id == id)?;
    let updated = change(&current[index])?;
    let mut next = current.to_vec();
    next[index] = updated;
    Some(next)
}

impl CatalogService {
    pub fn new(
        title_repo: Arc<dyn TitleRepository>,
        event_bus: Arc<EventBus>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            title_repo,
            event_bus,
            clock,
            filters: RwLock::new(FilterOptions::default()),
        }
    }

    /// Populate the catalog from `provider`, replacing whatever is there.
    /// Rejects the whole batch if any Title is invalid or ids collide.
    pub fn seed(&self, provider: &dyn SeedProvider) -> AppResult<usize> {
        let titles = provider.load()?;

        let mut seen = HashSet::new();
        for title in &titles {
            validate_title(title)?;
            if !seen.insert(title.id) {
                return Err(DomainError::DuplicateId(title.id.to_string()).into());
            }
        }

        let count = titles.len();
        self.title_repo.replace(titles)?;
        log::info!("Catalog seeded with {} titles", count);
        Ok(count)
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// The current canonical snapshot
    pub fn titles(&self) -> AppResult<Arc<Vec<Title>>> {
        self.title_repo.snapshot()
    }

    pub fn get_title(&self, id: Uuid) -> AppResult<Option<Title>> {
        self.title_repo.get_by_id(id)
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    pub fn add_title(&self, title: Title) -> AppResult<Uuid> {
        validate_title(&title)?;

        let id = title.id;
        let name = title.title.clone();
        let mut pending = Some(title);
        let added = self.title_repo.modify(&mut |current| {
            if current.iter().any(|t| t.id == id) {
                return None;
            }
            let mut next = current.to_vec();
            next.extend(pending.take());
            Some(next)
        })?;

        if !added {
            log::warn!("Rejected duplicate title id {}", id);
            return Err(DomainError::DuplicateId(id.to_string()).into());
        }

        log::debug!("Added title {} ({})", name, id);
        self.event_bus.emit(TitleAdded::new(id, name, self.clock.now()));
        Ok(id)
    }

    pub fn remove_title(&self, id: Uuid) -> AppResult<()> {
        let mut removed_name = None;
        self.title_repo.modify(&mut |current| {
            let index = current.iter().position(|t| t.id == id)?;
            let mut next = current.to_vec();
            removed_name = Some(next.remove(index).title);
            Some(next)
        })?;

        match removed_name {
            Some(name) => {
                log::debug!("Removed title {} ({})", name, id);
                self.event_bus.emit(TitleRemoved::new(id, name, self.clock.now()));
            }
            None => log::debug!("remove_title: no title {}, nothing to do", id),
        }
        Ok(())
    }

    /// Replace the Title with the same id wholesale
    pub fn update_title(&self, title: Title) -> AppResult<()> {
        validate_title(&title)?;

        let id = title.id;
        let name = title.title.clone();
        let mut pending = Some(title);
        let updated = self
            .title_repo
            .modify(&mut |current| {
                replace_title(current, id, |existing| {
                    let mut next = pending.take()?;
                    // The drop note outlives the drop itself
                    if next.last_drop_note.is_none() {
                        next.last_drop_note = existing.last_drop_note.clone();
                    }
                    Some(next)
                })
            })?;

        if updated {
            log::debug!("Updated title {} ({})", name, id);
            self.event_bus.emit(TitleUpdated::new(id, name, self.clock.now()));
        } else {
            log::debug!("update_title: no title {}, nothing to do", id);
        }
        Ok(())
    }

    pub fn set_chapter_read(
        &self,
        title_id: Uuid,
        chapter_id: Uuid,
        is_read: bool,
    ) -> AppResult<()> {
        let now = self.clock.now();
        let mut changed = None;

        self.title_repo.modify(&mut |current| {
            replace_title(current, title_id, |title| {
                let mut next = title.clone();
                let chapter = next.chapters.iter_mut().find(|c| c.id == chapter_id)?;
                chapter.set_read(is_read, now);
                changed = Some((next.title.clone(), chapter.number));
                Some(next)
            })
        })?;

        match changed {
            Some((name, number)) => {
                log::debug!("Chapter {} of {} read={}", number, name, is_read);
                self.event_bus.emit(ChapterReadChanged::new(
                    title_id, chapter_id, name, number, is_read, now,
                ));
            }
            None => log::warn!(
                "set_chapter_read: stale reference {}/{}, ignored",
                title_id,
                chapter_id
            ),
        }
        Ok(())
    }

    pub fn set_status(
        &self,
        title_id: Uuid,
        status: StatusKind,
        value: bool,
        note: Option<String>,
    ) -> AppResult<()> {
        let mut pending_note = note;
        let mut changed_name = None;

        self.title_repo.modify(&mut |current| {
            replace_title(current, title_id, |title| {
                changed_name = Some(title.title.clone());
                Some(apply_status(title, status, value, pending_note.take()))
            })
        })?;

        match changed_name {
            Some(name) => {
                log::debug!("{}: {} -> {}", name, status, value);
                self.event_bus.emit(ReadingStatusChanged::new(
                    title_id,
                    name,
                    status,
                    value,
                    self.clock.now(),
                ));
            }
            None => log::warn!("set_status: no title {}, ignored", title_id),
        }
        Ok(())
    }

    pub fn toggle_favorite(&self, title_id: Uuid) -> AppResult<()> {
        let mut changed = None;

        self.title_repo.modify(&mut |current| {
            replace_title(current, title_id, |title| {
                let mut next = title.clone();
                next.favorite = !next.favorite;
                changed = Some((next.title.clone(), next.favorite));
                Some(next)
            })
        })?;

        match changed {
            Some((name, favorite)) => {
                log::debug!("{}: favorite -> {}", name, favorite);
                self.event_bus.emit(FavoriteToggled::new(
                    title_id,
                    name,
                    favorite,
                    self.clock.now(),
                ));
            }
            None => log::warn!("toggle_favorite: no title {}, ignored", title_id),
        }
        Ok(())
    }

    // ========================================================================
    // FILTER STATE
    // ========================================================================

    pub fn current_filters(&self) -> AppResult<FilterOptions> {
        Ok(self.filters.read()?.clone())
    }

    /// Set the free-text query, keeping facet selections
    pub fn search(&self, query: &str) -> AppResult<Vec<Title>> {
        self.update_filters(|filters| filters.query = query.to_string())?;
        self.filtered_titles()
    }

    pub fn apply_filters(&self, options: FilterOptions) -> AppResult<Vec<Title>> {
        self.update_filters(|filters| *filters = options)?;
        self.filtered_titles()
    }

    pub fn toggle_filter(&self, value: FacetValue, checked: bool) -> AppResult<Vec<Title>> {
        self.update_filters(|filters| filters.toggle(value, checked))?;
        self.filtered_titles()
    }

    pub fn clear_filters(&self) -> AppResult<Vec<Title>> {
        self.update_filters(|filters| *filters = FilterOptions::default())?;
        self.filtered_titles()
    }

    /// The current filter applied to the current snapshot
    pub fn filtered_titles(&self) -> AppResult<Vec<Title>> {
        let titles = self.title_repo.snapshot()?;
        let filters = self.filters.read()?;
        Ok(filter_catalog(&titles, &filters))
    }

    pub fn facet_options(&self) -> AppResult<FacetOptions> {
        let titles = self.title_repo.snapshot()?;
        Ok(FacetOptions {
            categories: available_categories(&titles),
            countries: available_countries(&titles),
        })
    }

    fn update_filters(&self, change: impl FnOnce(&mut FilterOptions)) -> AppResult<()> {
        let snapshot = {
            let mut filters = self.filters.write()?;
            change(&mut filters);
            filters.clone()
        };
        log::debug!("Filters now {} active", snapshot.active_filter_count());
        self.event_bus
            .emit(FiltersChanged::new(snapshot, self.clock.now()));
        Ok(())
    }
}
