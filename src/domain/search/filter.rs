// src/domain/search/filter.rs
//
// Search & Filter Engine
//
// - Stateless: takes a list of Titles and FilterOptions, returns the subset
// - Every facet is a whitelist; an empty selection means "no constraint"
// - All constraints are AND-combined, values inside one facet are OR-combined
// - Stable: input order is preserved, nothing is re-sorted

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::title::{Gender, Title, Weekday};

/// Free-text query plus one selection list per facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterOptions {
    pub query: String,
    pub gender: Vec<Gender>,
    pub categories: Vec<String>,
    pub country: Vec<String>,
    pub release_day: Vec<Weekday>,
}

/// The four facets a Title can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetKind {
    Gender,
    Categories,
    Country,
    ReleaseDay,
}

/// A single selectable value, tagged with the facet it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "facet", content = "value", rename_all = "camelCase")]
pub enum FacetValue {
    Gender(Gender),
    Category(String),
    Country(String),
    ReleaseDay(Weekday),
}

/// A borrowed view of one facet's selection list
#[derive(Debug, Clone, Copy)]
pub enum FacetFilter<'a> {
    Gender(&'a [Gender]),
    Categories(&'a [String]),
    Country(&'a [String]),
    ReleaseDay(&'a [Weekday]),
}

impl FacetFilter<'_> {
    pub fn is_unconstrained(&self) -> bool {
        match self {
            FacetFilter::Gender(s) => s.is_empty(),
            FacetFilter::Categories(s) => s.is_empty(),
            FacetFilter::Country(s) => s.is_empty(),
            FacetFilter::ReleaseDay(s) => s.is_empty(),
        }
    }

    /// Whether `title` passes this facet
    pub fn admits(&self, title: &Title) -> bool {
        if self.is_unconstrained() {
            return true;
        }
        match self {
            FacetFilter::Gender(selected) => selected.contains(&title.gender),
            FacetFilter::Categories(selected) => title
                .categories
                .iter()
                .any(|category| selected.contains(category)),
            FacetFilter::Country(selected) => selected.contains(&title.country),
            FacetFilter::ReleaseDay(selected) => selected.contains(&title.release_day),
        }
    }
}

impl FilterOptions {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// No query and no facet selection
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.facets().iter().all(|f| f.is_unconstrained())
    }

    /// One for a non-blank query plus one per selected facet value
    pub fn active_filter_count(&self) -> usize {
        let query = usize::from(!self.query.trim().is_empty());
        query
            + self.gender.len()
            + self.categories.len()
            + self.country.len()
            + self.release_day.len()
    }

    pub fn facets(&self) -> [FacetFilter<'_>; 4] {
        [
            FacetFilter::Gender(&self.gender),
            FacetFilter::Categories(&self.categories),
            FacetFilter::Country(&self.country),
            FacetFilter::ReleaseDay(&self.release_day),
        ]
    }

    /// Select (`checked == true`) or deselect a facet value.
    /// Selecting an already selected value does not duplicate it.
    pub fn toggle(&mut self, value: FacetValue, checked: bool) {
        if checked {
            match value {
                FacetValue::Gender(g) => push_unique(&mut self.gender, g),
                FacetValue::Category(c) => push_unique(&mut self.categories, c),
                FacetValue::Country(c) => push_unique(&mut self.country, c),
                FacetValue::ReleaseDay(d) => push_unique(&mut self.release_day, d),
            }
        } else {
            self.remove_value(&value);
        }
    }

    pub fn remove_value(&mut self, value: &FacetValue) {
        match value {
            FacetValue::Gender(g) => self.gender.retain(|v| v != g),
            FacetValue::Category(c) => self.categories.retain(|v| v != c),
            FacetValue::Country(c) => self.country.retain(|v| v != c),
            FacetValue::ReleaseDay(d) => self.release_day.retain(|v| v != d),
        }
    }

    pub fn clear_facet(&mut self, kind: FacetKind) {
        match kind {
            FacetKind::Gender => self.gender.clear(),
            FacetKind::Categories => self.categories.clear(),
            FacetKind::Country => self.country.clear(),
            FacetKind::ReleaseDay => self.release_day.clear(),
        }
    }

    /// Whether `title` satisfies the query and every facet
    pub fn matches(&self, title: &Title) -> bool {
        matches_query(title, &self.query) && self.facets().iter().all(|f| f.admits(title))
    }
}

impl FacetValue {
    pub fn kind(&self) -> FacetKind {
        match self {
            FacetValue::Gender(_) => FacetKind::Gender,
            FacetValue::Category(_) => FacetKind::Categories,
            FacetValue::Country(_) => FacetKind::Country,
            FacetValue::ReleaseDay(_) => FacetKind::ReleaseDay,
        }
    }
}

fn push_unique<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Case-insensitive substring match on title, author and illustrator
fn matches_query(title: &Title, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [&title.title, &title.author, &title.illustrator]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Compute the filtered subset of `titles`, preserving input order
pub fn filter_catalog(titles: &[Title], options: &FilterOptions) -> Vec<Title> {
    titles
        .iter()
        .filter(|title| options.matches(title))
        .cloned()
        .collect()
}

/// Every category used in the catalog, sorted and de-duplicated
pub fn available_categories(titles: &[Title]) -> Vec<String> {
    titles
        .iter()
        .flat_map(|t| t.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every country used in the catalog, sorted and de-duplicated
pub fn available_countries(titles: &[Title]) -> Vec<String> {
    titles
        .iter()
        .map(|t| t.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(
        name: &str,
        author: &str,
        gender: Gender,
        country: &str,
        day: Weekday,
        categories: &[&str],
    ) -> Title {
        let mut t = Title::new(name.to_string(), author.to_string(), gender, day);
        t.country = country.to_string();
        t.categories = categories.iter().map(|c| c.to_string()).collect();
        t
    }

    fn catalog() -> Vec<Title> {
        vec![
            title(
                "Solo Leveling",
                "Chugong",
                Gender::Straight,
                "South Korea",
                Weekday::Wednesday,
                &["Action", "Fantasy"],
            ),
            title(
                "Heartstopper",
                "Alice Oseman",
                Gender::Yaoi,
                "United Kingdom",
                Weekday::Tuesday,
                &["Romance", "Drama"],
            ),
            title(
                "Bloom Into You",
                "Nio Nakatani",
                Gender::Yuri,
                "Japan",
                Weekday::Thursday,
                &["Romance", "School Life"],
            ),
        ]
    }

    fn names(titles: &[Title]) -> Vec<&str> {
        titles.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_identity_law() {
        let list = catalog();
        let result = filter_catalog(&list, &FilterOptions::default());
        assert_eq!(result, list);
    }

    #[test]
    fn test_blank_query_is_no_constraint() {
        let list = catalog();
        let options = FilterOptions::default().with_query("   ");
        assert_eq!(filter_catalog(&list, &options).len(), 3);
        assert!(options.is_empty());
    }

    #[test]
    fn test_gender_intersection_preserves_order() {
        let list = catalog();
        let options = FilterOptions {
            gender: vec![Gender::Yuri, Gender::Yaoi],
            ..Default::default()
        };
        assert_eq!(names(&filter_catalog(&list, &options)), vec!["Heartstopper", "Bloom Into You"]);
    }

    #[test]
    fn test_query_matches_author_case_insensitive() {
        let list = catalog();
        let options = FilterOptions::default().with_query("OSEMAN");
        assert_eq!(names(&filter_catalog(&list, &options)), vec!["Heartstopper"]);
    }

    #[test]
    fn test_query_matches_illustrator() {
        let mut list = catalog();
        list[0].illustrator = "Jang Sung-rak".to_string();
        let options = FilterOptions::default().with_query("sung-rak");
        assert_eq!(names(&filter_catalog(&list, &options)), vec!["Solo Leveling"]);
    }

    #[test]
    fn test_categories_are_or_within_facet() {
        let list = catalog();
        let options = FilterOptions {
            categories: vec!["Fantasy".to_string(), "School Life".to_string()],
            ..Default::default()
        };
        assert_eq!(
            names(&filter_catalog(&list, &options)),
            vec!["Solo Leveling", "Bloom Into You"]
        );
    }

    #[test]
    fn test_facets_are_and_combined() {
        let list = catalog();
        let options = FilterOptions {
            categories: vec!["Romance".to_string()],
            country: vec!["Japan".to_string()],
            ..Default::default()
        };
        assert_eq!(names(&filter_catalog(&list, &options)), vec!["Bloom Into You"]);

        let options = FilterOptions {
            release_day: vec![Weekday::Monday],
            ..options
        };
        assert!(filter_catalog(&list, &options).is_empty());
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut options = FilterOptions::default();
        options.toggle(FacetValue::Country("Japan".to_string()), true);
        options.toggle(FacetValue::Country("Japan".to_string()), true);
        options.toggle(FacetValue::ReleaseDay(Weekday::Friday), true);
        assert_eq!(options.country, vec!["Japan".to_string()]);
        assert_eq!(options.active_filter_count(), 2);

        options.toggle(FacetValue::Country("Japan".to_string()), false);
        assert!(options.country.is_empty());

        options.clear_facet(FacetKind::ReleaseDay);
        assert!(options.is_empty());
    }

    #[test]
    fn test_active_filter_count_includes_query() {
        let options = FilterOptions {
            query: "solo".to_string(),
            gender: vec![Gender::Straight, Gender::Other],
            ..Default::default()
        };
        assert_eq!(options.active_filter_count(), 3);
    }

    #[test]
    fn test_unknown_facet_key_is_rejected() {
        let json = r#"{"query":"","gender":[],"categories":[],"country":[],"releaseDay":[],"mood":[]}"#;
        assert!(serde_json::from_str::<FilterOptions>(json).is_err());
    }

    #[test]
    fn test_available_facet_values() {
        let list = catalog();
        assert_eq!(
            available_categories(&list),
            vec!["Action", "Drama", "Fantasy", "Romance", "School Life"]
        );
        assert_eq!(available_countries(&list), vec!["Japan", "South Korea", "United Kingdom"]);
    }
}
