pub mod filter;

pub use filter::{
    available_categories, available_countries, filter_catalog, FacetFilter, FacetKind,
    FacetValue, FilterOptions,
};
