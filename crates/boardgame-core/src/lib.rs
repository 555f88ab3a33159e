//! Board game catalog core - records, catalog store, option extraction,
//! the more-filter state machine and the filter engine

pub mod browser;
pub mod error;
pub mod filter;
pub mod more_filter;
pub mod options;
pub mod record;
pub mod store;

pub use browser::{Browser, CatalogStatus, Listing, RenderDispatcher};
pub use error::{CatalogError, MoreFilterError};
pub use filter::{apply, matches, FilterCriteria};
pub use more_filter::{MoreFilter, MoreFilterController, MoreFilterField, MoreFilterMode};
pub use options::{FilterOption, FilterOptions};
pub use record::{GameRecord, Genre, PlayerRange, Rating};
pub use store::{CatalogSource, CatalogStore};
