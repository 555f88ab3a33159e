//! Catalog store
//!
//! The store is produced once from a [`CatalogSource`] and never changes
//! afterwards. Filtering always derives new collections from it.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::error::CatalogError;
use crate::filter::{self, FilterCriteria};
use crate::record::GameRecord;

/// Where the catalog document comes from.
///
/// Implementations perform the transport (HTTP, file, fixture) and hand back the
/// raw JSON text; parsing happens in [`CatalogStore::load`] so every source
/// reports malformed payloads the same way.
pub trait CatalogSource {
    fn fetch(&self) -> impl Future<Output = Result<String, CatalogError>>;
}

/// Full game collection in source order
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    games: Arc<[GameRecord]>,
}

impl CatalogStore {
    /// Fetch and parse the catalog. A failure never yields a partial store.
    pub async fn load<S: CatalogSource>(source: &S) -> Result<Self, CatalogError> {
        let payload = source.fetch().await?;
        let store = Self::parse(&payload)?;
        debug!(games = store.len(), "catalog loaded");
        Ok(store)
    }

    /// Parse a catalog document (a JSON array of game records)
    pub fn parse(payload: &str) -> Result<Self, CatalogError> {
        let games: Vec<GameRecord> = serde_json::from_str(payload)?;
        Ok(Self::from_records(games))
    }

    pub fn from_records(games: Vec<GameRecord>) -> Self {
        Self { games: games.into() }
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GameRecord> {
        self.games.get(index)
    }

    /// Case-insensitive exact title lookup
    pub fn find_by_title(&self, title: &str) -> Option<&GameRecord> {
        let wanted = title.trim().to_lowercase();
        self.games.iter().find(|g| g.title.to_lowercase() == wanted)
    }

    /// Games matching `criteria`, in catalog order
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<GameRecord> {
        filter::apply(&self.games, criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    struct FixtureSource(Result<String, CatalogError>);

    impl CatalogSource for FixtureSource {
        async fn fetch(&self) -> Result<String, CatalogError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_load_preserves_source_order() {
        let source = FixtureSource(Ok(
            r#"[{"title":"Zooloretto"},{"title":"Azul"},{"title":"Mysterium"}]"#.to_string(),
        ));
        let store = block_on(CatalogStore::load(&source)).unwrap();
        let titles: Vec<_> = store.games().iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Zooloretto", "Azul", "Mysterium"]);
    }

    #[test]
    fn test_load_transport_failure() {
        let source = FixtureSource(Err(CatalogError::Status(404)));
        assert_eq!(block_on(CatalogStore::load(&source)), Err(CatalogError::Status(404)));
    }

    #[test]
    fn test_load_malformed_payload() {
        let source = FixtureSource(Ok(r#"{"games": "nope"}"#.to_string()));
        let err = block_on(CatalogStore::load(&source)).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_record_without_title_is_malformed() {
        let err = CatalogStore::parse(r#"[{"title":"Azul"},{"genre":"Familie"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_find_by_title() {
        let store = CatalogStore::from_records(vec![
            GameRecord::titled("Catan"),
            GameRecord::titled("Codenames"),
        ]);
        assert_eq!(store.find_by_title(" codenames ").map(|g| g.title.as_str()), Some("Codenames"));
        assert!(store.find_by_title("cat").is_none());
        assert_eq!(store.get(0).map(|g| g.title.as_str()), Some("Catan"));
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let store = CatalogStore::parse("[]").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
