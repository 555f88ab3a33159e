//! Browsing session: control events in, renders out
//!
//! A [`Browser`] owns the loaded catalog, the current filter state and the
//! more-filter controller. Every control event rebuilds the criteria, runs the
//! filter engine over the full catalog and hands the result to the
//! [`RenderDispatcher`] exactly once.

use tracing::debug;

use crate::error::{CatalogError, MoreFilterError};
use crate::filter::{self, FilterCriteria};
use crate::more_filter::MoreFilterController;
use crate::options::FilterOptions;
use crate::record::GameRecord;
use crate::store::{CatalogSource, CatalogStore};

/// Catalog state outside of a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus<'a> {
    Loading,
    Failed(&'a CatalogError),
}

/// Result of one filter run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Listing<'a> {
    Matches(&'a [GameRecord]),
    NoResults,
}

impl<'a> Listing<'a> {
    fn of(games: &'a [GameRecord]) -> Self {
        if games.is_empty() {
            Listing::NoResults
        } else {
            Listing::Matches(games)
        }
    }

    pub fn games(&self) -> &'a [GameRecord] {
        match self {
            Listing::Matches(games) => games,
            Listing::NoResults => &[],
        }
    }
}

/// Presentation side of the browser
pub trait RenderDispatcher {
    fn render_status(&mut self, status: CatalogStatus<'_>);
    /// Called once after load with the populated control options
    fn render_options(&mut self, options: &FilterOptions);
    fn render_list(&mut self, listing: Listing<'_>);
    fn render_detail(&mut self, game: &GameRecord);
}

pub struct Browser<R> {
    store: CatalogStore,
    criteria: FilterCriteria,
    more: MoreFilterController,
    visible: Vec<GameRecord>,
    renderer: R,
}

impl<R: RenderDispatcher> Browser<R> {
    /// Load the catalog, populate the controls and render the full list.
    ///
    /// On failure the renderer only sees `Loading` followed by `Failed`.
    pub async fn start<S: CatalogSource>(source: &S, mut renderer: R) -> Result<Self, CatalogError> {
        renderer.render_status(CatalogStatus::Loading);
        match CatalogStore::load(source).await {
            Ok(store) => Ok(Self::with_store(store, renderer)),
            Err(err) => {
                renderer.render_status(CatalogStatus::Failed(&err));
                Err(err)
            }
        }
    }

    /// Session over an already loaded catalog
    pub fn with_store(store: CatalogStore, mut renderer: R) -> Self {
        let options = FilterOptions::from_games(store.games());
        renderer.render_options(&options);

        let mut browser = Self {
            store,
            criteria: FilterCriteria::default(),
            more: MoreFilterController::default(),
            visible: Vec::new(),
            renderer,
        };
        browser.recompute();
        browser
    }

    pub fn set_search(&mut self, text: &str) {
        self.criteria.search = text.to_string();
        self.recompute();
    }

    pub fn set_category(&mut self, value: &str) {
        self.criteria.category = filter::control_value(value);
        self.recompute();
    }

    pub fn set_playtime(&mut self, value: &str) {
        self.criteria.playtime = filter::control_value(value);
        self.recompute();
    }

    pub fn set_players(&mut self, value: &str) {
        self.criteria.players = filter::player_target(value);
        self.recompute();
    }

    pub fn set_difficulty(&mut self, value: &str) {
        self.criteria.difficulty = filter::control_value(value);
        self.recompute();
    }

    /// Forward a selection on the more-filter control. A rejected selection
    /// changes nothing and renders nothing.
    pub fn select_more_filter(&mut self, token: &str) -> Result<(), MoreFilterError> {
        self.more.select(token, self.store.games())?;
        self.recompute();
        Ok(())
    }

    /// Every control back to neutral, more-filter back to its category list
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
        self.more.reset();
        self.recompute();
    }

    /// Show the detail view for a game in the current result
    pub fn open_detail(&mut self, index: usize) -> Option<&GameRecord> {
        let game = self.visible.get(index)?;
        self.renderer.render_detail(game);
        Some(game)
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn more_filter(&self) -> &MoreFilterController {
        &self.more
    }

    /// Games in the last rendered result
    pub fn visible(&self) -> &[GameRecord] {
        &self.visible
    }

    fn recompute(&mut self) {
        self.criteria.more = self.more.criterion();
        self.visible = self.store.filter(&self.criteria);
        debug!(visible = self.visible.len(), total = self.store.len(), "rendering game list");
        self.renderer.render_list(Listing::of(&self.visible));
    }
}
