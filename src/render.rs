//! Render dispatcher backed by Leptos signals

use boardgame_core::{CatalogStatus, FilterOptions, GameRecord, Listing, RenderDispatcher};
use leptos::prelude::*;

/// What the game list area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Failed(String),
    NoResults,
    Games(Vec<GameRecord>),
}

/// Pushes every render from the browser session into the signals the
/// components read
#[derive(Clone, Copy)]
pub struct SignalRenderer {
    pub list: WriteSignal<ListState>,
    pub options: WriteSignal<FilterOptions>,
    pub detail: WriteSignal<Option<GameRecord>>,
}

impl RenderDispatcher for SignalRenderer {
    fn render_status(&mut self, status: CatalogStatus<'_>) {
        let state = match status {
            CatalogStatus::Loading => ListState::Loading,
            CatalogStatus::Failed(err) => ListState::Failed(err.to_string()),
        };
        self.list.set(state);
    }

    fn render_options(&mut self, options: &FilterOptions) {
        self.options.set(options.clone());
    }

    fn render_list(&mut self, listing: Listing<'_>) {
        let state = match listing {
            Listing::Matches(games) => ListState::Games(games.to_vec()),
            Listing::NoResults => ListState::NoResults,
        };
        self.list.set(state);
    }

    fn render_detail(&mut self, game: &GameRecord) {
        self.detail.set(Some(game.clone()));
    }
}
