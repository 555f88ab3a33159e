use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;
use boardgame_core::{Browser, FilterCriteria, FilterOption, FilterOptions, GameRecord};
use crate::api::HttpCatalogSource;
use crate::components::{FilterBar, GameGrid, GameDetails};
use crate::render::{ListState, SignalRenderer};

pub type CatalogBrowser = Browser<SignalRenderer>;

/// User interaction with one of the controls
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    Search(String),
    Category(String),
    Playtime(String),
    Players(String),
    Difficulty(String),
    MoreFilter(String),
    Reset,
    OpenDetail(usize),
}

impl ControlEvent {
    fn apply(self, browser: &mut CatalogBrowser) {
        match self {
            ControlEvent::Search(text) => browser.set_search(&text),
            ControlEvent::Category(value) => browser.set_category(&value),
            ControlEvent::Playtime(value) => browser.set_playtime(&value),
            ControlEvent::Players(value) => browser.set_players(&value),
            ControlEvent::Difficulty(value) => browser.set_difficulty(&value),
            ControlEvent::MoreFilter(token) => {
                if let Err(e) = browser.select_more_filter(&token) {
                    console::warn_1(&format!("More filter: {}", e).into());
                }
            }
            ControlEvent::Reset => browser.reset(),
            ControlEvent::OpenDetail(index) => {
                browser.open_detail(index);
            }
        }
    }
}

/// Values the controls display, mirrored from the session after every event
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlState {
    pub criteria: FilterCriteria,
    pub more_options: Vec<FilterOption>,
    pub more_selected: String,
}

impl ControlState {
    fn of(browser: &CatalogBrowser) -> Self {
        let more = browser.more_filter();
        Self {
            criteria: browser.criteria().clone(),
            more_options: more.options().to_vec(),
            more_selected: more.selected_value(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Render targets written by the session
    let (list, set_list) = signal(ListState::Loading);
    let (options, set_options) = signal(FilterOptions::default());
    let (selected_game, set_selected_game) = signal::<Option<GameRecord>>(None);
    // Control values shown in the filter bar
    let (controls, set_controls) = signal(ControlState::default());
    // Session, available once the catalog has loaded
    let browser = StoredValue::new(None::<CatalogBrowser>);

    let renderer = SignalRenderer {
        list: set_list,
        options: set_options,
        detail: set_selected_game,
    };

    spawn_local(async move {
        let source = HttpCatalogSource::default();
        match Browser::start(&source, renderer).await {
            Ok(session) => {
                console::log_1(&format!("App: Loaded {} games", session.store().len()).into());
                set_controls.set(ControlState::of(&session));
                browser.set_value(Some(session));
            }
            Err(e) => console::error_1(&format!("Failed to load games: {}", e).into()),
        }
    });

    let dispatch = move |event: ControlEvent| {
        browser.update_value(|session| {
            if let Some(session) = session.as_mut() {
                event.apply(session);
                set_controls.set(ControlState::of(session));
            }
        });
    };

    view! {
        <div class="app-container">
            <FilterBar
                options=options
                controls=controls
                dispatch=dispatch
            />
            <GameGrid
                list=list
                dispatch=dispatch
            />
            <GameDetails
                game=selected_game
                on_close=set_selected_game
            />
        </div>
    }
}
