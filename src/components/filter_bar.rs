//! Search field, filter selects and reset button

use leptos::prelude::*;
use boardgame_core::{FilterOption, FilterOptions};
use boardgame_core::options::ALL;
use crate::app::{ControlEvent, ControlState};

#[component]
pub fn FilterBar(
    options: ReadSignal<FilterOptions>,
    controls: ReadSignal<ControlState>,
    dispatch: impl Fn(ControlEvent) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let selected = |value: Option<String>| value.unwrap_or_else(|| ALL.to_string());

    view! {
        <header class="toolbar">
            <div class="search-box">
                <input
                    id="search-input"
                    type="search"
                    placeholder="Søg efter spil..."
                    prop:value=move || controls.get().criteria.search
                    on:input=move |ev| dispatch(ControlEvent::Search(event_target_value(&ev)))
                />
            </div>
            <div class="filter-selects">
                <FilterSelect
                    id="category-select"
                    options=Signal::derive(move || options.get().categories)
                    value=Signal::derive(move || selected(controls.get().criteria.category))
                    on_change=move |v| dispatch(ControlEvent::Category(v))
                />
                <FilterSelect
                    id="playtime-select"
                    options=Signal::derive(move || options.get().playtimes)
                    value=Signal::derive(move || selected(controls.get().criteria.playtime))
                    on_change=move |v| dispatch(ControlEvent::Playtime(v))
                />
                <FilterSelect
                    id="players-select"
                    options=Signal::derive(move || options.get().players)
                    value=Signal::derive(move || {
                        selected(controls.get().criteria.players.map(|n| n.to_string()))
                    })
                    on_change=move |v| dispatch(ControlEvent::Players(v))
                />
                <FilterSelect
                    id="difficulty-select"
                    options=Signal::derive(move || options.get().difficulties)
                    value=Signal::derive(move || selected(controls.get().criteria.difficulty))
                    on_change=move |v| dispatch(ControlEvent::Difficulty(v))
                />
                // Category chooser or value chooser, depending on the session's mode
                <FilterSelect
                    id="more-filter-select"
                    options=Signal::derive(move || controls.get().more_options)
                    value=Signal::derive(move || controls.get().more_selected)
                    on_change=move |v| dispatch(ControlEvent::MoreFilter(v))
                />
            </div>
            <button
                id="clear-filters"
                class="clear-filters-btn"
                on:click=move |_| dispatch(ControlEvent::Reset)
            >
                "Ryd filtre"
            </button>
        </header>
    }
}

#[component]
fn FilterSelect(
    id: &'static str,
    options: Signal<Vec<FilterOption>>,
    value: Signal<String>,
    on_change: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="filter-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <For
                each=move || options.get()
                key=|option| option.value.clone()
                children=move |option: FilterOption| {
                    let option_value = option.value.clone();
                    view! {
                        <option
                            value=option.value
                            prop:selected=move || value.get() == option_value
                        >
                            {option.label}
                        </option>
                    }
                }
            />
        </select>
    }
}
