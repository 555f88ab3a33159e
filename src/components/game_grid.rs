//! Game card grid

use leptos::prelude::*;
use boardgame_core::GameRecord;
use crate::app::ControlEvent;
use crate::render::ListState;

const NO_RESULTS_MESSAGE: &str = "Øv! Vi fandt desværre ingen resultater.";

#[component]
pub fn GameGrid(
    list: ReadSignal<ListState>,
    dispatch: impl Fn(ControlEvent) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <main id="game-list" class="game-content">
            {move || match list.get() {
                ListState::Loading => view! {
                    <div class="loading">"Henter spil..."</div>
                }.into_any(),
                ListState::Failed(message) => view! {
                    <div class="empty-state error">
                        <p>"Spillene kunne ikke hentes."</p>
                        <p class="error-detail">{message}</p>
                    </div>
                }.into_any(),
                ListState::NoResults => view! {
                    <p class="no-results">{NO_RESULTS_MESSAGE}</p>
                }.into_any(),
                ListState::Games(games) => {
                    let count = games.len();
                    view! {
                        <div class="game-grid">
                            {games.into_iter().enumerate().map(|(index, game)| view! {
                                <GameCard
                                    game=game
                                    on_open=move || dispatch(ControlEvent::OpenDetail(index))
                                />
                            }).collect::<Vec<_>>()}
                        </div>
                        <div class="game-count">{format!("{} spil", count)}</div>
                    }.into_any()
                }
            }}
        </main>
    }
}

#[component]
fn GameCard(
    game: GameRecord,
    on_open: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let alt = format!("Poster of {}", game.title);
    let playtime = game.playtime.map(|p| format!("Ca. {} min.", p));
    let players = game.players.map(|range| format!("{} spillere", range));
    let genre = game.genre_label().map(|g| g.into_owned());

    view! {
        <article
            class="game-card"
            tabindex="0"
            on:click=move |_| on_open()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                let key = ev.key();
                if key == "Enter" || key == " " {
                    // Keep Space from scrolling the page
                    ev.prevent_default();
                    on_open();
                }
            }
        >
            <img src=game.image alt=alt class="game-poster" loading="lazy" />
            <div class="game-info">
                <h3>{game.title}</h3>
                {playtime.map(|p| view! { <p class="game-playtime">{p}</p> })}
                {players.map(|p| view! { <p class="game-players">{p}</p> })}
                {genre.map(|g| view! { <p class="game-genre">{g}</p> })}
            </div>
        </article>
    }
}
