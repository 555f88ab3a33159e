//! Game details dialog

use leptos::ev;
use leptos::prelude::*;
use boardgame_core::GameRecord;

#[component]
pub fn GameDetails(
    game: ReadSignal<Option<GameRecord>>,
    on_close: WriteSignal<Option<GameRecord>>,
) -> impl IntoView {
    // Escape closes the dialog
    let _escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && game.get_untracked().is_some() {
            on_close.set(None);
        }
    });

    view! {
        <Show when=move || game.get().is_some()>
            {move || {
                game.get().map(|g| {
                    let alt = format!("Poster af {}", g.title);
                    let genre = g.genre_label().map(|l| l.into_owned()).unwrap_or_default();
                    let rating = g.rating_text();

                    // Only the fields this game actually has
                    let mut facts: Vec<(&'static str, String)> = Vec::new();
                    if let Some(p) = g.playtime {
                        facts.push(("Spilletid", format!("{} min.", p)));
                    }
                    if let Some(range) = g.players {
                        facts.push(("Spillere", range.to_string()));
                    }
                    if let Some(d) = &g.difficulty {
                        facts.push(("Sværhedsgrad", d.clone()));
                    }
                    if let Some(age) = g.age {
                        facts.push(("Alder", format!("{}+", age)));
                    }
                    if let Some(lang) = &g.language {
                        facts.push(("Sprog", lang.clone()));
                    }
                    if let Some(loc) = &g.location {
                        facts.push(("Lokation", loc.clone()));
                    }

                    view! {
                        <div class="game-details-overlay" on:click=move |_| on_close.set(None)>
                            <div
                                id="game-dialog"
                                class="game-details-panel"
                                role="dialog"
                                on:click=|e| e.stop_propagation()
                            >
                                <button
                                    class="game-details-close"
                                    title="Luk"
                                    on:click=move |_| on_close.set(None)
                                >
                                    "×"
                                </button>
                                <img src=g.image alt=alt class="game-poster" />
                                <div class="dialog-details">
                                    <h2>{g.title}</h2>
                                    <p class="game-genre">{genre}</p>
                                    {rating.map(|r| view! { <p class="game-rating">{format!("⭐ {}", r)}</p> })}
                                    <dl class="game-details-meta">
                                        {facts.into_iter().map(|(label, value)| view! {
                                            <dt>{label}</dt>
                                            <dd>{value}</dd>
                                        }).collect::<Vec<_>>()}
                                    </dl>
                                    <p class="game-description">{g.description}</p>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </Show>
    }
}
