//! Match center home page component with the league filter.

use fetch_state::{FetchGuard, FetchState};
use match_types::{ApiConfig, League, Match};
use yew::prelude::*;

use crate::api;
use crate::components::{ErrorNotice, LeagueSelector, Loading, MatchCard};

/// Home page component: a match grid filtered by league.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let league = use_state(League::default);
    let state = use_state(FetchState::<Vec<Match>>::default);
    let guard = use_memo((), |_| FetchGuard::new());

    // Re-fetch whenever the selected league changes. The teardown retires
    // the cycle so a response for a stale selection is discarded instead of
    // overwriting a newer one.
    {
        let state = state.clone();
        let guard = guard.clone();

        use_effect_with(*league, move |&league| {
            let ticket = guard.issue();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api::fetch_matches(&config, Some(league)).await;
                if !ticket.is_current() {
                    return;
                }
                match outcome {
                    Ok(body) => state.set(FetchState::Loaded(body.matches)),
                    Err(err) => {
                        api::log_fetch_error("Failed to fetch matches", &err);
                        state.set(FetchState::Failed("Failed to fetch matches".to_string()));
                    }
                }
            });

            move || guard.retire()
        });
    }

    let on_select = {
        let league = league.clone();
        let state = state.clone();
        Callback::from(move |picked: League| {
            if picked == *league {
                return;
            }
            // Loading flips before the effect issues the request.
            state.set(FetchState::Loading);
            league.set(picked);
        })
    };

    html! {
        <div class="home-page">
            <h1 class="page-title">{"⚽ Football Match Center"}</h1>

            <LeagueSelector selected={*league} on_select={on_select} />

            <h2 class="section-title">
                { format!("Upcoming Matches ({})", league.name()) }
            </h2>

            {
                if state.is_loading() {
                    html! { <Loading message={"Loading..."} /> }
                } else if let Some(message) = state.error() {
                    html! { <ErrorNotice message={message.to_string()} /> }
                } else {
                    let matches = state.data().cloned().unwrap_or_default();
                    if matches.is_empty() {
                        html! {
                            <p class="empty-notice">
                                {"No matches found for the next few days."}
                            </p>
                        }
                    } else {
                        html! {
                            <div class="match-grid">
                                { for matches.iter().map(|m| {
                                    html! { <MatchCard fixture={m.clone()} /> }
                                })}
                            </div>
                        }
                    }
                }
            }
        </div>
    }
}
