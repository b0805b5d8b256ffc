//! Upcoming-matches list page component.

use fetch_state::{FetchGuard, FetchState};
use match_types::{ApiConfig, Match};
use yew::prelude::*;

use crate::api;
use crate::components::{ErrorNotice, Loading, MatchRow};

/// Match list page component: one flat list across all leagues.
#[function_component(MatchListPage)]
pub fn match_list_page() -> Html {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let state = use_state(FetchState::<Vec<Match>>::default);
    let guard = use_memo((), |_| FetchGuard::new());

    // Fetch once on mount; the teardown retires the cycle so a response
    // arriving after unmount is discarded.
    {
        let state = state.clone();
        let guard = guard.clone();

        use_effect_with((), move |_| {
            let ticket = guard.issue();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api::fetch_matches(&config, None).await;
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

    if state.is_loading() {
        return html! { <Loading message={"Loading matches..."} /> };
    }

    if let Some(message) = state.error() {
        return html! { <ErrorNotice message={message.to_string()} /> };
    }

    let matches = state.data().cloned().unwrap_or_default();

    html! {
        <div class="match-list-page">
            <h2 class="page-title">{"Upcoming Matches"}</h2>
            <div class="match-list">
                { for matches.iter().map(|m| {
                    html! { <MatchRow fixture={m.clone()} /> }
                })}
            </div>
        </div>
    }
}
