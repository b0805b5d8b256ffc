//! Main application component with the view switch.

use match_types::ApiConfig;
use yew::prelude::*;

use crate::pages::{HomePage, MatchListPage};

/// Top-level views. Held in plain view state; there is no URL routing.
#[derive(Clone, Copy, PartialEq)]
pub enum View {
    Home,
    MatchList,
}

/// Main application component.
///
/// Resolves the matches-service endpoint once and provides it to the whole
/// tree, so no page or component carries its own endpoint literal.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| ApiConfig::from_env());
    let view = use_state(|| View::Home);

    let go_home = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Home))
    };
    let go_match_list = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::MatchList))
    };

    let nav_class = |target: View| {
        if *view == target {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    html! {
        <ContextProvider<ApiConfig> context={(*config).clone()}>
            <div class="app-container">
                <header class="app-header">
                    <span class="nav-brand">{"Match Center"}</span>
                    <nav class="nav-links">
                        <button class={nav_class(View::Home)} onclick={go_home}>
                            {"Home"}
                        </button>
                        <button class={nav_class(View::MatchList)} onclick={go_match_list}>
                            {"All Matches"}
                        </button>
                    </nav>
                </header>
                <main class="main-content">
                    {
                        match *view {
                            View::Home => html! { <HomePage /> },
                            View::MatchList => html! { <MatchListPage /> },
                        }
                    }
                </main>
            </div>
        </ContextProvider<ApiConfig>>
    }
}
