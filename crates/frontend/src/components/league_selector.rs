//! League filter button bar.

use match_types::League;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LeagueSelectorProps {
    /// Currently selected league, rendered highlighted.
    pub selected: League,
    /// Fired with the picked league when a button is clicked.
    pub on_select: Callback<League>,
}

/// Row of buttons, one per supported league.
#[function_component(LeagueSelector)]
pub fn league_selector(props: &LeagueSelectorProps) -> Html {
    html! {
        <div class="league-bar">
            { for League::ALL.iter().map(|&league| {
                let class = if league == props.selected {
                    "league-btn active"
                } else {
                    "league-btn"
                };
                let onclick = props.on_select.reform(move |_| league);
                html! {
                    <button {class} {onclick}>{ league.name() }</button>
                }
            }) }
        </div>
    }
}
