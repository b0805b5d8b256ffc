//! Compact fixture row for the flat match list.

use match_types::{format_kickoff, Match};
use yew::prelude::*;

/// Properties for MatchRow component.
#[derive(Properties, PartialEq)]
pub struct MatchRowProps {
    pub fixture: Match,
}

/// Single row: home vs away plus kickoff time.
#[function_component(MatchRow)]
pub fn match_row(props: &MatchRowProps) -> Html {
    let fixture = &props.fixture;

    html! {
        <div class="match-row">
            <span class="team-name">{ &fixture.home_team }</span>
            <span class="match-row-vs">{ "vs" }</span>
            <span class="team-name">{ &fixture.away_team }</span>
            <span class="match-row-time">{ format_kickoff(&fixture.date) }</span>
            if let Some(league) = &fixture.league {
                <span class="league-tag">{ league }</span>
            }
        </div>
    }
}
