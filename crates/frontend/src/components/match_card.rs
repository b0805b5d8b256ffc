//! Fixture card for the league grid.

use match_types::{format_kickoff, Match};
use yew::prelude::*;

/// Properties for MatchCard component.
#[derive(Properties, PartialEq)]
pub struct MatchCardProps {
    pub fixture: Match,
}

/// Card showing one fixture: crests, team names, kickoff and venue.
#[function_component(MatchCard)]
pub fn match_card(props: &MatchCardProps) -> Html {
    let fixture = &props.fixture;

    html! {
        <div class="match-card">
            <div class="match-card-teams">
                <div class="match-card-side">
                    if let Some(logo) = &fixture.home_logo {
                        <img class="club-crest" src={logo.clone()} alt={fixture.home_team.clone()} />
                    }
                    <span class="team-name">{ &fixture.home_team }</span>
                </div>
                <span class="match-card-vs">{ "vs" }</span>
                <div class="match-card-side">
                    if let Some(logo) = &fixture.away_logo {
                        <img class="club-crest" src={logo.clone()} alt={fixture.away_team.clone()} />
                    }
                    <span class="team-name">{ &fixture.away_team }</span>
                </div>
            </div>
            <div class="match-card-date">{ format_kickoff(&fixture.date) }</div>
            if let Some(venue) = &fixture.venue {
                <div class="match-card-venue">{ venue }</div>
            }
        </div>
    }
}
