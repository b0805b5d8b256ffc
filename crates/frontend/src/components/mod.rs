//! Reusable UI components.

mod error_notice;
mod league_selector;
mod loading;
mod match_card;
mod match_row;

pub use error_notice::ErrorNotice;
pub use league_selector::LeagueSelector;
pub use loading::Loading;
pub use match_card::MatchCard;
pub use match_row::MatchRow;
