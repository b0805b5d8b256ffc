//! Page components.

mod home;
mod matches;

pub use home::HomePage;
pub use matches::MatchListPage;
