//! HTTP access to the external matches service.

use fetch_state::{FetchError, Result};
use gloo_net::http::Request;
use match_types::{ApiConfig, League, MatchesResponse};

/// Fetch upcoming matches, optionally restricted to one league.
///
/// The decoded envelope is returned verbatim; callers own the decision of
/// what an empty list means.
pub async fn fetch_matches(config: &ApiConfig, league: Option<League>) -> Result<MatchesResponse> {
    let url = config.matches_url(league);

    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    resp.json::<MatchesResponse>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Log a failed fetch to the browser console with its diagnostic detail.
///
/// The views surface only a fixed message; this is where the real error
/// goes.
pub fn log_fetch_error(context: &str, err: &FetchError) {
    let message = format!("{context}: {err}");
    gloo_timers::callback::Timeout::new(0, move || {
        web_sys::console::error_1(&message.into());
    })
    .forget();
}
