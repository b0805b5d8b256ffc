//! Shared types for the match center.
//!
//! This crate defines the wire contract with the external matches service
//! (the `Match` DTO and its response envelope), the fixed set of leagues the
//! UI can filter by, kickoff display formatting, and the endpoint
//! configuration. Everything here is host-testable; the WASM frontend only
//! consumes it.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default base URL of the matches service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// The five leagues the selector offers.
///
/// The backend accepts two spellings per league: a short code (`PL`) and the
/// display name (`Premier League`). Both parse; the code is what goes on the
/// wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum League {
    #[default]
    PremierLeague,
    SerieA,
    LaLiga,
    Bundesliga,
    Ligue1,
}

impl League {
    /// Every selectable league, in selector order.
    pub const ALL: [League; 5] = [
        League::PremierLeague,
        League::SerieA,
        League::LaLiga,
        League::Bundesliga,
        League::Ligue1,
    ];

    /// Short code used as the canonical query-parameter value.
    pub fn code(&self) -> &'static str {
        match self {
            League::PremierLeague => "PL",
            League::SerieA => "SA",
            League::LaLiga => "LL",
            League::Bundesliga => "BL",
            League::Ligue1 => "L1",
        }
    }

    /// Display name shown on the selector buttons.
    pub fn name(&self) -> &'static str {
        match self {
            League::PremierLeague => "Premier League",
            League::SerieA => "Serie A",
            League::LaLiga => "La Liga",
            League::Bundesliga => "Bundesliga",
            League::Ligue1 => "Ligue 1",
        }
    }

    /// Parse either spelling of a league token.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "pl" | "premier league" => Some(League::PremierLeague),
            "sa" | "serie a" => Some(League::SerieA),
            "ll" | "la liga" => Some(League::LaLiga),
            "bl" | "bundesliga" => Some(League::Bundesliga),
            "l1" | "ligue 1" => Some(League::Ligue1),
            _ => None,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One fixture as delivered by the matches service.
///
/// Transient: decoded from a response body, held in view state, and
/// discarded when replaced. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Display name of the home side.
    pub home_team: String,
    /// Display name of the away side.
    pub away_team: String,
    /// Kickoff timestamp as delivered; older payloads call it `match_time`.
    #[serde(alias = "match_time")]
    pub date: String,
    /// Competition name; absent in several payload shapes.
    #[serde(default)]
    pub league: Option<String>,
    /// Home club crest URL.
    #[serde(default)]
    pub home_logo: Option<String>,
    /// Away club crest URL.
    #[serde(default)]
    pub away_logo: Option<String>,
    /// Stadium name.
    #[serde(default)]
    pub venue: Option<String>,
}

/// Response envelope of `GET /matches`.
///
/// `matches` decodes to an empty list when the field is absent; the other
/// fields are echoes the backend sends alongside and the UI ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
    /// League echo from the backend.
    #[serde(default)]
    pub league: Option<String>,
    /// Upcoming-match count echo from the backend.
    #[serde(default)]
    pub total_upcoming: Option<u32>,
}

/// Format a kickoff timestamp for display.
///
/// RFC 3339 strings (with or without an offset) render as
/// `Wednesday, 01 May 2024 15:00 UTC`; anything unparseable is shown
/// unchanged, which keeps pre-formatted backend dates readable.
pub fn format_kickoff(raw: &str) -> String {
    let parsed: Result<DateTime<Utc>, _> = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|naive| naive.and_utc())
        });

    match parsed {
        Ok(kickoff) => kickoff.format("%A, %d %B %Y %H:%M UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Where the matches service lives.
///
/// Resolved once at startup and handed to the view tree; every request URL
/// is built here so the endpoint exists in exactly one place.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Config with the compile-time `MATCH_CENTER_API` override applied.
    pub fn from_env() -> Self {
        match option_env!("MATCH_CENTER_API") {
            Some(base) => Self {
                base_url: base.to_string(),
            },
            None => Self::default(),
        }
    }

    /// URL of the matches endpoint, optionally filtered to one league.
    pub fn matches_url(&self, league: Option<League>) -> String {
        match league {
            Some(league) => format!("{}/matches?league={}", self.base_url, league.code()),
            None => format!("{}/matches", self.base_url),
        }
    }
}
