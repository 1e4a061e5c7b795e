//! Tolerant serde views over PandaScore payloads
//!
//! The client caches raw JSON records; formatters deserialize them through
//! these views right before rendering. Every field of interest is optional
//! or defaulted, so a missing or malformed field degrades to a placeholder
//! at format time instead of failing the whole reply.

use serde::Deserialize;
use serde_json::Value;

/// One match record as returned by the `/matches*` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchView {
    pub name: Option<String>,
    pub begin_at: Option<String>,
    pub opponents: Vec<OpponentSlot>,
    pub results: Vec<MatchScore>,
    pub winner: Option<TeamSide>,
    pub serie: Option<SerieInfo>,
    pub tournament: Option<TournamentInfo>,
    pub streams_list: Vec<StreamInfo>,
}

/// Wrapper object around each opponent entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpponentSlot {
    pub opponent: Option<TeamSide>,
}

/// A team as it appears in opponents/winner fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TeamSide {
    pub name: Option<String>,
    pub image_url: Option<String>,
}

/// Per-team score entry, index-aligned with `opponents`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchScore {
    pub score: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SerieInfo {
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TournamentInfo {
    pub prizepool: Option<String>,
}

/// One stream descriptor from `streams_list`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StreamInfo {
    pub official: Option<bool>,
    pub main: Option<bool>,
    pub language: Option<String>,
    pub raw_url: Option<String>,
}

impl StreamInfo {
    pub fn is_official(&self) -> bool {
        self.official.unwrap_or(false)
    }

    pub fn is_main(&self) -> bool {
        self.main.unwrap_or(false)
    }

    pub fn language_in(&self, accepted: &[&str]) -> bool {
        self.language
            .as_deref()
            .map(|lang| accepted.contains(&lang))
            .unwrap_or(false)
    }
}

/// A team record from the `/teams` endpoint, carrying the roster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TeamView {
    pub name: Option<String>,
    pub players: Vec<Value>,
}

/// One roster entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerView {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub nationality: Option<String>,
    pub birthday: Option<String>,
    pub image_url: Option<String>,
}

/// Parses a raw match record, degrading to the empty view when the payload
/// does not match the expected shape.
pub fn match_view(value: &Value) -> MatchView {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

/// Parses a raw team record.
pub fn team_view(value: &Value) -> TeamView {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

/// Parses a raw player record.
pub fn player_view(value: &Value) -> PlayerView {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

/// Extracts the player list from a roster query result. The roster endpoint
/// returns a list of teams; only the first one is the tracked team.
pub fn roster_players(records: &[Value]) -> Vec<Value> {
    records
        .first()
        .map(|team| team_view(team).players)
        .unwrap_or_default()
}
