//! PandaScore client for the tracked team
//!
//! Exposes the four domain queries behind a cache-aside TTL cache. Fetch
//! failures never propagate to the dispatch layer; they are logged and
//! absorbed into a degraded result carrying the last-known records.

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::constants::pandascore;
use crate::error::BotError;
use crate::stats::cache::{QueryKind, ResponseCache};
use crate::stats::fetcher::ApiFetcher;

/// Result of a statistics query.
///
/// Both variants carry records so callers handle the empty-list case as a
/// first-class outcome; `Degraded` additionally tells observability apart
/// from "legitimately nothing scheduled".
#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    /// Served from a fresh cache entry or a successful fetch.
    Available(Vec<Value>),
    /// The upstream fetch failed; carries the last-known records, which may
    /// be stale or empty.
    Degraded(Vec<Value>),
}

impl QueryData {
    pub fn records(&self) -> &[Value] {
        match self {
            QueryData::Available(records) | QueryData::Degraded(records) => records,
        }
    }

    pub fn into_records(self) -> Vec<Value> {
        match self {
            QueryData::Available(records) | QueryData::Degraded(records) => records,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, QueryData::Degraded(_))
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// Client for the statistics API, scoped to one team.
#[derive(Debug)]
pub struct StatsClient {
    fetcher: ApiFetcher,
    cache: ResponseCache,
    team_id: u64,
}

impl StatsClient {
    /// Builds a client from the loaded configuration, pointed at the CS
    /// resource and the FURIA team id.
    pub fn new(config: &Config) -> Result<Self, BotError> {
        let fetcher = ApiFetcher::new(
            pandascore::BASE_URL,
            Some(config.pandascore_token.clone()),
            config.http_timeout_seconds,
        )?;
        Ok(Self::with_parts(
            fetcher,
            ResponseCache::new(),
            pandascore::FURIA_TEAM_ID,
        ))
    }

    /// Assembles a client from explicit parts. Tests construct fresh
    /// instances with short-TTL caches through this.
    pub fn with_parts(fetcher: ApiFetcher, cache: ResponseCache, team_id: u64) -> Self {
        Self {
            fetcher,
            cache,
            team_id,
        }
    }

    /// Most recent finished match the team played.
    pub async fn last_match(&self) -> QueryData {
        self.query(QueryKind::LastMatch).await
    }

    /// Matches scheduled but not yet started.
    pub async fn upcoming_matches(&self) -> QueryData {
        self.query(QueryKind::UpcomingMatches).await
    }

    /// Match currently being played, if any.
    pub async fn live_match(&self) -> QueryData {
        self.query(QueryKind::LiveMatch).await
    }

    /// Full roster of the tracked team.
    pub async fn roster(&self) -> QueryData {
        self.query(QueryKind::Roster).await
    }

    /// Cache-aside lookup shared by all four operations.
    #[instrument(skip(self), fields(kind = kind.as_str()))]
    async fn query(&self, kind: QueryKind) -> QueryData {
        if let Some(records) = self.cache.fresh(kind).await {
            return QueryData::Available(records);
        }

        match self.fetch(kind).await {
            Ok(records) => {
                debug!("Fetched {} records for {}", records.len(), kind.as_str());
                self.cache.store(kind, records.clone()).await;
                QueryData::Available(records)
            }
            Err(e) => {
                warn!(
                    "Upstream fetch failed for {}, serving last-known data: {}",
                    kind.as_str(),
                    e
                );
                QueryData::Degraded(self.cache.last_known(kind).await)
            }
        }
    }

    /// One outbound request for `kind`. The response must be a JSON array.
    async fn fetch(&self, kind: QueryKind) -> Result<Vec<Value>, BotError> {
        let (endpoint, query) = self.request_parts(kind);
        let value = self.fetcher.get(endpoint, &query).await?;
        match value {
            Value::Array(records) => Ok(records),
            other => Err(BotError::unexpected_payload(
                format!("expected a JSON array, got {}", json_type_name(&other)),
                format!("{}{}", self.fetcher.base_url(), endpoint),
            )),
        }
    }

    /// Endpoint and query-string filters for each query kind.
    fn request_parts(&self, kind: QueryKind) -> (&'static str, Vec<(&'static str, String)>) {
        let team_id = self.team_id.to_string();
        match kind {
            QueryKind::LastMatch => (
                pandascore::MATCHES_ENDPOINT,
                vec![
                    ("filter[status]", "finished".to_string()),
                    ("filter[opponent_id]", team_id),
                    ("sort", "-begin_at".to_string()),
                    ("page[size]", "1".to_string()),
                ],
            ),
            QueryKind::UpcomingMatches => (
                pandascore::UPCOMING_ENDPOINT,
                vec![("filter[opponent_id]", team_id)],
            ),
            QueryKind::LiveMatch => (
                pandascore::RUNNING_ENDPOINT,
                vec![("filter[opponent_id]", team_id)],
            ),
            QueryKind::Roster => (pandascore::TEAMS_ENDPOINT, vec![("filter[id]", team_id)]),
        }
    }

    /// Test and monitoring access to the cache.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
