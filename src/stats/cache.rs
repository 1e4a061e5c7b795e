//! Per-query-kind response cache with TTL support
//!
//! One entry per [`QueryKind`], owned by the client instance that populates
//! it. Entries are only replaced after a confirmed successful fetch; a
//! failed refresh leaves the previous records in place so the client can
//! serve stale-but-valid data.

use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use crate::constants::cache_ttl;

/// The four statistics queries the bot can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Most recent finished match of the tracked team
    LastMatch,
    /// Matches scheduled but not yet started
    UpcomingMatches,
    /// Match currently being played, if any
    LiveMatch,
    /// Full team roster
    Roster,
}

impl QueryKind {
    /// Every query kind, in a fixed order. Useful for iteration in tests
    /// and cache monitoring.
    pub const ALL: [QueryKind; 4] = [
        QueryKind::LastMatch,
        QueryKind::UpcomingMatches,
        QueryKind::LiveMatch,
        QueryKind::Roster,
    ];

    /// Stable name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::LastMatch => "last_match",
            QueryKind::UpcomingMatches => "upcoming_matches",
            QueryKind::LiveMatch => "live_match",
            QueryKind::Roster => "roster",
        }
    }
}

/// A cached list of records with its fetch timestamp.
#[derive(Debug, Clone)]
pub struct CachedRecords {
    pub records: Vec<Value>,
    pub fetched_at: Instant,
}

impl CachedRecords {
    pub fn new(records: Vec<Value>) -> Self {
        Self {
            records,
            fetched_at: Instant::now(),
        }
    }

    /// A cache read is valid iff the entry's age stays below the TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() >= ttl
    }

    /// Remaining time until this entry expires.
    #[allow(dead_code)]
    pub fn time_until_expiry(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.fetched_at.elapsed())
    }
}

/// TTL cache keyed by [`QueryKind`].
///
/// Shared across concurrent dispatches; last writer wins on population and
/// concurrent misses may each fetch independently (no single-flight).
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<QueryKind, CachedRecords>>,
}

impl ResponseCache {
    /// Creates a cache with the standard TTL.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(cache_ttl::RESPONSE_SECONDS))
    }

    /// Creates a cache with a custom TTL. Tests construct short-lived
    /// caches through this.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The TTL applied uniformly to every query kind.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached records for `kind` if they are still fresh.
    pub async fn fresh(&self, kind: QueryKind) -> Option<Vec<Value>> {
        let entries = self.entries.read().await;
        match entries.get(&kind) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                debug!(
                    "Cache hit for {}: {} records, age={:?}",
                    kind.as_str(),
                    entry.records.len(),
                    entry.fetched_at.elapsed()
                );
                Some(entry.records.clone())
            }
            Some(entry) => {
                debug!(
                    "Cache entry for {} expired: age={:?}, ttl={:?}",
                    kind.as_str(),
                    entry.fetched_at.elapsed(),
                    self.ttl
                );
                None
            }
            None => {
                debug!("Cache miss for {}", kind.as_str());
                None
            }
        }
    }

    /// Stores records for `kind`. Only called after a confirmed successful
    /// fetch; a failed refresh never reaches this.
    pub async fn store(&self, kind: QueryKind, records: Vec<Value>) {
        debug!(
            "Caching {} records for {}",
            records.len(),
            kind.as_str()
        );
        let mut entries = self.entries.write().await;
        entries.insert(kind, CachedRecords::new(records));
    }

    /// Returns the last successfully fetched records for `kind`, expired or
    /// not, falling back to an empty list when never populated. Serves the
    /// stale-but-valid path after a failed refresh.
    pub async fn last_known(&self, kind: QueryKind) -> Vec<Value> {
        let entries = self.entries.read().await;
        entries
            .get(&kind)
            .map(|entry| entry.records.clone())
            .unwrap_or_default()
    }

    /// Number of populated entries, for monitoring.
    #[allow(dead_code)]
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
