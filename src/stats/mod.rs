//! Statistics API layer: generic fetcher, per-query TTL cache and the
//! PandaScore client used by the dispatch handlers.

pub mod cache;
pub mod client;
pub mod fetcher;
pub mod models;

pub use cache::{QueryKind, ResponseCache};
pub use client::{QueryData, StatsClient};
pub use fetcher::ApiFetcher;
