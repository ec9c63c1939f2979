// Data-access layer behind the query service.
// The in-memory source stands in for a backend call: it sleeps for a
// configurable latency and then reads the injected catalog.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;

use crate::{catalog::Catalog, hotel::Hotel};

// Faults a data source can raise. The in-memory source never produces them;
// a networked source would.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed source data: {0}")]
    Malformed(String),
}

// Simulated network latency
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyConfig {
    pub list_delay_ms: u64,
    pub detail_delay_ms: u64,
    pub jitter_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_delay_ms: 1000,
            detail_delay_ms: 500,
            jitter_ms: 0,
        }
    }
}

impl LatencyConfig {
    pub fn none() -> Self {
        Self {
            list_delay_ms: 0,
            detail_delay_ms: 0,
            jitter_ms: 0,
        }
    }

    fn with_jitter(&self, base_ms: u64) -> Duration {
        let jitter = if self.jitter_ms > 0 {
            rand::thread_rng().gen_range(0..=self.jitter_ms)
        } else {
            0
        };
        Duration::from_millis(base_ms + jitter)
    }

    pub fn list_delay(&self) -> Duration {
        self.with_jitter(self.list_delay_ms)
    }

    pub fn detail_delay(&self) -> Duration {
        self.with_jitter(self.detail_delay_ms)
    }
}

// Where the query service gets its records from.
// Implementations return owned copies so callers can filter freely without
// touching the underlying store.
#[async_trait]
pub trait HotelSource: Send + Sync + 'static {
    // Every record, in catalog order.
    async fn fetch_hotels(&self) -> Result<Vec<Hotel>, SourceError>;

    // Exact id lookup. `Ok(None)` when no record has that id.
    async fn fetch_hotel(&self, hotel_id: &str) -> Result<Option<Hotel>, SourceError>;
}

#[derive(Debug, Clone)]
pub struct InMemoryHotelSource {
    catalog: Arc<Catalog>,
    latency: LatencyConfig,
}

impl InMemoryHotelSource {
    pub fn new(catalog: Arc<Catalog>, latency: LatencyConfig) -> Self {
        Self { catalog, latency }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl HotelSource for InMemoryHotelSource {
    async fn fetch_hotels(&self) -> Result<Vec<Hotel>, SourceError> {
        tokio::time::sleep(self.latency.list_delay()).await;
        Ok(self.catalog.hotels().to_vec())
    }

    async fn fetch_hotel(&self, hotel_id: &str) -> Result<Option<Hotel>, SourceError> {
        tokio::time::sleep(self.latency.detail_delay()).await;
        Ok(self.catalog.get(hotel_id).cloned())
    }
}
