//! Background dashboard refresher
//!
//! Re-computes the dashboard snapshot on a timer, mirroring the periodic
//! UI refresh of the original application. Reads only; the cache is never
//! authoritative and the stats endpoint recomputes on a cache miss.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::api::stats::DashboardSnapshot;

use super::stats::StatsService;

/// Shared, non-authoritative snapshot of the dashboard counts
#[derive(Clone, Default)]
pub struct DashboardCache {
    inner: Arc<RwLock<Option<DashboardSnapshot>>>,
}

impl DashboardCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn latest(&self) -> Option<DashboardSnapshot> {
        self.inner.read().await.clone()
    }

    pub async fn store(&self, snapshot: DashboardSnapshot) {
        *self.inner.write().await = Some(snapshot);
    }
}

/// Spawn the refresh loop. The task runs for the lifetime of the process.
pub fn spawn_refresher(stats: StatsService, cache: DashboardCache, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            match stats.dashboard().await {
                Ok(snapshot) => cache.store(snapshot).await,
                Err(err) => tracing::warn!("Dashboard refresh failed: {}", err),
            }
        }
    });
}
