// * Pipeline orchestrator: discovery, then one sequential pass of
// * fetch -> extract -> store per unit. A failure at any step skips that
// * unit and never touches the rest of the run; only the listing fetch and
// * the store root are fatal.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, warn};
use url::Url;

use crate::config::HarvestConfig;
use crate::engine::discovery::discover_links;
use crate::engine::urls::slug_from_url;
use crate::network::{Fetch, FetchError};
use crate::persistence::{AssetOutcome, DataOutcome, StoreError, UnitStore};
use crate::refinery::extract_unit;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Listing fetch failed: {0}")]
    Listing(#[from] FetchError),

    #[error("Store root unavailable: {0}")]
    StoreRoot(#[from] StoreError),
}

// * Per-run counters, logged at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub processed: usize,
    pub stored: usize,
    // * Stored but without a portrait (download failed or no URL found).
    pub partial: usize,
    pub failed: usize,
    pub assets_saved: usize,
}

enum UnitOutcome {
    Stored { asset_saved: bool, degraded: bool },
    Failed,
}

pub struct Pipeline<'a, F: Fetch> {
    config: &'a HarvestConfig,
    fetcher: &'a F,
    store: UnitStore,
}

impl<'a, F: Fetch> Pipeline<'a, F> {
    pub fn new(config: &'a HarvestConfig, fetcher: &'a F) -> Self {
        let store = UnitStore::new(&config.out_root);
        Self {
            config,
            fetcher,
            store,
        }
    }

    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        self.store.ensure_root().await?;

        info!(url = %self.config.list_url, "Run start: fetching unit listing");
        let listing = self.fetcher.fetch_page(&self.config.list_url).await?;
        let links = discover_links(&listing, &self.config.list_url, &self.config.detail_prefix);
        info!(count = links.len(), "Discovered unit pages");

        let mut summary = RunSummary {
            discovered: links.len(),
            ..Default::default()
        };

        let total = links.len().min(self.config.max_pages);

        for (i, url) in links.iter().take(self.config.max_pages).enumerate() {
            let step = i + 1;
            summary.processed += 1;

            match self.process_unit(step, total, url).await {
                UnitOutcome::Stored {
                    asset_saved,
                    degraded,
                } => {
                    summary.stored += 1;
                    if asset_saved {
                        summary.assets_saved += 1;
                    }
                    if degraded {
                        summary.partial += 1;
                    }
                }
                UnitOutcome::Failed => summary.failed += 1,
            }

            if step < total {
                sleep(self.config.request_delay).await;
            }
        }

        info!(
            discovered = summary.discovered,
            stored = summary.stored,
            partial = summary.partial,
            failed = summary.failed,
            "Run complete"
        );
        Ok(summary)
    }

    // * One unit, all four stages. Every early return is this unit's
    // * Failed state; nothing here can end the run.
    async fn process_unit(&self, step: usize, total: usize, url: &Url) -> UnitOutcome {
        let slug = slug_from_url(url);
        info!("({step}/{total}) {slug}: fetching page");

        let html = match self.fetcher.fetch_page(url.as_str()).await {
            Ok(html) => html,
            Err(e) => {
                warn!("({step}/{total}) {slug}: skipped, fetch failed: {e}");
                return UnitOutcome::Failed;
            }
        };

        let record = match extract_unit(&html, url, now_unix()) {
            Ok(record) => record,
            Err(e) => {
                warn!("({step}/{total}) {slug}: skipped, parse failed: {e}");
                return UnitOutcome::Failed;
            }
        };
        let name = if record.name.is_empty() {
            slug.clone()
        } else {
            record.name.clone()
        };

        let outcome = match self
            .store
            .persist(&record, self.fetcher, self.config.force)
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("({step}/{total}) {name}: skipped, store failed: {e}");
                return UnitOutcome::Failed;
            }
        };

        match outcome.data {
            DataOutcome::Written => info!("({step}/{total}) {name}: saved data.json"),
            DataOutcome::AlreadyPresent => {
                info!("({step}/{total}) {name}: data.json already present")
            }
        }

        let (asset_saved, degraded) = match &outcome.asset {
            AssetOutcome::Saved(bytes) => {
                info!("({step}/{total}) {name}: saved portrait.png ({bytes} bytes)");
                (true, false)
            }
            AssetOutcome::AlreadyPresent => {
                info!("({step}/{total}) {name}: portrait.png already present");
                (false, false)
            }
            AssetOutcome::NoUrl => {
                warn!("({step}/{total}) {name}: no portrait URL on page");
                (false, true)
            }
            AssetOutcome::Failed(reason) => {
                warn!("({step}/{total}) {name}: portrait download failed: {reason}");
                (false, true)
            }
        };

        UnitOutcome::Stored {
            asset_saved,
            degraded,
        }
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
