//! Debounced query dispatch with stale-response protection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::catalog::ProductRecord;
use crate::filter::FilterStore;
use crate::query::client::SearchClient;
use crate::query::error::QueryError;
use crate::query::payload::FilterPayload;
use crate::ui::events::AppEvent;

/// Where the latest query stands.
///
/// The cycle Pending → Success/Failed repeats for the page's lifetime.
/// Pending is also the initial phase: one query fires immediately on
/// startup, before any interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryPhase {
    #[default]
    Pending,
    Success {
        products: Vec<ProductRecord>,
    },
    Failed {
        kind: &'static str,
        message: String,
    },
}

/// Updates published by the dispatcher, tagged with the request sequence.
#[derive(Debug)]
pub enum QueryEvent {
    Started {
        seq: u64,
    },
    Finished {
        seq: u64,
        result: Result<Vec<ProductRecord>, QueryError>,
    },
}

/// Debounced bridge between the filter store and the search client.
///
/// Listens for store revisions, waits out the quiet period, then issues a
/// request for the state as it stands at fire time. Each request gets the
/// next sequence number; a completion for anything but the newest issued
/// sequence is dropped, so an old slow response can never overwrite a
/// newer result set. The app applies the same acceptance check on its side.
pub struct QueryDispatcher {
    store: FilterStore,
    client: SearchClient,
    events: Sender<AppEvent>,
    debounce: Duration,
    revisions: watch::Receiver<u64>,
    issued: Arc<AtomicU64>,
}

impl QueryDispatcher {
    pub fn new(
        store: FilterStore,
        client: SearchClient,
        events: Sender<AppEvent>,
        debounce: Duration,
    ) -> Self {
        let revisions = store.subscribe();
        Self {
            store,
            client,
            events,
            debounce,
            revisions,
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run until the revision feed closes.
    pub async fn run(mut self) {
        // Initial query: the grid starts in Pending, not idle.
        self.issue();

        loop {
            if self.revisions.changed().await.is_err() {
                break;
            }
            // Quiet period: re-arm while further mutations keep arriving,
            // so a burst of changes coalesces into one request.
            loop {
                tokio::select! {
                    _ = sleep(self.debounce) => break,
                    changed = self.revisions.changed() => {
                        if changed.is_err() {
                            return;
                        }
                    }
                }
            }
            self.issue();
        }
    }

    /// Issue one request for the current snapshot on its own task, so a
    /// slow response never delays a newer request.
    fn issue(&self) {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        // Snapshot at fire time, never a copy captured at schedule time.
        let payload = FilterPayload::from(&self.store.snapshot());

        if self
            .events
            .send(AppEvent::Query(QueryEvent::Started { seq }))
            .is_err()
        {
            return;
        }
        debug!(seq, "issuing index query");

        let client = self.client.clone();
        let events = self.events.clone();
        let issued = Arc::clone(&self.issued);
        tokio::spawn(async move {
            let result = client.query(&payload).await;

            // A newer request was issued while this one was in flight;
            // its outcome is no longer authoritative.
            if issued.load(Ordering::SeqCst) != seq {
                debug!(seq, "dropping stale query response");
                return;
            }

            if let Err(error) = &result {
                warn!(seq, kind = error.kind(), "index query failed: {error}");
            }
            let _ = events.send(AppEvent::Query(QueryEvent::Finished { seq, result }));
        });
    }
}
