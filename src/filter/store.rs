//! Observable container for the filter selection.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::filter::intent::FilterIntent;
use crate::filter::reducer::FilterReducer;
use crate::filter::state::FilterState;
use crate::mvi::Reducer;

/// Shared, observable holder of the canonical [`FilterState`].
///
/// Every mutation runs through the reducer and bumps a revision that
/// subscribers watch. What to do about a change (re-query, redraw) is the
/// subscriber's policy, not the store's; the update operations stay pure.
#[derive(Clone)]
pub struct FilterStore {
    inner: Arc<RwLock<FilterState>>,
    revision: watch::Sender<u64>,
}

impl FilterStore {
    pub fn new(initial: FilterState) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(initial)),
            revision,
        }
    }

    /// Run one intent through the reducer and publish the new state.
    pub fn dispatch(&self, intent: FilterIntent) {
        {
            let mut guard = self.inner.write();
            *guard = FilterReducer::reduce(std::mem::take(&mut *guard), intent);
        }
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Snapshot of the current selection.
    ///
    /// Subscribers read this at query fire time rather than capturing a
    /// copy when the trigger was scheduled.
    pub fn snapshot(&self) -> FilterState {
        self.inner.read().clone()
    }

    /// Bump the revision without changing state.
    ///
    /// Used to re-issue a query after a failure; the re-query flows
    /// through the same debounce path as a real mutation.
    pub fn touch(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Watch the revision counter. The receiver has already seen the
    /// current value; only later mutations wake it.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}
