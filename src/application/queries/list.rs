// src/application/queries/list.rs
use std::cmp::Ordering;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::application::dto::CardView;
use crate::application::ports::time::Scheduler;
use crate::application::ports::visibility::{
    SubscriptionHandle, VisibilityCallback, VisibilityObserver,
};
use crate::domain::catalog::{Catalog, CategoryFilter, ToolRecord};

/// Records revealed per disclosure step, and the initial cursor.
pub const ITEMS_PER_PAGE: usize = 32;

/// Simulated network delay before a disclosure step lands.
pub const LOAD_DELAY: Duration = Duration::from_millis(300);

struct ListState {
    filter: CategoryFilter,
    cursor: usize,
    loading: bool,
    subscription: Option<SubscriptionHandle>,
    observed: Option<(usize, bool, usize)>,
}

/// View model for the catalog list: derives the filtered, title-sorted
/// record sequence and owns the incremental-disclosure lifecycle.
///
/// The catalog itself is read-only here; the only mutable state is the
/// controller's own cursor, loading flag, and subscription handle, all
/// behind one lock that is never held across the delay await.
pub struct ListController {
    catalog: Arc<Catalog>,
    scheduler: Arc<dyn Scheduler>,
    state: Mutex<ListState>,
}

impl ListController {
    pub fn new(catalog: Arc<Catalog>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            catalog,
            scheduler,
            state: Mutex::new(ListState {
                filter: CategoryFilter::All,
                cursor: ITEMS_PER_PAGE,
                loading: false,
                subscription: None,
                observed: None,
            }),
        }
    }

    /// Records matching the filter, flattened across categories and sorted
    /// ascending by title.
    fn filtered(&self, filter: &CategoryFilter) -> Vec<&ToolRecord> {
        let mut records: Vec<&ToolRecord> = self
            .catalog
            .tools
            .iter()
            .filter(|category| filter.matches(&category.name))
            .flat_map(|category| &category.content)
            .collect();
        records.sort_by(|a, b| title_order(&a.title, &b.title));
        records
    }

    pub fn filter(&self) -> CategoryFilter {
        self.state.lock().unwrap().filter.clone()
    }

    /// Switches to a fresh list: the cursor drops back to the initial page
    /// size unconditionally, regardless of loading state. An in-flight
    /// delay is not cancelled; its advance clamps against the new filtered
    /// length when it lands.
    pub fn set_filter(&self, filter: CategoryFilter) {
        let mut state = self.state.lock().unwrap();
        state.filter = filter;
        state.cursor = ITEMS_PER_PAGE;
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    pub fn cursor(&self) -> usize {
        self.state.lock().unwrap().cursor
    }

    /// The render-ready prefix: `min(cursor, filtered length)` records.
    pub fn visible_cards(&self) -> Vec<CardView> {
        let (filter, cursor) = {
            let state = self.state.lock().unwrap();
            (state.filter.clone(), state.cursor)
        };
        let filtered = self.filtered(&filter);
        filtered[..cursor.min(filtered.len())]
            .iter()
            .copied()
            .map(CardView::from)
            .collect()
    }

    /// Whether the disclosure sentinel is offered to the visibility
    /// observer. Once disclosure is exhausted no sentinel is offered, so no
    /// further signal can fire.
    pub fn sentinel_offered(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.cursor < self.filtered(&state.filter).len()
    }

    /// Visibility signal for the disclosure sentinel. Ignored while a
    /// growth step is already outstanding or disclosure is exhausted;
    /// otherwise exactly one step runs: after the injected delay the cursor
    /// advances by a page, clamped against the filtered length current at
    /// that moment. Returns whether a step ran.
    pub async fn sentinel_visible(&self) -> bool {
        {
            let mut state = self.state.lock().unwrap();
            let len = self.filtered(&state.filter).len();
            if state.loading || state.cursor >= len {
                return false;
            }
            state.loading = true;
        }

        self.scheduler.delay(LOAD_DELAY).await;

        let mut state = self.state.lock().unwrap();
        let len = self.filtered(&state.filter).len();
        state.cursor = (state.cursor + ITEMS_PER_PAGE).min(len);
        state.loading = false;
        tracing::debug!(cursor = state.cursor, "disclosure step complete");
        true
    }

    /// (Re)establishes the visibility subscription whenever the dependency
    /// set (cursor, loading flag, filtered length) has changed since the
    /// last sync. The previous handle is released first; no subscription is
    /// held once disclosure is exhausted.
    pub fn sync_subscription(
        &self,
        observer: &dyn VisibilityObserver,
        on_visible: VisibilityCallback,
    ) {
        let mut state = self.state.lock().unwrap();
        let len = self.filtered(&state.filter).len();
        let deps = (state.cursor, state.loading, len);
        if state.observed == Some(deps) {
            return;
        }
        if let Some(handle) = state.subscription.take() {
            handle.release();
        }
        if state.cursor < len {
            state.subscription = Some(observer.subscribe(on_visible));
        }
        state.observed = Some(deps);
    }

    /// Releases any live subscription. Dropping the controller does the
    /// same through the handle's own drop.
    pub fn release_subscription(&self) {
        let mut state = self.state.lock().unwrap();
        state.observed = None;
        if let Some(handle) = state.subscription.take() {
            handle.release();
        }
    }
}

fn title_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
