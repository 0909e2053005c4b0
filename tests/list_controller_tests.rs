use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Notify;

use tooldex_core::application::ports::time::Scheduler;
use tooldex_core::application::ports::visibility::{
    SubscriptionHandle, VisibilityCallback, VisibilityObserver,
};
use tooldex_core::application::queries::{ITEMS_PER_PAGE, ListController};
use tooldex_core::domain::catalog::entity::{Catalog, Category, ToolRecord};
use tooldex_core::domain::catalog::value_objects::CategoryFilter;

/// Resolves every delay immediately.
#[derive(Default)]
struct InstantScheduler;

#[async_trait]
impl Scheduler for InstantScheduler {
    async fn delay(&self, _duration: Duration) {}
}

/// Holds every delay until the test releases the gate.
#[derive(Default)]
struct ManualScheduler {
    gate: Notify,
}

#[async_trait]
impl Scheduler for ManualScheduler {
    async fn delay(&self, _duration: Duration) {
        self.gate.notified().await;
    }
}

/// Counts live and total subscriptions handed out.
#[derive(Default)]
struct CountingObserver {
    active: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
}

impl VisibilityObserver for CountingObserver {
    fn subscribe(&self, _on_visible: VisibilityCallback) -> SubscriptionHandle {
        self.total.fetch_add(1, Ordering::SeqCst);
        self.active.fetch_add(1, Ordering::SeqCst);
        let active = Arc::clone(&self.active);
        SubscriptionHandle::new(move || {
            active.fetch_sub(1, Ordering::SeqCst);
        })
    }
}

fn record(title: &str) -> ToolRecord {
    ToolRecord {
        title: title.to_string(),
        url: "https://example.com".into(),
        body: "body".into(),
        tag: "tag".into(),
        date_added: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        slug: None,
    }
}

/// 40 editor records and 30 linter records, 70 in total.
fn seventy_record_catalog() -> Arc<Catalog> {
    Arc::new(Catalog {
        tools: vec![
            Category {
                name: "Editors".into(),
                content: (0..40)
                    .map(|i| record(&format!("Editor Tool {i:02}")))
                    .collect(),
            },
            Category {
                name: "Linters".into(),
                content: (0..30)
                    .map(|i| record(&format!("Linter Tool {i:02}")))
                    .collect(),
            },
        ],
    })
}

fn sorted_titles(catalog: &Catalog, filter: &CategoryFilter) -> Vec<String> {
    let mut titles: Vec<String> = catalog
        .tools
        .iter()
        .filter(|category| filter.matches(&category.name))
        .flat_map(|category| &category.content)
        .map(|record| record.title.clone())
        .collect();
    titles.sort();
    titles
}

fn controller(catalog: Arc<Catalog>, scheduler: Arc<dyn Scheduler>) -> ListController {
    ListController::new(catalog, scheduler)
}

#[tokio::test]
async fn initial_render_is_the_first_page_of_the_sorted_set() {
    let catalog = seventy_record_catalog();
    let ctrl = controller(Arc::clone(&catalog), Arc::new(InstantScheduler));

    let cards = ctrl.visible_cards();
    assert_eq!(cards.len(), ITEMS_PER_PAGE);

    let expected = sorted_titles(&catalog, &CategoryFilter::All);
    let shown: Vec<_> = cards.iter().map(|card| card.title.clone()).collect();
    assert_eq!(shown, expected[..ITEMS_PER_PAGE]);
    assert!(ctrl.sentinel_offered());
}

#[tokio::test]
async fn disclosure_grows_then_clamps_then_exhausts() {
    let ctrl = controller(seventy_record_catalog(), Arc::new(InstantScheduler));

    assert!(ctrl.sentinel_visible().await);
    assert_eq!(ctrl.visible_cards().len(), 64);
    assert!(ctrl.sentinel_offered());

    assert!(ctrl.sentinel_visible().await);
    assert_eq!(ctrl.visible_cards().len(), 70);
    assert!(!ctrl.sentinel_offered());

    // Exhausted: no sentinel, so a stray signal is a no-op.
    assert!(!ctrl.sentinel_visible().await);
    assert_eq!(ctrl.visible_cards().len(), 70);
}

#[tokio::test]
async fn category_filter_narrows_and_small_sets_need_no_sentinel() {
    let catalog = seventy_record_catalog();
    let ctrl = controller(Arc::clone(&catalog), Arc::new(InstantScheduler));

    let filter = CategoryFilter::parse("Linters");
    ctrl.set_filter(filter.clone());

    let cards = ctrl.visible_cards();
    assert_eq!(cards.len(), 30);
    let expected = sorted_titles(&catalog, &filter);
    let shown: Vec<_> = cards.iter().map(|card| card.title.clone()).collect();
    assert_eq!(shown, expected);
    assert!(!ctrl.sentinel_offered());
    assert!(!ctrl.sentinel_visible().await);
}

#[tokio::test]
async fn unknown_category_degrades_to_an_empty_render() {
    let ctrl = controller(seventy_record_catalog(), Arc::new(InstantScheduler));
    ctrl.set_filter(CategoryFilter::parse("Compilers"));

    assert!(ctrl.visible_cards().is_empty());
    assert!(!ctrl.sentinel_offered());
    assert!(!ctrl.sentinel_visible().await);
}

#[tokio::test]
async fn filter_change_resets_the_cursor_unconditionally() {
    let ctrl = controller(seventy_record_catalog(), Arc::new(InstantScheduler));

    assert!(ctrl.sentinel_visible().await);
    assert_eq!(ctrl.cursor(), 64);

    ctrl.set_filter(CategoryFilter::parse("Editors"));
    assert_eq!(ctrl.cursor(), ITEMS_PER_PAGE);

    ctrl.set_filter(CategoryFilter::All);
    assert_eq!(ctrl.cursor(), ITEMS_PER_PAGE);
}

#[tokio::test]
async fn signals_during_a_pending_load_are_ignored() {
    let scheduler = Arc::new(ManualScheduler::default());
    let ctrl = Arc::new(controller(
        seventy_record_catalog(),
        Arc::clone(&scheduler) as Arc<dyn Scheduler>,
    ));

    let pending = tokio::spawn({
        let ctrl = Arc::clone(&ctrl);
        async move { ctrl.sentinel_visible().await }
    });
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    assert!(ctrl.is_loading());

    // Second firing while the delay is outstanding: ignored.
    assert!(!ctrl.sentinel_visible().await);

    scheduler.gate.notify_one();
    assert!(pending.await.unwrap());
    assert_eq!(ctrl.cursor(), 64);
    assert!(!ctrl.is_loading());
}

#[tokio::test]
async fn stale_delay_clamps_against_the_new_filter_epoch() {
    let scheduler = Arc::new(ManualScheduler::default());
    let ctrl = Arc::new(controller(
        seventy_record_catalog(),
        Arc::clone(&scheduler) as Arc<dyn Scheduler>,
    ));

    let pending = tokio::spawn({
        let ctrl = Arc::clone(&ctrl);
        async move { ctrl.sentinel_visible().await }
    });
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    assert!(ctrl.is_loading());

    // Fresh epoch while the delay is still pending.
    ctrl.set_filter(CategoryFilter::parse("Linters"));
    assert_eq!(ctrl.cursor(), ITEMS_PER_PAGE);

    scheduler.gate.notify_one();
    assert!(pending.await.unwrap());

    // The advance lands clamped against the new filtered length.
    assert_eq!(ctrl.cursor(), 30);
    assert_eq!(ctrl.visible_cards().len(), 30);
    assert!(!ctrl.sentinel_offered());
}

#[tokio::test]
async fn subscription_follows_the_dependency_set() {
    let observer = CountingObserver::default();
    let active = Arc::clone(&observer.active);
    let total = Arc::clone(&observer.total);
    let on_visible: VisibilityCallback = Arc::new(|| {});

    let ctrl = controller(seventy_record_catalog(), Arc::new(InstantScheduler));

    ctrl.sync_subscription(&observer, Arc::clone(&on_visible));
    assert_eq!(active.load(Ordering::SeqCst), 1);
    assert_eq!(total.load(Ordering::SeqCst), 1);

    // Unchanged dependencies: no resubscribe.
    ctrl.sync_subscription(&observer, Arc::clone(&on_visible));
    assert_eq!(total.load(Ordering::SeqCst), 1);

    // Cursor moved: old handle released, new one established.
    assert!(ctrl.sentinel_visible().await);
    ctrl.sync_subscription(&observer, Arc::clone(&on_visible));
    assert_eq!(active.load(Ordering::SeqCst), 1);
    assert_eq!(total.load(Ordering::SeqCst), 2);

    // Disclosure exhausted: no sentinel, no subscription.
    assert!(ctrl.sentinel_visible().await);
    ctrl.sync_subscription(&observer, Arc::clone(&on_visible));
    assert_eq!(active.load(Ordering::SeqCst), 0);
    assert_eq!(total.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn teardown_releases_the_live_subscription() {
    let observer = CountingObserver::default();
    let active = Arc::clone(&observer.active);
    let on_visible: VisibilityCallback = Arc::new(|| {});

    let ctrl = controller(seventy_record_catalog(), Arc::new(InstantScheduler));
    ctrl.sync_subscription(&observer, Arc::clone(&on_visible));
    assert_eq!(active.load(Ordering::SeqCst), 1);

    ctrl.release_subscription();
    assert_eq!(active.load(Ordering::SeqCst), 0);

    // Dropping the controller with a live handle releases it too.
    let ctrl = controller(seventy_record_catalog(), Arc::new(InstantScheduler));
    ctrl.sync_subscription(&observer, on_visible);
    assert_eq!(active.load(Ordering::SeqCst), 1);
    drop(ctrl);
    assert_eq!(active.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn rendered_prefix_matches_cursor_for_every_filter() {
    let catalog = seventy_record_catalog();
    for token in ["all", "Editors", "Linters", "Compilers"] {
        let ctrl = controller(Arc::clone(&catalog), Arc::new(InstantScheduler));
        let filter = CategoryFilter::parse(token);
        ctrl.set_filter(filter.clone());

        let expected = sorted_titles(&catalog, &filter);
        let shown: Vec<_> = ctrl
            .visible_cards()
            .iter()
            .map(|card| card.title.clone())
            .collect();
        let prefix_len = ctrl.cursor().min(expected.len());
        assert_eq!(shown.len(), prefix_len);
        assert_eq!(shown, expected[..prefix_len]);
    }
}
