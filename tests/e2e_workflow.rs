//! End-to-end workflow: keys in, requests out, views back.

mod common;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use common::mock_index::{MockIndex, MockResponse};
use common::{next_query_event, product_json, test_config, wait_for_requests};
use shopgrid::config::ConfigStore;
use shopgrid::filter::FilterStore;
use shopgrid::query::{QueryDispatcher, QueryEvent, SearchClient};
use shopgrid::ui::app::{App, GridView};
use shopgrid::ui::events::AppEvent;
use shopgrid::ui::input::handle_key;

const DEBOUNCE_MS: u64 = 40;

fn start_app(mock: &MockIndex) -> (App, Receiver<AppEvent>) {
    let config = test_config(&mock.endpoint(), DEBOUNCE_MS);
    let (tx, rx) = mpsc::channel();
    let filters = FilterStore::default();
    let client = SearchClient::new(&config.search).unwrap();
    let dispatcher = QueryDispatcher::new(
        filters.clone(),
        client,
        tx,
        Duration::from_millis(DEBOUNCE_MS),
    );
    tokio::spawn(dispatcher.run());

    let store = ConfigStore::new(config, PathBuf::from("/tmp/test.toml"));
    (App::new(store, filters), rx)
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Feed dispatcher events into the app until one query finishes.
async fn pump_until_finished(app: &mut App, rx: &Receiver<AppEvent>, timeout_ms: u64) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
    while tokio::time::Instant::now() < deadline {
        match next_query_event(rx, 100).await {
            Some(event) => {
                let finished = matches!(event, QueryEvent::Finished { .. });
                app.on_query_event(event);
                if finished {
                    return true;
                }
            }
            None => {}
        }
    }
    false
}

#[tokio::test]
async fn initial_load_issues_one_request_with_the_default_payload() {
    let mock = MockIndex::start().await;
    let (mut app, rx) = start_app(&mock);

    assert_eq!(app.grid_view(), GridView::Loading);

    assert!(pump_until_finished(&mut app, &rx, 2000).await);
    let captured = wait_for_requests(&mock, 1, 2000).await;
    assert_eq!(captured.len(), 1);
    assert_eq!(
        captured[0].filter(),
        serde_json::json!({
            "sort": "none",
            "color": ["white", "blue", "beige", "purple", "green"],
            "price": [0.0, 100.0],
            "size": ["S", "M", "L"],
        })
    );
}

#[tokio::test]
async fn empty_response_renders_the_empty_state_view() {
    let mock = MockIndex::start().await;
    mock.enqueue_response(MockResponse::empty()).await;

    let (mut app, rx) = start_app(&mock);
    assert!(pump_until_finished(&mut app, &rx, 2000).await);
    assert_eq!(app.grid_view(), GridView::Empty);
}

#[tokio::test]
async fn non_empty_response_renders_one_card_per_record_in_order() {
    let mock = MockIndex::start().await;
    mock.enqueue_response(MockResponse::hits(&[
        product_json("p3", "Beige shirt", 30.0, "L", "beige"),
        product_json("p1", "White shirt", 10.0, "S", "white"),
        product_json("p2", "Green shirt", 20.0, "M", "green"),
    ]))
    .await;

    let (mut app, rx) = start_app(&mock);
    assert!(pump_until_finished(&mut app, &rx, 2000).await);

    match app.grid_view() {
        GridView::Products(products) => {
            let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, vec!["p3", "p1", "p2"]);
        }
        other => panic!("Expected products, got {other:?}"),
    }
}

#[tokio::test]
async fn choosing_a_sort_option_requeries_with_the_new_order() {
    let mock = MockIndex::start().await;
    let (mut app, rx) = start_app(&mock);
    assert!(pump_until_finished(&mut app, &rx, 2000).await);
    mock.clear().await;

    // Open the sort menu and pick "Price: High to Low" by digit.
    handle_key(&mut app, press(KeyCode::Char('s')));
    assert!(app.in_sort_menu());
    handle_key(&mut app, press(KeyCode::Char('3')));
    assert!(!app.in_sort_menu());

    let captured = wait_for_requests(&mock, 1, 2000).await;
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].filter()["sort"], "price-desc");

    assert!(pump_until_finished(&mut app, &rx, 2000).await);
    assert_eq!(app.grid_view(), GridView::Empty);
}

#[tokio::test]
async fn failed_query_renders_the_failure_view_and_retry_requeries() {
    let mock = MockIndex::start().await;
    mock.enqueue_response(MockResponse::error(500, "boom")).await;

    let (mut app, rx) = start_app(&mock);
    assert!(pump_until_finished(&mut app, &rx, 2000).await);
    assert!(matches!(
        app.grid_view(),
        GridView::Failed {
            kind: "index_error",
            ..
        }
    ));

    // Retry from the failure view.
    mock.enqueue_response(MockResponse::hits(&[product_json(
        "p1", "Shirt", 20.0, "M", "blue",
    )]))
    .await;
    handle_key(&mut app, press(KeyCode::Char('r')));

    assert!(pump_until_finished(&mut app, &rx, 2000).await);
    match app.grid_view() {
        GridView::Products(products) => assert_eq!(products[0].id, "p1"),
        other => panic!("Expected products, got {other:?}"),
    }
}
