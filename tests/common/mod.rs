//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_index;

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use shopgrid::config::{Config, SearchConfig, UiConfig};
use shopgrid::query::QueryEvent;
use shopgrid::ui::events::AppEvent;

use self::mock_index::{CapturedRequest, MockIndex};

/// Config pointing at a mock index, with a short debounce for tests.
pub fn test_config(endpoint: &str, debounce_ms: u64) -> Config {
    Config {
        search: SearchConfig {
            endpoint: endpoint.to_string(),
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
            debounce_ms,
        },
        ui: UiConfig::default(),
    }
}

/// A product as the index would store it.
pub fn product_json(id: &str, name: &str, price: f64, size: &str, color: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "price": price,
        "imageId": format!("{color}-1"),
        "size": size,
        "color": color,
    })
}

/// Pull the next dispatcher event off the UI channel without blocking the
/// runtime, or None if the deadline passes first.
pub async fn next_query_event(rx: &Receiver<AppEvent>, timeout_ms: u64) -> Option<QueryEvent> {
    let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        match rx.try_recv() {
            Ok(AppEvent::Query(event)) => return Some(event),
            Ok(_) => {}
            Err(TryRecvError::Empty) => {
                if tokio::time::Instant::now() >= deadline {
                    return None;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            Err(TryRecvError::Disconnected) => return None,
        }
    }
}

/// Wait until the mock has captured at least `count` requests.
pub async fn wait_for_requests(
    mock: &MockIndex,
    count: usize,
    timeout_ms: u64,
) -> Vec<CapturedRequest> {
    let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        let captured = mock.captured_requests().await;
        if captured.len() >= count || tokio::time::Instant::now() >= deadline {
            return captured;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
