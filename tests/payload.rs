//! Wire-shape tests for the query payload.

use shopgrid::catalog::{Color, PriceRange, Size, SortOrder};
use shopgrid::filter::{FilterIntent, FilterReducer, FilterState};
use shopgrid::mvi::Reducer;
use shopgrid::query::{FilterPayload, QueryRequest};

#[test]
fn default_state_produces_the_canonical_payload() {
    let payload = FilterPayload::from(&FilterState::default());
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "sort": "none",
            "color": ["white", "blue", "beige", "purple", "green"],
            "price": [0.0, 100.0],
            "size": ["S", "M", "L"],
        })
    );
}

#[test]
fn request_body_nests_the_filter() {
    let request = QueryRequest {
        filter: FilterPayload::from(&FilterState::default()),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["filter"]["sort"], "none");
}

#[test]
fn custom_flag_is_not_transmitted() {
    let state = FilterReducer::reduce(
        FilterState::default(),
        FilterIntent::SetCustomPrice(PriceRange(10.0, 55.0)),
    );
    let value = serde_json::to_value(FilterPayload::from(&state)).unwrap();
    // Only the bounds travel; there is no custom/preset marker.
    assert_eq!(value["price"], serde_json::json!([10.0, 55.0]));
    assert!(value.get("isCustom").is_none());
    assert_eq!(value.as_object().unwrap().len(), 4);
}

#[test]
fn selections_serialize_in_palette_order_regardless_of_toggle_order() {
    // Remove and re-add white: it still serializes first.
    let state = FilterReducer::reduce(
        FilterState::default(),
        FilterIntent::ToggleColor(Color::White),
    );
    let state = FilterReducer::reduce(state, FilterIntent::ToggleColor(Color::White));
    let payload = FilterPayload::from(&state);
    assert_eq!(
        payload.color,
        vec![
            Color::White,
            Color::Blue,
            Color::Beige,
            Color::Purple,
            Color::Green
        ]
    );
}

#[test]
fn narrowed_selections_serialize_only_what_is_selected() {
    let state = FilterReducer::reduce(
        FilterState::default(),
        FilterIntent::ToggleColor(Color::Beige),
    );
    let state = FilterReducer::reduce(state, FilterIntent::ToggleSize(Size::S));
    let state = FilterReducer::reduce(state, FilterIntent::SetSort(SortOrder::PriceAsc));

    let value = serde_json::to_value(FilterPayload::from(&state)).unwrap();
    assert_eq!(value["sort"], "price-asc");
    assert_eq!(
        value["color"],
        serde_json::json!(["white", "blue", "purple", "green"])
    );
    assert_eq!(value["size"], serde_json::json!(["M", "L"]));
}
