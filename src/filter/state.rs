use std::collections::BTreeSet;

use crate::catalog::{Color, PriceSelection, Size, SortOrder};
use crate::mvi::UiState;

/// The canonical filter selection driving the next query.
///
/// Ephemeral: created with defaults on startup, mutated synchronously by
/// input handlers, discarded on exit. Ordered sets keep the wire payload
/// stable regardless of toggle order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub sort: SortOrder,
    pub colors: BTreeSet<Color>,
    pub sizes: BTreeSet<Size>,
    pub price: PriceSelection,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            sort: SortOrder::None,
            colors: Color::ALL.into_iter().collect(),
            sizes: Size::ALL.into_iter().collect(),
            price: PriceSelection::default(),
        }
    }
}

impl UiState for FilterState {}
