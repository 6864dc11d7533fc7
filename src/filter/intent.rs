use crate::catalog::{Color, PriceRange, Size, SortOrder};
use crate::mvi::Intent;

/// User actions against the filter selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterIntent {
    /// Replace the sort order.
    SetSort(SortOrder),
    /// Insert the color if absent, remove it if present.
    ToggleColor(Color),
    /// Insert the size if absent, remove it if present.
    ToggleSize(Size),
    /// Select a preset price range.
    SetPricePreset(PriceRange),
    /// Select a user-adjusted price range.
    SetCustomPrice(PriceRange),
}

impl Intent for FilterIntent {}
