//! Wire shape of one query.

use serde::Serialize;

use crate::catalog::{Color, PriceRange, Size, SortOrder};
use crate::filter::FilterState;

/// The filter object the endpoint expects. Field order matches the contract:
/// `{ sort, color, price, size }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPayload {
    pub sort: SortOrder,
    pub color: Vec<Color>,
    pub price: PriceRange,
    pub size: Vec<Size>,
}

/// POST body: the filter nested under `filter`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub filter: FilterPayload,
}

impl From<&FilterState> for FilterPayload {
    fn from(state: &FilterState) -> Self {
        Self {
            sort: state.sort,
            color: state.colors.iter().copied().collect(),
            // The preset/custom flag stays client-side; only the bounds travel.
            price: state.price.range(),
            size: state.sizes.iter().copied().collect(),
        }
    }
}
