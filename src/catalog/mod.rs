//! Product domain types shared by the filter store, the query layer, and
//! the rendering layer.

mod options;
mod product;

pub use options::{
    Color, PricePreset, PriceRange, PriceSelection, Size, SortOrder, CUSTOM_PRICE_BOUNDS,
    PRICE_PRESETS, PRICE_STEP,
};
pub use product::{ProductRecord, QueryHit};
