use crate::catalog::{PriceSelection, CUSTOM_PRICE_BOUNDS};
use crate::filter::intent::FilterIntent;
use crate::filter::state::FilterState;
use crate::mvi::Reducer;

pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterState;
    type Intent = FilterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::SetSort(sort) => FilterState { sort, ..state },
            FilterIntent::ToggleColor(color) => {
                let mut state = state;
                if !state.colors.remove(&color) {
                    state.colors.insert(color);
                }
                state
            }
            FilterIntent::ToggleSize(size) => {
                let mut state = state;
                if !state.sizes.remove(&size) {
                    state.sizes.insert(size);
                }
                state
            }
            FilterIntent::SetPricePreset(range) => FilterState {
                price: PriceSelection::Preset(range),
                ..state
            },
            FilterIntent::SetCustomPrice(range) => FilterState {
                // Custom bounds are clamped; presets are trusted verbatim.
                price: PriceSelection::Custom(range.clamp_to(CUSTOM_PRICE_BOUNDS)),
                ..state
            },
        }
    }
}
