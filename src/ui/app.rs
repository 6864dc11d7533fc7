use crate::catalog::{ProductRecord, SortOrder, PRICE_PRESETS};
use crate::config::ConfigStore;
use crate::filter::{FilterIntent, FilterState, FilterStore};
use crate::query::{QueryEvent, QueryPhase};
use crate::ui::sidebar::{rows, SidebarRow};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Sidebar,
    SortMenu,
}

/// What the product area should show for the current phase.
#[derive(Debug, PartialEq)]
pub enum GridView<'a> {
    Loading,
    Products(&'a [ProductRecord]),
    Empty,
    Failed {
        kind: &'static str,
        message: &'a str,
    },
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Canonical filter selection; mutations flow through its reducer.
    filters: FilterStore,
    /// Latest published query phase.
    phase: QueryPhase,
    /// Newest sequence seen starting. Completions for anything else are
    /// stale and ignored.
    latest_seq: u64,
    sidebar_cursor: usize,
    sort_cursor: usize,
    grid_scroll: usize,
    ticks: u64,
    config: ConfigStore,
}

impl App {
    pub fn new(config: ConfigStore, filters: FilterStore) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Sidebar,
            filters,
            phase: QueryPhase::default(),
            latest_seq: 0,
            sidebar_cursor: 0,
            sort_cursor: 0,
            grid_scroll: 0,
            ticks: 0,
            config,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Snapshot of the filter selection for rendering.
    pub fn filters(&self) -> FilterState {
        self.filters.snapshot()
    }

    pub fn filter_store(&self) -> &FilterStore {
        &self.filters
    }

    // ========================================================================
    // Sort menu
    // ========================================================================

    pub fn in_sort_menu(&self) -> bool {
        self.focus == Focus::SortMenu
    }

    pub fn open_sort_menu(&mut self) {
        let current = self.filters.snapshot().sort;
        self.sort_cursor = SortOrder::ALL
            .iter()
            .position(|order| *order == current)
            .unwrap_or(0);
        self.focus = Focus::SortMenu;
    }

    pub fn close_sort_menu(&mut self) {
        self.focus = Focus::Sidebar;
    }

    pub fn sort_cursor(&self) -> usize {
        self.sort_cursor
    }

    pub fn move_sort_cursor(&mut self, direction: i32) {
        self.sort_cursor = step(self.sort_cursor, SortOrder::ALL.len(), direction);
    }

    /// Apply the highlighted option and close the menu.
    pub fn apply_sort_cursor(&mut self) {
        self.filters
            .dispatch(FilterIntent::SetSort(SortOrder::ALL[self.sort_cursor]));
        self.close_sort_menu();
    }

    /// Apply an option by its 0-based position (digit shortcut).
    pub fn apply_sort_index(&mut self, index: usize) -> bool {
        let Some(order) = SortOrder::ALL.get(index) else {
            return false;
        };
        self.filters.dispatch(FilterIntent::SetSort(*order));
        self.close_sort_menu();
        true
    }

    // ========================================================================
    // Sidebar
    // ========================================================================

    pub fn sidebar_cursor(&self) -> usize {
        self.sidebar_cursor
    }

    pub fn move_sidebar_cursor(&mut self, direction: i32) {
        self.sidebar_cursor = step(self.sidebar_cursor, rows().len(), direction);
    }

    /// Toggle or select whatever the cursor is on.
    pub fn activate_sidebar_row(&mut self) {
        match rows()[self.sidebar_cursor] {
            SidebarRow::Category(_) => {
                // Only the first category is available; the rest are
                // placeholders, as in the original storefront.
            }
            SidebarRow::ColorOption(color) => {
                self.filters.dispatch(FilterIntent::ToggleColor(color));
            }
            SidebarRow::SizeOption(size) => {
                self.filters.dispatch(FilterIntent::ToggleSize(size));
            }
            SidebarRow::PricePreset(index) => {
                self.filters
                    .dispatch(FilterIntent::SetPricePreset(PRICE_PRESETS[index].range));
            }
            SidebarRow::CustomPrice => {
                // Switch to custom with the current bounds as a base.
                let range = self.filters.snapshot().price.range();
                self.filters.dispatch(FilterIntent::SetCustomPrice(range));
            }
        }
    }

    /// Nudge the custom bounds. Only meaningful on the custom row; the
    /// reducer clamps the result.
    pub fn adjust_custom_price(&mut self, min_delta: f64, max_delta: f64) {
        if rows()[self.sidebar_cursor] != SidebarRow::CustomPrice {
            return;
        }
        let mut range = self.filters.snapshot().price.range();
        range.0 += min_delta;
        range.1 += max_delta;
        self.filters.dispatch(FilterIntent::SetCustomPrice(range));
    }

    // ========================================================================
    // Grid
    // ========================================================================

    pub fn grid_scroll(&self) -> usize {
        self.grid_scroll
    }

    pub fn scroll_grid(&mut self, direction: i32) {
        if direction.is_negative() {
            self.grid_scroll = self.grid_scroll.saturating_sub(1);
        } else {
            self.grid_scroll = self.grid_scroll.saturating_add(1);
        }
    }

    // ========================================================================
    // Query phase
    // ========================================================================

    pub fn phase(&self) -> &QueryPhase {
        &self.phase
    }

    /// Re-issue the query after a failure. No-op in other phases.
    pub fn retry(&mut self) {
        if matches!(self.phase, QueryPhase::Failed { .. }) {
            self.filters.touch();
        }
    }

    /// Apply a dispatcher update.
    ///
    /// Completions are accepted only for the newest started sequence;
    /// everything else is a stale response racing a newer request.
    pub fn on_query_event(&mut self, event: QueryEvent) {
        match event {
            QueryEvent::Started { seq } => {
                if seq > self.latest_seq {
                    self.latest_seq = seq;
                    self.phase = QueryPhase::Pending;
                }
            }
            QueryEvent::Finished { seq, result } => {
                if seq != self.latest_seq {
                    return;
                }
                self.phase = match result {
                    Ok(products) => {
                        self.grid_scroll = 0;
                        QueryPhase::Success { products }
                    }
                    Err(error) => QueryPhase::Failed {
                        kind: error.kind(),
                        message: error.to_string(),
                    },
                };
            }
        }
    }

    pub fn grid_view(&self) -> GridView<'_> {
        match &self.phase {
            QueryPhase::Pending => GridView::Loading,
            QueryPhase::Success { products } if products.is_empty() => GridView::Empty,
            QueryPhase::Success { products } => GridView::Products(products.as_slice()),
            QueryPhase::Failed { kind, message } => GridView::Failed {
                kind,
                message: message.as_str(),
            },
        }
    }
}

fn step(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}
