//! Filter sidebar: sub-categories, color/size checkboxes, price presets
//! and the custom range row.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::catalog::{Color, PriceSelection, Size, PRICE_PRESETS};
use crate::filter::FilterState;
use crate::ui::theme::{swatch, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

/// Static sub-category list carried over from the storefront; only the
/// first is available.
pub const SUB_CATEGORIES: [(&str, bool); 4] = [
    ("T-Shirts", true),
    ("Hoodies", false),
    ("Sweatshirts", false),
    ("Accessories", false),
];

/// One interactive row of the sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Category(usize),
    ColorOption(Color),
    SizeOption(Size),
    PricePreset(usize),
    CustomPrice,
}

/// Rows in the order they are rendered and cycled through.
pub fn rows() -> Vec<SidebarRow> {
    let mut rows = Vec::new();
    for idx in 0..SUB_CATEGORIES.len() {
        rows.push(SidebarRow::Category(idx));
    }
    for color in Color::ALL {
        rows.push(SidebarRow::ColorOption(color));
    }
    for size in Size::ALL {
        rows.push(SidebarRow::SizeOption(size));
    }
    for idx in 0..PRICE_PRESETS.len() {
        rows.push(SidebarRow::PricePreset(idx));
    }
    rows.push(SidebarRow::CustomPrice);
    rows
}

pub struct Sidebar;

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &FilterState, cursor: usize) -> Paragraph<'static> {
        let heading = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();
        let mut index = 0usize;

        lines.push(Line::from(Span::styled("Category", heading)));
        for (name, available) in SUB_CATEGORIES {
            let style = self.row_style(index == cursor, available);
            let marker = if available { "» " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!(" {}{}", marker, name),
                style,
            )));
            index += 1;
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Color", heading)));
        for color in Color::ALL {
            let style = self.row_style(index == cursor, true);
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", checkbox(state.colors.contains(&color))),
                    style,
                ),
                Span::styled("■ ", Style::default().fg(swatch(color))),
                Span::styled(color.label().to_string(), style),
            ]));
            index += 1;
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Size", heading)));
        for size in Size::ALL {
            let style = self.row_style(index == cursor, true);
            lines.push(Line::from(Span::styled(
                format!(" {} {}", checkbox(state.sizes.contains(&size)), size.label()),
                style,
            )));
            index += 1;
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Price", heading)));
        for preset in PRICE_PRESETS {
            let selected = matches!(state.price, PriceSelection::Preset(range) if range == preset.range);
            let style = self.row_style(index == cursor, true);
            lines.push(Line::from(Span::styled(
                format!(" {} {}", radio(selected), preset.label),
                style,
            )));
            index += 1;
        }

        // Display bounds are normalized even when the stored pair is not.
        let (low, high) = state.price.range().normalized();
        let style = self.row_style(index == cursor, true);
        lines.push(Line::from(Span::styled(
            format!(
                " {} Custom  ${:.0} to ${:.0}",
                radio(state.price.is_custom()),
                low,
                high
            ),
            style,
        )));

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn row_style(&self, focused: bool, available: bool) -> Style {
        let mut style = if available {
            Style::default().fg(HEADER_TEXT)
        } else {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        };
        if focused {
            style = style.bg(ACTIVE_HIGHLIGHT);
        }
        style
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(o)"
    } else {
        "( )"
    }
}
