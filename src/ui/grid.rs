//! Product grid: cards, loading skeletons, and the empty/failure views.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::catalog::ProductRecord;
use crate::ui::theme::{swatch, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SKELETON, STATUS_ERROR};

const CARD_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 6;

/// Visible card slots for `count` items, skipping `scroll` card rows.
/// Cards fill left to right, top to bottom, in response order.
fn card_rects(area: Rect, count: usize, scroll: usize) -> Vec<(usize, Rect)> {
    let columns = (area.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (area.height / CARD_HEIGHT) as usize;
    let start = scroll * columns;

    let mut rects = Vec::new();
    for slot in 0..columns * visible_rows {
        let index = start + slot;
        if index >= count {
            break;
        }
        let col = (slot % columns) as u16;
        let row = (slot / columns) as u16;
        rects.push((
            index,
            Rect {
                x: area.x + col * CARD_WIDTH,
                y: area.y + row * CARD_HEIGHT,
                width: CARD_WIDTH.min(area.width),
                height: CARD_HEIGHT,
            },
        ));
    }
    rects
}

/// Total card rows at the grid's current width; used to clamp scrolling.
pub fn total_rows(area: Rect, count: usize) -> usize {
    let columns = (area.width / CARD_WIDTH).max(1) as usize;
    count.div_ceil(columns)
}

pub fn draw_products(frame: &mut Frame<'_>, area: Rect, products: &[ProductRecord], scroll: usize) {
    let scroll = scroll.min(total_rows(area, products.len()).saturating_sub(1));
    for (index, rect) in card_rects(area, products.len(), scroll) {
        let product = &products[index];
        let lines = vec![
            Line::from(Span::styled(
                product.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("${:.2}", product.price),
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(swatch(product.color))),
                Span::styled(
                    format!("{} · Size {}", product.color.label(), product.size.label()),
                    Style::default().fg(MUTED_TEXT),
                ),
            ]),
            Line::from(Span::styled(
                format!("img {}", product.image_id),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
            rect,
        );
    }
}

pub fn draw_skeletons(frame: &mut Frame<'_>, area: Rect, count: usize, ticks: u64) {
    let style = Style::default().fg(SKELETON);
    for (index, rect) in card_rects(area, count, 0) {
        // Alternate fill per card and tick for a cheap shimmer.
        let fill = if (ticks as usize + index) % 2 == 0 {
            "▒▒▒▒▒▒▒▒▒▒▒▒"
        } else {
            "░░░░░░░░░░░░"
        };
        let lines = vec![
            Line::from(Span::styled(fill, style)),
            Line::from(Span::styled("░░░░░░", style)),
            Line::from(Span::styled("░░░░░░░░░", style)),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
            rect,
        );
    }
}

pub fn draw_empty(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No products found",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Try adjusting your filters",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

pub fn draw_failure(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Couldn't load products",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(MUTED_TEXT))),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}
