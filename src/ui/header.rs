use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::catalog::SortOrder;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STORE_ACCENT};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, sort: SortOrder, pending: bool, ticks: u64) -> Paragraph<'static> {
        let title_style = Style::default().fg(STORE_ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let status = if pending {
            SPINNER_FRAMES[(ticks as usize) % SPINNER_FRAMES.len()].to_string()
        } else {
            " ".to_string()
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("High-quality cotton selection", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Sort: {}", sort.label()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
