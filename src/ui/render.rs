use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::catalog::SortOrder;
use crate::ui::app::{App, GridView};
use crate::ui::footer::Footer;
use crate::ui::grid::{draw_empty, draw_failure, draw_products, draw_skeletons};
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, split_body};
use crate::ui::sidebar::Sidebar;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);
    let state = app.filters();

    let pending = app.grid_view() == GridView::Loading;
    frame.render_widget(
        Header::new().widget(state.sort, pending, app.ticks()),
        header_area,
    );

    let (sidebar_area, grid_area) = split_body(body);
    if let Some(sidebar_area) = sidebar_area {
        frame.render_widget(
            Sidebar::new().widget(&state, app.sidebar_cursor()),
            sidebar_area,
        );
    }

    frame.render_widget(Clear, grid_area);
    match app.grid_view() {
        GridView::Loading => {
            let count = app.config().get().ui.skeleton_cards;
            draw_skeletons(frame, grid_area, count, app.ticks());
        }
        GridView::Products(products) => {
            draw_products(frame, grid_area, products, app.grid_scroll());
        }
        GridView::Empty => draw_empty(frame, grid_area),
        GridView::Failed { message, .. } => draw_failure(frame, grid_area, message),
    }

    frame.render_widget(Footer::new().widget(footer_area), footer_area);

    if app.in_sort_menu() {
        draw_sort_menu(frame, app, state.sort);
    }
}

fn draw_sort_menu(frame: &mut Frame<'_>, app: &App, current: SortOrder) {
    let popup = centered_rect_by_size(34, SortOrder::ALL.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, popup);

    let mut lines = Vec::new();
    for (idx, option) in SortOrder::ALL.iter().enumerate() {
        let marker = if *option == current { "● " } else { "  " };
        let style = if idx == app.sort_cursor() {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        lines.push(Line::from(Span::styled(
            format!(" {}. {}{}", idx + 1, marker, option.label()),
            style,
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title("Sort")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        popup,
    );
}
