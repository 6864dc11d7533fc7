use ratatui::layout::Rect;

/// Sidebar width when there is room for it.
const SIDEBAR_WIDTH: u16 = 28;

/// Below this total width the sidebar is hidden, like the original
/// storefront hides its filter column on small screens.
const SIDEBAR_BREAKPOINT: u16 = 64;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into an optional sidebar and the product grid.
pub fn split_body(body: Rect) -> (Option<Rect>, Rect) {
    if body.width < SIDEBAR_BREAKPOINT {
        return (None, body);
    }
    let sidebar = Rect {
        x: body.x,
        y: body.y,
        width: SIDEBAR_WIDTH,
        height: body.height,
    };
    let grid = Rect {
        x: body.x + SIDEBAR_WIDTH,
        y: body.y,
        width: body.width - SIDEBAR_WIDTH,
        height: body.height,
    };
    (Some(sidebar), grid)
}

pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
