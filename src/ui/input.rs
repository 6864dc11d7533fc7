use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::catalog::PRICE_STEP;
use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.in_sort_menu() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') => app.close_sort_menu(),
            KeyCode::Up => app.move_sort_cursor(-1),
            KeyCode::Down => app.move_sort_cursor(1),
            KeyCode::Enter => app.apply_sort_cursor(),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                let index = ch.to_digit(10).unwrap_or(0) as usize;
                if index > 0 {
                    app.apply_sort_index(index - 1);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('s') => app.open_sort_menu(),
        KeyCode::Char('r') => app.retry(),
        KeyCode::Up => app.move_sidebar_cursor(-1),
        KeyCode::Down => app.move_sidebar_cursor(1),
        KeyCode::Char(' ') | KeyCode::Enter => app.activate_sidebar_row(),
        KeyCode::Left => adjust_price(app, key, -PRICE_STEP),
        KeyCode::Right => adjust_price(app, key, PRICE_STEP),
        KeyCode::PageUp => app.scroll_grid(-1),
        KeyCode::PageDown => app.scroll_grid(1),
        _ => {}
    }
}

/// Plain arrows move the upper bound, Shift moves the lower.
fn adjust_price(app: &mut App, key: KeyEvent, delta: f64) {
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        app.adjust_custom_price(delta, 0.0);
    } else {
        app.adjust_custom_price(0.0, delta);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
