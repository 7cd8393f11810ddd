use ratatui::{buffer::Buffer, layout::Rect, style::Color};

pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, terminal_area: Rect) {
    let shadow_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width,
        height: area.height,
    };

    let shadow_area = shadow_area.intersection(terminal_area);

    for y in shadow_area.top()..shadow_area.bottom() {
        for x in shadow_area.left()..shadow_area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(ratatui::style::Style::default().bg(Color::Black));
            cell.set_symbol(" ");
        }
    }
}

/// Cuts `text` to `max` characters, marking the cut with `...`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// `in_progress` -> `IN PROGRESS`
pub fn status_label(status: &str) -> String {
    status.replace('_', " ").to_uppercase()
}
