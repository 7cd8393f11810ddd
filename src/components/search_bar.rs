use crate::app::state::SearchState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Widget},
};

pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SEARCH_GLYPH: &str = "⌕";

pub fn spinner_frame(frame_count: u64) -> &'static str {
    SPINNER[(frame_count % SPINNER.len() as u64) as usize]
}

/// Bordered query input. The trailing glyph turns into a spinner while a
/// request is outstanding.
pub struct SearchBar<'a, 'b> {
    pub search: &'a SearchState<'b>,
    pub theme: &'a Theme,
    pub focused: bool,
    pub frame_count: u64,
}

impl Widget for SearchBar<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(self.theme.input);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let [text_area, icon_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(3)]).areas(inner);

        Widget::render(&self.search.input, text_area, buf);

        let glyph = if self.search.in_flight {
            spinner_frame(self.frame_count)
        } else {
            SEARCH_GLYPH
        };
        Span::styled(format!(" {glyph} "), self.theme.input_icon).render(icon_area, buf);
    }
}
