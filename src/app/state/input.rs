use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "Search projects, tasks, sprints...";

/// Single-line text area backing the search input.
#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl AppTextArea<'_> {
    pub fn search_box() -> Self {
        let mut area = TextArea::default();
        area.set_placeholder_text(PLACEHOLDER);
        area.set_cursor_line_style(Style::default());
        Self(area)
    }

    pub fn text(&self) -> String {
        self.0.lines().join("")
    }

    /// Newline-producing keys would split the query; fold it back onto one line.
    pub fn flatten(&mut self) {
        if self.0.lines().len() > 1 {
            let text = self.text();
            let placeholder = self.0.placeholder_text().to_string();
            let mut area = TextArea::new(vec![text]);
            area.set_placeholder_text(placeholder);
            area.set_cursor_line_style(Style::default());
            area.move_cursor(CursorMove::End);
            self.0 = area;
        }
    }
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        area.set_placeholder_text(self.0.placeholder_text().to_string());
        area.set_cursor_line_style(Style::default());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}
