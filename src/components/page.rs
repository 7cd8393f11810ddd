use crate::domain::models::Route;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Stand-in body for whatever route the search last navigated to.
pub struct Page<'a> {
    pub location: &'a Route,
    pub history: &'a [Route],
    pub theme: &'a Theme,
}

impl Widget for Page<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border)
            .title(Span::styled(
                format!(" {} ", self.location.title()),
                self.theme.page_title,
            ));

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Route  ", self.theme.dimmed),
                Span::styled(self.location.to_string(), self.theme.list_item),
            ]),
            Line::from(""),
        ];

        if self.history.is_empty() {
            lines.push(Line::from(Span::styled(
                "Type in the search box to jump to a project, task, sprint or person.",
                self.theme.dimmed,
            )));
        } else {
            lines.push(Line::from(Span::styled("Visited", self.theme.dimmed)));
            for route in self.history.iter().rev().take(area.height as usize) {
                lines.push(Line::from(Span::styled(
                    format!("  {route}"),
                    self.theme.list_item,
                )));
            }
        }

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
