use crate::domain::models::Route;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub location: &'a Route,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default().style(self.theme.header).render(area, buf);
        if area.height == 0 {
            return;
        }

        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let item_bg = self.theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let spans = vec![
            Span::styled(" ◆ OMNIBAR ", self.theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(item_bg)),
            Span::styled(format!(" {} ", self.location.title()), self.theme.header_item),
            Span::styled(SEP_RIGHT, Style::default().fg(item_bg).bg(base_bg)),
            Span::styled(format!(" {}", self.location), self.theme.header),
        ];

        // Middle row, level with the search input text.
        let row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_shows_location() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        Header {
            location: &Route::Teams,
            theme: &theme,
        }
        .render(area, &mut buf);

        let middle: String = (0..60).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(middle.contains("OMNIBAR"));
        assert!(middle.contains("/teams"));
    }
}
