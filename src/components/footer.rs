use super::search_bar::spinner_frame;
use crate::app::state::{AppState, Focus};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub struct Footer<'a, 'b> {
    pub state: &'a AppState<'b>,
    pub theme: &'a Theme,
}

impl Footer<'_, '_> {
    fn items(&self) -> Vec<FooterItem> {
        let item = |key, desc| FooterItem { key, desc };
        match self.state.focus {
            Focus::Search if self.state.search.overlay.is_open() => vec![
                item("↑↓", "move"),
                item("ENTER", "select"),
                item("Esc", "close"),
            ],
            Focus::Search => vec![
                item("↓", "results"),
                item("ENTER", "search"),
                item("Tab", "page"),
                item("Esc", "blur"),
            ],
            Focus::Page => vec![
                item("/", "search"),
                item("b", "back"),
                item("q", "quit"),
            ],
        }
    }
}

impl Widget for Footer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = if state.search.in_flight {
            Span::styled(
                format!("  {} SEARCHING  ", spinner_frame(state.frame_count)),
                theme.status_info,
            )
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_warn)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw("  ")];

        let available_width = area.width.saturating_sub(2) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for item in self.items() {
            let key_str = format!(" {} ", item.key);
            let desc_str = format!(" {} ", item.desc);
            let item_width = Span::raw(key_str.as_str()).width() + desc_str.len();
            if current_width + item_width + 1 > available_width {
                break;
            }
            spans.push(Span::styled(key_str, theme.footer_segment_key));
            spans.push(Span::styled(desc_str, theme.footer_segment_val));
            spans.push(Span::raw(" "));
            current_width += item_width + 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
