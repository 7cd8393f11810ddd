//! The result overlay: layout math shared with click hit-testing, and the
//! widget that draws it on top of everything else.

use super::helpers::{draw_drop_shadow, status_label, truncate_chars};
use crate::app::config::OverlaySettings;
use crate::app::state::{Anchor, SearchHits};
use crate::domain::models::{SearchResultItem, SearchSuggestion};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

const DESCRIPTION_LIMIT: usize = 80;
const HINT_ROWS: u16 = 1;
const SUGGESTION_ICON: &str = "✦";
const RESULT_ICON: &str = "▸";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRow {
    SuggestionsHeader,
    Suggestion(usize),
    Divider,
    ResultsHeader,
    ResultTitle(usize),
    ResultDetail(usize),
}

impl PanelRow {
    /// Position in `suggestions ++ results`, for rows that belong to an item.
    pub fn item_index(self, suggestion_count: usize) -> Option<usize> {
        match self {
            PanelRow::Suggestion(i) => Some(i),
            PanelRow::ResultTitle(i) | PanelRow::ResultDetail(i) => Some(suggestion_count + i),
            _ => None,
        }
    }
}

fn has_detail(item: &SearchResultItem) -> bool {
    item.description.is_some() || item.project.is_some() || item.sprint.is_some()
}

pub fn panel_rows(hits: &SearchHits) -> Vec<PanelRow> {
    let mut rows = Vec::new();
    if !hits.suggestions.is_empty() {
        rows.push(PanelRow::SuggestionsHeader);
        rows.extend((0..hits.suggestions.len()).map(PanelRow::Suggestion));
        if !hits.results.is_empty() {
            rows.push(PanelRow::Divider);
        }
    }
    if !hits.results.is_empty() {
        rows.push(PanelRow::ResultsHeader);
        for (i, item) in hits.results.iter().enumerate() {
            rows.push(PanelRow::ResultTitle(i));
            if has_detail(item) {
                rows.push(PanelRow::ResultDetail(i));
            }
        }
    }
    rows
}

/// Panel bounds: centred on the anchor, clamped to the viewport.
pub fn panel_rect(
    anchor: Anchor,
    hits: &SearchHits,
    settings: &OverlaySettings,
    viewport: Rect,
) -> Rect {
    let max_width = (u32::from(viewport.width) * 9 / 10) as u16;
    let width = settings.width.min(max_width);
    let content = panel_rows(hits).len() as u16;
    let height = content
        .saturating_add(HINT_ROWS + 2)
        .min(settings.max_height)
        .min(viewport.bottom().saturating_sub(anchor.top));

    let mut x = anchor.center_x.saturating_sub(width / 2);
    if x.saturating_add(width) > viewport.right() {
        x = viewport.right().saturating_sub(width);
    }
    Rect::new(x, anchor.top, width, height).intersection(viewport)
}

/// Rows of the panel that list items (inside the border, above the hints).
fn list_area(panel: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(panel);
    Rect {
        height: inner.height.saturating_sub(HINT_ROWS),
        ..inner
    }
}

/// First visible row, chosen so the selected item is fully on screen.
pub fn scroll_offset(
    rows: &[PanelRow],
    visible: usize,
    selected: Option<usize>,
    suggestion_count: usize,
) -> usize {
    if rows.len() <= visible || visible == 0 {
        return 0;
    }
    let Some(selected) = selected else {
        return 0;
    };
    let last = rows
        .iter()
        .rposition(|row| row.item_index(suggestion_count) == Some(selected));
    match last {
        Some(last) if last >= visible => (last + 1 - visible).min(rows.len() - visible),
        _ => 0,
    }
}

/// Which item, if any, sits under `position`.
pub fn item_at(
    panel: Rect,
    hits: &SearchHits,
    selected: Option<usize>,
    position: Position,
) -> Option<usize> {
    let list = list_area(panel);
    if !list.contains(position) {
        return None;
    }
    let rows = panel_rows(hits);
    let offset = scroll_offset(&rows, list.height as usize, selected, hits.suggestions.len());
    let row = offset + (position.y - list.y) as usize;
    rows.get(row)?.item_index(hits.suggestions.len())
}

pub struct SearchPanel<'a> {
    pub hits: &'a SearchHits,
    pub selected: Option<usize>,
    pub theme: &'a Theme,
}

impl SearchPanel<'_> {
    fn suggestion_line(&self, suggestion: &SearchSuggestion, style: Style) -> Line<'static> {
        let icon = suggestion.icon.clone().unwrap_or_else(|| SUGGESTION_ICON.to_string());
        Line::from(vec![
            Span::styled(format!(" {icon} "), style),
            Span::styled(suggestion.text.clone(), style),
            Span::styled(" →", style.patch(self.theme.panel_meta)),
        ])
    }

    fn result_title_line(&self, item: &SearchResultItem, style: Style) -> Line<'static> {
        let icon = item.icon.clone().unwrap_or_else(|| RESULT_ICON.to_string());
        let mut spans = vec![
            Span::styled(format!(" {icon} "), style),
            Span::styled(item.title.clone(), style.add_modifier(Modifier::BOLD)),
        ];
        if let Some(status) = &item.status {
            spans.push(Span::styled(" ", style));
            spans.push(Span::styled(
                format!(" {} ", status_label(status)),
                self.theme.status_chip(status),
            ));
        }
        Line::from(spans)
    }

    fn result_detail_line(&self, item: &SearchResultItem, style: Style) -> Line<'static> {
        let meta = style.patch(self.theme.panel_meta);
        let mut spans = vec![Span::styled("    ", style)];
        if let Some(description) = &item.description {
            spans.push(Span::styled(
                truncate_chars(description, DESCRIPTION_LIMIT),
                meta,
            ));
        }
        if let Some(project) = &item.project {
            spans.push(Span::styled(format!("  ▣ {project}"), meta));
        }
        if let Some(sprint) = &item.sprint {
            spans.push(Span::styled(format!("  • ⟳ {sprint}"), meta));
        }
        Line::from(spans)
    }

    fn hint_line(&self) -> Line<'static> {
        let key = self.theme.panel_hint_key;
        let text = self.theme.panel_meta;
        Line::from(vec![
            Span::styled(format!(" {SUGGESTION_ICON} Smart search  "), text),
            Span::styled(" ↑↓ ", key),
            Span::styled(" Navigate  ", text),
            Span::styled(" Enter ", key),
            Span::styled(" Select  ", text),
            Span::styled(" Esc ", key),
            Span::styled(" Close", text),
        ])
    }
}

impl Widget for SearchPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let terminal_area = buf.area;
        draw_drop_shadow(buf, area, terminal_area);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.panel);
        block.render(area, buf);

        let list = list_area(area);
        let rows = panel_rows(self.hits);
        let suggestion_count = self.hits.suggestions.len();
        let offset = scroll_offset(&rows, list.height as usize, self.selected, suggestion_count);

        for (y, row) in (list.y..list.bottom()).zip(rows.iter().skip(offset)) {
            let is_selected =
                self.selected.is_some() && row.item_index(suggestion_count) == self.selected;
            let style = if is_selected {
                self.theme.list_selected
            } else {
                self.theme.panel
            };
            if is_selected {
                buf.set_style(Rect::new(list.x, y, list.width, 1), style);
            }

            let line = match *row {
                PanelRow::SuggestionsHeader => {
                    buf.set_style(
                        Rect::new(list.x, y, list.width, 1),
                        self.theme.panel_suggestions_header,
                    );
                    Line::from(Span::styled(
                        format!(" {SUGGESTION_ICON} SUGGESTIONS"),
                        self.theme.panel_suggestions_header,
                    ))
                }
                PanelRow::Suggestion(i) => self.suggestion_line(&self.hits.suggestions[i], style),
                PanelRow::Divider => Line::from(Span::styled(
                    "─".repeat(list.width as usize),
                    self.theme.border,
                )),
                PanelRow::ResultsHeader => {
                    buf.set_style(
                        Rect::new(list.x, y, list.width, 1),
                        self.theme.panel_results_header,
                    );
                    Line::from(Span::styled(
                        format!(" SEARCH RESULTS ({})", self.hits.results.len()),
                        self.theme.panel_results_header,
                    ))
                }
                PanelRow::ResultTitle(i) => self.result_title_line(&self.hits.results[i], style),
                PanelRow::ResultDetail(i) => self.result_detail_line(&self.hits.results[i], style),
            };
            buf.set_line(list.x, y, &line, list.width);
        }

        let hints_y = list.bottom();
        if hints_y < area.bottom().saturating_sub(1) {
            buf.set_line(list.x, hints_y, &self.hint_line(), list.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ResultKind, SuggestionKind};

    fn hits(suggestions: usize, results: usize, with_detail: bool) -> SearchHits {
        SearchHits {
            suggestions: (0..suggestions)
                .map(|i| SearchSuggestion::new(SuggestionKind::Search, format!("hint {i}")))
                .collect(),
            results: (0..results)
                .map(|i| {
                    let mut item = SearchResultItem::new(ResultKind::Task, i as i64, format!("Task {i}"));
                    if with_detail {
                        item.description = Some("details".to_string());
                    }
                    item
                })
                .collect(),
        }
    }

    #[test]
    fn test_panel_rows_layout() {
        use PanelRow::*;
        assert_eq!(
            panel_rows(&hits(1, 2, false)),
            vec![SuggestionsHeader, Suggestion(0), Divider, ResultsHeader, ResultTitle(0), ResultTitle(1)]
        );
        assert_eq!(
            panel_rows(&hits(0, 1, true)),
            vec![ResultsHeader, ResultTitle(0), ResultDetail(0)]
        );
    }

    #[test]
    fn test_panel_rect_centered_and_clamped() {
        let settings = OverlaySettings {
            width: 20,
            ..OverlaySettings::default()
        };
        let viewport = Rect::new(0, 0, 100, 30);
        let rect = panel_rect(Anchor { top: 4, center_x: 50 }, &hits(0, 1, false), &settings, viewport);
        assert_eq!(rect, Rect::new(40, 4, 20, 5));

        let right_edge = panel_rect(Anchor { top: 4, center_x: 98 }, &hits(0, 1, false), &settings, viewport);
        assert_eq!(right_edge.right(), 100);

        let cramped = panel_rect(Anchor { top: 28, center_x: 50 }, &hits(0, 8, false), &settings, viewport);
        assert_eq!(cramped.bottom(), 30);
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        let h = hits(0, 10, true);
        let rows = panel_rows(&h);
        assert_eq!(scroll_offset(&rows, 6, None, 0), 0);
        assert_eq!(scroll_offset(&rows, 6, Some(1), 0), 0);
        // Result 9 occupies the last two rows.
        assert_eq!(scroll_offset(&rows, 6, Some(9), 0), rows.len() - 6);
    }

    #[test]
    fn test_item_at_maps_rows() {
        let h = hits(1, 1, false);
        let panel = Rect::new(10, 5, 30, 10);
        // Row 0 of the list is the suggestions header.
        assert_eq!(item_at(panel, &h, None, Position::new(12, 6)), None);
        assert_eq!(item_at(panel, &h, None, Position::new(12, 7)), Some(0));
        assert_eq!(item_at(panel, &h, None, Position::new(12, 10)), Some(1));
        // Border.
        assert_eq!(item_at(panel, &h, None, Position::new(10, 7)), None);
    }

    #[test]
    fn test_render_highlights_selection() {
        let theme = Theme::default();
        let h = hits(0, 2, false);
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        SearchPanel {
            hits: &h,
            selected: Some(1),
            theme: &theme,
        }
        .render(Rect::new(0, 0, 38, 7), &mut buf);

        let row_text = |y: u16| -> String { (0..38).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(row_text(1).contains("SEARCH RESULTS (2)"));
        assert!(row_text(3).contains("Task 1"));
        assert_eq!(buf[(5, 3)].bg, theme.list_selected.bg.unwrap());
        assert!(row_text(5).contains("Navigate"));
    }
}
