use crate::app::state::{AppState, Focus};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::page::Page;
use crate::components::search_bar::SearchBar;
use crate::components::search_panel::{self, SearchPanel};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    Frame,
};

pub const SEARCH_WIDTH: u16 = 42;

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with embedded search input
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let header_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(SEARCH_WIDTH),
            Constraint::Length(1),
        ])
        .split(main[0]);

    AppLayout {
        header: main[0],
        search: header_cols[1],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());
    let focused = state.focus == Focus::Search;

    {
        let theme = &state.theme;
        let input = &mut state.search.input;
        input.set_style(theme.input);
        input.set_placeholder_style(theme.input_placeholder);
        input.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
    }

    let state = &*state;
    let theme = &state.theme;

    f.render_widget(
        Header {
            location: &state.location,
            theme,
        },
        layout.header,
    );

    if layout.search.width > 0 && layout.search.height > 0 {
        f.render_widget(
            SearchBar {
                search: &state.search,
                theme,
                focused,
                frame_count: state.frame_count,
            },
            layout.search,
        );
    }

    if layout.body.height > 0 {
        f.render_widget(
            Page {
                location: &state.location,
                history: &state.history,
                theme,
            },
            layout.body,
        );
    }

    f.render_widget(Footer { state, theme }, layout.footer);

    // Overlay layer: drawn last so it sits above the page and footer.
    if state.search.overlay.is_open() {
        let hits = state.search.overlay.hits();
        let area = search_panel::panel_rect(
            state.search.anchor,
            hits,
            &state.config.overlay,
            f.area(),
        );
        f.render_widget(
            SearchPanel {
                hits,
                selected: state.search.overlay.selected(),
                theme,
            },
            area,
        );
    }
}
