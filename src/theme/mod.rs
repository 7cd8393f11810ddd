use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header: Style,

    pub input: Style,
    pub input_placeholder: Style,
    pub input_icon: Style,

    pub panel: Style,
    pub panel_suggestions_header: Style,
    pub panel_results_header: Style,
    pub panel_meta: Style,
    pub panel_hint_key: Style,

    pub status_done: Color,
    pub status_active: Color,
    pub status_pending: Color,
    pub status_cancelled: Color,
    pub status_neutral: Color,
    pub chip_text: Color,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub page_title: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    Catppuccin,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::Catppuccin => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Catppuccin => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.sapphire),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            input: Style::default().fg(p.text),
            input_placeholder: Style::default().fg(p.overlay0),
            input_icon: Style::default().fg(p.overlay1),

            panel: Style::default().bg(p.mantle).fg(p.text),
            panel_suggestions_header: Style::default()
                .bg(dim_color(p.sky, 0.25))
                .fg(p.sky)
                .add_modifier(Modifier::BOLD),
            panel_results_header: Style::default()
                .bg(p.surface0)
                .fg(p.subtext0)
                .add_modifier(Modifier::BOLD),
            panel_meta: Style::default().fg(p.overlay1),
            panel_hint_key: Style::default().bg(p.surface1).fg(p.text),

            status_done: p.green,
            status_active: p.blue,
            status_pending: p.yellow,
            status_cancelled: p.red,
            status_neutral: p.overlay0,
            chip_text: p.crust,

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            page_title: Style::default().fg(p.lavender).add_modifier(Modifier::BOLD),
            list_selected: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }

    /// Chip colour for a backend status string; unknown statuses are neutral.
    pub fn status_color(&self, status: &str) -> Color {
        match status {
            "completed" | "done" => self.status_done,
            "in_progress" | "active" => self.status_active,
            "pending" => self.status_pending,
            "cancelled" => self.status_cancelled,
            _ => self.status_neutral,
        }
    }

    pub fn status_chip(&self, status: &str) -> Style {
        Style::default()
            .bg(self.status_color(status))
            .fg(self.chip_text)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::Nord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors() {
        let theme = Theme::from_palette(&nord::NORD);
        assert_eq!(theme.status_color("done"), nord::NORD.green);
        assert_eq!(theme.status_color("completed"), theme.status_color("done"));
        assert_eq!(theme.status_color("active"), nord::NORD.blue);
        assert_eq!(theme.status_color("todo"), theme.status_neutral);
        assert_eq!(theme.status_color("on_hold"), theme.status_neutral);
    }
}
