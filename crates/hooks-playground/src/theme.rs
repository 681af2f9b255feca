use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_primary: Color,
    pub bg_panel: Color,

    pub text_primary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,

    pub status_success: Color,
    pub status_error: Color,

    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,

            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,

            selected_bg: tailwind::CYAN.c800,
            selected_fg: tailwind::SLATE.c50,
        }
    }

    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_secondary)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints in the footer and key bindings overlay
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Large number display on the counter screen
    pub fn counter_value(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Destructive actions, e.g. removing a person
    pub fn danger(&self) -> Style {
        Style::default().fg(self.status_error)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn footer(&self) -> Style {
        Style::default().fg(self.text_muted).bg(self.bg_primary)
    }
}
