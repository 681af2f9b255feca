use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{available_bindings, View, ViewId};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Floating overlay listing the keys usable on the current screen
#[derive(Debug, Clone)]
pub struct KeyBindingsView;

impl KeyBindingsView {
    pub fn new() -> Self {
        Self
    }
}

impl View for KeyBindingsView {
    fn view_id(&self) -> ViewId {
        ViewId::KeyBindings
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let Some(screen) = state.base_view() else {
            return;
        };

        let lines: Vec<Line> = available_bindings(state, screen)
            .into_iter()
            .map(|(command, hints)| {
                Line::from(vec![
                    Span::styled(format!("{:>14}  ", hints.join(" / ")), theme.key_hint()),
                    Span::styled(command.title(), theme.text()),
                ])
            })
            .collect();

        let height = (lines.len() as u16).saturating_add(2);
        let popup = centered(area, 50, height);

        f.render_widget(Clear, popup);
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(
                        " {} · {} ",
                        self.view_id().title(),
                        screen.view_id().title()
                    ))
                    .borders(Borders::ALL)
                    .border_style(theme.panel_border())
                    .title_style(theme.panel_title()),
            )
            .style(theme.panel_background());
        f.render_widget(paragraph, popup);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
