use crate::actions::{Action, CounterAction};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::views::{View, ViewId};
use playground_core::CounterPatch;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Counter screen: a single button-like value driven by the counter reducer
#[derive(Debug, Clone)]
pub struct CounterView;

impl CounterView {
    pub fn new() -> Self {
        Self
    }
}

impl View for CounterView {
    fn view_id(&self) -> ViewId {
        ViewId::Counter
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let config = &state.app_config;

        let block = Block::default()
            .title(format!(" {} ", self.view_id().title()))
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title_style(theme.panel_title());

        let padding = area.height.saturating_sub(6) / 2;
        let mut lines: Vec<Line> = (0..padding).map(|_| Line::default()).collect();
        lines.push(Line::from(vec![
            Span::styled(format!("[ {} ", state.counter.count), theme.counter_value()),
            Span::styled("- ", theme.muted()),
            Span::styled(format!("{} ]", state.counter.new_count), theme.text()),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                "step {} · starts at {}",
                config.step, config.initial_count
            ),
            theme.muted(),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .style(theme.panel_background());

        f.render_widget(paragraph, area);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_command(&self, command: CommandId, state: &AppState) -> Option<Action> {
        let action = match command {
            CommandId::CounterIncrement => CounterAction::Increment,
            CommandId::CounterDecrement => CounterAction::Decrement,
            // Computed from whatever the count is when applied, not from `state` here
            CommandId::CounterStep => CounterAction::step(state.app_config.step),
            CommandId::CounterReset => {
                CounterAction::Patch(CounterPatch::count(state.app_config.initial_count))
            }
            _ => return None,
        };
        Some(Action::Counter(action))
    }
}
