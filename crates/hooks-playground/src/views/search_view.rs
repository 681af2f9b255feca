use crate::actions::{Action, SearchAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{View, ViewId};
use playground_core::Story;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Search box over the bundled stories
#[derive(Debug, Clone)]
pub struct SearchView;

impl SearchView {
    pub fn new() -> Self {
        Self
    }
}

impl View for SearchView {
    fn view_id(&self) -> ViewId {
        ViewId::Search
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let [input_area, results_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let input = Paragraph::new(Line::from(vec![
            Span::styled(state.search.term.as_str(), theme.text()),
            Span::styled("▏", theme.key_hint()),
        ]))
        .block(
            Block::default()
                .title(format!(" {} ", self.view_id().title()))
                .borders(Borders::ALL)
                .border_style(theme.panel_border())
                .title_style(theme.panel_title()),
        )
        .style(theme.panel_background());
        f.render_widget(input, input_area);

        let results = state.search.results();
        let block = Block::default()
            .title(format!(" Stories ({}) ", results.len()))
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title_style(theme.panel_title());

        if results.is_empty() {
            let empty = Paragraph::new(Span::styled(
                format!("No stories match {:?}", state.search.term),
                theme.muted(),
            ))
            .block(block)
            .style(theme.panel_background());
            f.render_widget(empty, results_area);
            return;
        }

        let items: Vec<ListItem> = results
            .into_iter()
            .map(|story| story_item(story, theme))
            .collect();
        let list = List::new(items)
            .block(block)
            .style(theme.panel_background());
        f.render_widget(list, results_area);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => SearchAction::Char(c),
            TextInputAction::Backspace => SearchAction::Backspace,
            TextInputAction::ClearLine => SearchAction::Clear,
            TextInputAction::Escape => return None,
        };
        Some(Action::Search(action))
    }
}

fn story_item<'a>(story: &'a Story, theme: &Theme) -> ListItem<'a> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(story.title.as_str(), theme.panel_title()),
            Span::styled(format!("  {}", story.url), theme.muted()),
        ]),
        Line::from(Span::styled(
            format!(
                "  by {} · {} comments · {} points",
                story.author, story.num_comments, story.points
            ),
            theme.text(),
        )),
    ])
}
