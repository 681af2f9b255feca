//! People screen
//!
//! The screen renders a list, the list renders one row per person, and the remove
//! intent is handed down through both levels to the selected row.

use crate::actions::{Action, NavigationAction, PeopleAction};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::{AppState, PeopleState};
use crate::theme::Theme;
use crate::views::{View, ViewId};
use playground_core::Person;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct PeopleView;

impl PeopleView {
    pub fn new() -> Self {
        Self
    }
}

/// Action removing `person`, passed down to the row that offers it
fn remove_action(person: &Person) -> Action {
    Action::People(PeopleAction::Remove(person.id))
}

impl View for PeopleView {
    fn view_id(&self) -> ViewId {
        ViewId::People
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let [heading_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        f.render_widget(
            Paragraph::new(Span::styled(" Prop Drilling", theme.danger())),
            heading_area,
        );

        render_list(&state.people, theme, &remove_action, list_area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        match nav {
            NavigationAction::Next => Some(Action::People(PeopleAction::NavigateNext)),
            NavigationAction::Previous => Some(Action::People(PeopleAction::NavigatePrevious)),
        }
    }

    fn translate_command(&self, command: CommandId, state: &AppState) -> Option<Action> {
        match command {
            CommandId::PeopleRemoveSelected => state.people.selected_person().map(remove_action),
            CommandId::PeopleRestore => Some(Action::People(PeopleAction::Restore)),
            _ => None,
        }
    }
}

fn render_list(
    people: &PeopleState,
    theme: &Theme,
    on_remove: &dyn Fn(&Person) -> Action,
    area: Rect,
    f: &mut Frame,
) {
    let block = Block::default()
        .title(format!(
            " {} ({}/{}) ",
            ViewId::People.title(),
            people.people.len(),
            people.original.len()
        ))
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    if people.people.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "Everyone was removed. Press R to restore.",
            theme.muted(),
        ))
        .block(block)
        .style(theme.panel_background());
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = people
        .people
        .iter()
        .enumerate()
        .map(|(index, person)| {
            let remove = (index == people.selected).then(|| on_remove(person));
            render_person(person, remove.as_ref(), theme)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(theme.panel_background())
        .highlight_style(theme.selected())
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(people.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_person<'a>(person: &'a Person, remove: Option<&Action>, theme: &Theme) -> ListItem<'a> {
    let mut spans = vec![Span::styled(person.name.as_str(), theme.text())];
    if let Some(Action::People(PeopleAction::Remove(id))) = remove {
        spans.push(Span::styled(format!("  x remove #{}", id), theme.danger()));
    }
    ListItem::new(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_selected_targets_selected_person() {
        let mut state = AppState::for_tests();
        state.people.selected = 2;

        let action = PeopleView::new().translate_command(CommandId::PeopleRemoveSelected, &state);
        assert!(matches!(
            action,
            Some(Action::People(PeopleAction::Remove(3)))
        ));
    }

    #[test]
    fn test_remove_gated_when_list_empty() {
        let mut state = AppState::for_tests();
        state.people.people.clear();

        let action = PeopleView::new().translate_command(CommandId::PeopleRemoveSelected, &state);
        assert!(action.is_none());
    }
}
