use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

pub mod counter_view;
pub mod key_bindings_view;
pub mod people_view;
pub mod search_view;

pub use counter_view::CounterView;
pub use key_bindings_view::KeyBindingsView;
pub use people_view::PeopleView;
pub use search_view::SearchView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Counter,
    Search,
    People,
    KeyBindings,
}

impl ViewId {
    /// Short title shown in the tab bar and panel borders
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Counter => "Counter",
            ViewId::Search => "Search",
            ViewId::People => "People",
            ViewId::KeyBindings => "Key Bindings",
        }
    }
}

/// Screens reachable with tab / shift+tab, in display order
const SCREENS: [ViewId; 3] = [ViewId::Counter, ViewId::Search, ViewId::People];

/// View trait - defines the interface that all views must implement
///
/// Views live on the state's view stack as `Box<dyn View>`, so the trait has to
/// stay object-safe and `Send`.
pub trait View: std::fmt::Debug + Send {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view into the body area
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action.
    fn translate_navigation(&self, _nav: NavigationAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action.
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Translate a view-specific command. Returning None gates the command off.
    fn translate_command(&self, _command: CommandId, _state: &AppState) -> Option<Action> {
        None
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Create the view for a screen id
pub fn screen_view(id: ViewId) -> Box<dyn View> {
    match id {
        ViewId::Counter => Box::new(CounterView::new()),
        ViewId::Search => Box::new(SearchView::new()),
        ViewId::People => Box::new(PeopleView::new()),
        ViewId::KeyBindings => Box::new(KeyBindingsView::new()),
    }
}

fn screen_index(id: ViewId) -> usize {
    SCREENS.iter().position(|s| *s == id).unwrap_or(0)
}

pub fn screen_after(id: ViewId) -> ViewId {
    SCREENS[(screen_index(id) + 1) % SCREENS.len()]
}

pub fn screen_before(id: ViewId) -> ViewId {
    SCREENS[(screen_index(id) + SCREENS.len() - 1) % SCREENS.len()]
}

/// Resolve a command against the active view
///
/// Global commands are translated directly; navigation and view-specific
/// commands only produce an action if the active view accepts them.
pub fn command_action(command: CommandId, view: &dyn View, state: &AppState) -> Option<Action> {
    match command {
        CommandId::GlobalQuit => Some(Action::Global(GlobalAction::Quit)),
        CommandId::GlobalClose => Some(Action::Global(GlobalAction::Close)),
        CommandId::ScreenNext => Some(Action::Global(GlobalAction::NextScreen)),
        CommandId::ScreenPrevious => Some(Action::Global(GlobalAction::PreviousScreen)),
        CommandId::KeyBindingsToggleView => Some(Action::Global(GlobalAction::PushView(
            Box::new(KeyBindingsView::new()),
        ))),
        _ if command.is_navigation() => {
            if !view.capabilities(state).supports_item_navigation() {
                return None;
            }
            let nav = match command {
                CommandId::NavigatePrevious => NavigationAction::Previous,
                _ => NavigationAction::Next,
            };
            view.translate_navigation(nav, state)
        }
        _ => view.translate_command(command, state),
    }
}

/// Render the entire application UI
///
/// Layout: tab bar, body, footer with the keys usable in the active view.
/// Views in the stack render bottom-up into the body.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [tabs_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_tabs(state, tabs_area, f);

    for view in &state.view_stack {
        view.render(state, body_area, f);
    }

    render_footer(state, footer_area, f);
}

fn render_tabs(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let titles: Vec<&str> = SCREENS.iter().map(|id| id.title()).collect();
    let selected = state
        .base_view()
        .map(|view| screen_index(view.view_id()))
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme.muted())
        .highlight_style(theme.panel_title())
        .divider("|");

    f.render_widget(tabs, area);
}

fn render_footer(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let Some(view) = state.active_view() else {
        return;
    };

    let mut spans = Vec::new();
    for (command, hints) in available_bindings(state, view) {
        if !spans.is_empty() {
            spans.push(Span::styled("  ", theme.footer()));
        }
        spans.push(Span::styled(hints.join("/"), theme.key_hint()));
        spans.push(Span::styled(format!(" {}", command.title()), theme.footer()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(theme.footer()), area);
}

/// Bindings usable in `view`, grouped by command in keymap order
pub fn available_bindings<'a>(
    state: &'a AppState,
    view: &dyn View,
) -> Vec<(CommandId, Vec<&'a str>)> {
    let mut grouped: Vec<(CommandId, Vec<&str>)> = Vec::new();

    for binding in state.keymap.bindings() {
        if let Some((_, hints)) = grouped.iter_mut().find(|(c, _)| *c == binding.command) {
            hints.push(binding.hint.as_str());
            continue;
        }
        if command_action(binding.command, view, state).is_some() {
            grouped.push((binding.command, vec![binding.hint.as_str()]));
        }
    }

    grouped
}
