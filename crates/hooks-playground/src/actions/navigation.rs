/// Generic navigation intent, translated by the active view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Next,
    Previous,
}
