//! View capabilities
//!
//! Views declare what kind of input they accept so the keyboard middleware can
//! route keys without knowing about concrete views.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PanelCapabilities: u32 {
        /// Character keys are text, not commands
        const TEXT_INPUT = 1 << 0;

        /// View can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 1;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}
