//! Per-page interaction state.

/// Events that change [`UiState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Header button or overlay was clicked.
    Toggle,
    /// Navigation to another page.
    Reset,
}

/// Interaction state of one rendered page.
///
/// Owned by the caller: the shell reads it while rendering and never keeps
/// it, so each page render starts from whatever value it is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the mobile navigation menu is open.
    pub menu_open: bool,
}

impl UiState {
    /// Flip the menu state.
    #[must_use]
    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
        }
    }

    /// Apply an event and return the new state.
    #[must_use]
    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle => self.toggle_menu(),
            MenuEvent::Reset => Self::default(),
        }
    }
}
