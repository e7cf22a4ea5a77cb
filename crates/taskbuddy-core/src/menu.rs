//! User-menu open/closed state
//!
//! The dropdown has exactly one piece of state. Every interaction is expressed
//! as a [`MenuEvent`] and folded in with [`MenuState::apply`].

/// Interaction that may change whether the dropdown is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Avatar/name trigger clicked
    TriggerClicked,
    /// Pointer went down somewhere on the page
    PointerDown { inside: bool },
    /// "View Profile" selected
    ProfileSelected,
    /// Logout resolved successfully
    LogoutSucceeded,
    /// Logout was rejected; the menu stays as it is
    LogoutFailed,
}

/// Whether the dropdown is open. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The panel renders only with a user present
    pub fn panel_visible(&self, has_user: bool) -> bool {
        self.open && has_user
    }

    pub fn apply(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::TriggerClicked => self.open = !self.open,
            MenuEvent::PointerDown { inside: false }
            | MenuEvent::ProfileSelected
            | MenuEvent::LogoutSucceeded => self.open = false,
            MenuEvent::PointerDown { inside: true } | MenuEvent::LogoutFailed => {}
        }
    }
}
