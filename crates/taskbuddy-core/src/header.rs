//! Render decision for the header's right-hand side

use crate::identity::Identity;
use crate::menu::MenuState;
use crate::models::{AuthUser, UserProfile};

/// Trigger contents, present only while a user is signed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerModel {
    pub identity: Identity,
    pub expanded: bool,
}

/// What the header renders for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderModel {
    pub trigger: Option<TriggerModel>,
    pub panel_open: bool,
}

impl HeaderModel {
    pub fn derive(
        user: Option<&AuthUser>,
        profile: Option<&UserProfile>,
        menu: MenuState,
    ) -> Self {
        let panel_open = menu.panel_visible(user.is_some());
        let trigger = user.map(|user| TriggerModel {
            identity: Identity::resolve(user, profile),
            expanded: panel_open,
        });

        Self {
            trigger,
            panel_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Avatar;
    use crate::menu::MenuEvent;

    fn open_menu() -> MenuState {
        let mut menu = MenuState::new();
        menu.apply(MenuEvent::TriggerClicked);
        menu
    }

    #[test]
    fn test_nothing_renders_without_user() {
        for menu in [MenuState::new(), open_menu()] {
            let model = HeaderModel::derive(None, None, menu);
            assert!(model.trigger.is_none());
            assert!(!model.panel_open);
        }
    }

    #[test]
    fn test_trigger_renders_for_user_with_closed_panel() {
        let user = AuthUser::new("u-1").with_display_name("John");
        let model = HeaderModel::derive(Some(&user), None, MenuState::new());

        let trigger = model.trigger.expect("trigger rendered");
        assert_eq!(trigger.identity.display_name, "John");
        assert!(!trigger.expanded);
        assert!(!model.panel_open);
    }

    #[test]
    fn test_open_menu_with_profile_override() {
        let user = AuthUser::new("u-1")
            .with_display_name("John")
            .with_photo_url("https://img/auth.png");
        let profile = UserProfile::default()
            .with_display_name("Jane")
            .with_photo_url("https://img/jane.png");

        let model = HeaderModel::derive(Some(&user), Some(&profile), open_menu());

        assert!(model.panel_open);
        let trigger = model.trigger.unwrap();
        assert!(trigger.expanded);
        assert_eq!(trigger.identity.display_name, "Jane");
        assert_eq!(
            trigger.identity.avatar,
            Avatar::Photo("https://img/jane.png".to_string())
        );
    }
}
