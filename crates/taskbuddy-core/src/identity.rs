//! Derived display fields for the menu trigger
//!
//! Everything here is a pure function of the auth user and profile records.
//! Results are recomputed on every render and never stored.

use crate::models::{AuthUser, UserProfile};

/// Shown when neither record carries a display name
pub const FALLBACK_DISPLAY_NAME: &str = "Profile";

/// Shown when no initial can be derived
pub const FALLBACK_INITIAL: &str = "?";

/// What the trigger shows in the avatar slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    /// Image source URL
    Photo(String),
    /// Initials placeholder text
    Initial(String),
}

/// Resolved name and avatar for the signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
    pub avatar: Avatar,
}

impl Identity {
    pub fn resolve(user: &AuthUser, profile: Option<&UserProfile>) -> Self {
        let display_name = display_name(profile, Some(user));
        let avatar = match avatar_source(profile, Some(user)) {
            Some(url) => Avatar::Photo(url),
            None => Avatar::Initial(initial(&display_name, user.email.as_deref())),
        };

        Self {
            display_name,
            avatar,
        }
    }
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Profile name, then auth name, then [`FALLBACK_DISPLAY_NAME`]
pub fn display_name(profile: Option<&UserProfile>, user: Option<&AuthUser>) -> String {
    present(profile.and_then(|p| p.display_name.as_ref()))
        .or_else(|| present(user.and_then(|u| u.display_name.as_ref())))
        .unwrap_or(FALLBACK_DISPLAY_NAME)
        .to_string()
}

/// Profile photo, then auth photo; `None` means render initials
pub fn avatar_source(profile: Option<&UserProfile>, user: Option<&AuthUser>) -> Option<String> {
    present(profile.and_then(|p| p.photo_url.as_ref()))
        .or_else(|| present(user.and_then(|u| u.photo_url.as_ref())))
        .map(str::to_string)
}

/// First character of the display name, else of the email, else `"?"`
pub fn initial(display_name: &str, email: Option<&str>) -> String {
    display_name
        .chars()
        .next()
        .or_else(|| email.and_then(|e| e.chars().next()))
        .map(String::from)
        .unwrap_or_else(|| FALLBACK_INITIAL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> AuthUser {
        AuthUser {
            uid: "u-1".to_string(),
            display_name: name.map(str::to_string),
            ..AuthUser::default()
        }
    }

    fn profile(name: Option<&str>) -> UserProfile {
        UserProfile {
            display_name: name.map(str::to_string),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_profile_name_wins_over_auth_name() {
        let p = profile(Some("Jane"));
        let u = user(Some("John"));
        assert_eq!(display_name(Some(&p), Some(&u)), "Jane");
    }

    #[test]
    fn test_auth_name_used_without_profile() {
        let u = user(Some("John"));
        assert_eq!(display_name(None, Some(&u)), "John");
    }

    #[test]
    fn test_fallback_name_when_both_absent() {
        let u = user(None);
        assert_eq!(display_name(None, Some(&u)), "Profile");
        assert_eq!(display_name(Some(&profile(None)), None), "Profile");
    }

    #[test]
    fn test_empty_profile_name_falls_through() {
        let p = profile(Some(""));
        let u = user(Some("John"));
        assert_eq!(display_name(Some(&p), Some(&u)), "John");
    }

    #[test]
    fn test_initial_from_display_name() {
        assert_eq!(initial("Jane", Some("x@y.z")), "J");
    }

    #[test]
    fn test_initial_falls_back_to_email() {
        assert_eq!(initial("", Some("a@b.com")), "a");
    }

    #[test]
    fn test_initial_question_mark_when_nothing_left() {
        assert_eq!(initial("", Some("")), "?");
        assert_eq!(initial("", None), "?");
    }

    #[test]
    fn test_initial_takes_whole_character() {
        assert_eq!(initial("Émile", None), "É");
    }

    #[test]
    fn test_avatar_prefers_profile_photo() {
        let p = UserProfile::default().with_photo_url("https://img/profile.png");
        let u = user(None).with_photo_url("https://img/auth.png");
        assert_eq!(
            avatar_source(Some(&p), Some(&u)).as_deref(),
            Some("https://img/profile.png")
        );
        assert_eq!(
            avatar_source(None, Some(&u)).as_deref(),
            Some("https://img/auth.png")
        );
        assert_eq!(avatar_source(None, Some(&user(None))), None);
    }

    #[test]
    fn test_resolve_without_photo_uses_initial() {
        let u = user(Some("John")).with_email("john@example.com");
        let identity = Identity::resolve(&u, None);

        assert_eq!(identity.display_name, "John");
        assert_eq!(identity.avatar, Avatar::Initial("J".to_string()));
    }

    #[test]
    fn test_resolve_bare_user_shows_profile_fallback() {
        let identity = Identity::resolve(&user(None), None);
        assert_eq!(identity.display_name, "Profile");
        assert_eq!(identity.avatar, Avatar::Initial("P".to_string()));
    }
}
