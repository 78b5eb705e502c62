//! # User model for authenticated users
//!
//! Defines the two representations of a Vigil user:
//!
//! ## [`ProviderUser`]
//!
//! The raw record handed back by the external identity provider: an opaque
//! unique id, and optional email and display name. The dashboard never
//! stores these directly.
//!
//! ## [`AuthUser`]
//!
//! The application-side user shape, derived deterministically from a
//! [`ProviderUser`] by [`AuthUser::from_provider`]:
//!
//! - `id` — numeric, parsed from the last 8 hex characters of the provider
//!   uid (0 when the uid tail is not hex), giving a stable identifier
//!   without a user table.
//! - `username` — the local part of the email, `"user"` when no email.
//! - `first_name` / `last_name` — the display name split on whitespace; the
//!   first token is the first name, the remainder joins into the last name.
//!
//! The user is refreshed from the provider record on every session-change
//! event and dropped to `None` on sign-out.

use serde::{Deserialize, Serialize};

/// Raw user record from the external identity provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

/// Application user shape exposed to the UI and the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl AuthUser {
    /// Map a provider record into the application user shape.
    pub fn from_provider(provider: &ProviderUser) -> Self {
        let display_name = provider.display_name.clone().unwrap_or_default();
        let mut parts = display_name.split_whitespace();
        let first_name = parts.next().unwrap_or("").to_string();
        let last_name = parts.collect::<Vec<_>>().join(" ");

        let email = provider.email.clone().unwrap_or_default();
        let username = email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .unwrap_or("user")
            .to_string();

        // get() rather than indexing: the uid is provider-controlled and the
        // tail offset may not land on a char boundary.
        let tail_start = provider.uid.len().saturating_sub(8);
        let id = provider
            .uid
            .get(tail_start..)
            .and_then(|tail| u32::from_str_radix(tail, 16).ok())
            .unwrap_or(0);

        Self {
            id,
            username,
            email,
            first_name,
            last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(uid: &str, email: Option<&str>, name: Option<&str>) -> ProviderUser {
        ProviderUser {
            uid: uid.to_string(),
            email: email.map(str::to_string),
            display_name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_maps_display_name_and_email() {
        let user = AuthUser::from_provider(&provider(
            "a1b2c3d4e5f60718",
            Some("jane@x.com"),
            Some("Jane Doe"),
        ));

        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.username, "jane");
        assert_eq!(user.email, "jane@x.com");
        assert_eq!(user.id, 0xe5f60718);
    }

    #[test]
    fn test_multi_word_last_name() {
        let user = AuthUser::from_provider(&provider(
            "00000001",
            Some("maria@x.com"),
            Some("Maria de la Cruz"),
        ));

        assert_eq!(user.first_name, "Maria");
        assert_eq!(user.last_name, "de la Cruz");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let user = AuthUser::from_provider(&provider("zzzz", None, None));

        assert_eq!(user.id, 0);
        assert_eq!(user.username, "user");
        assert_eq!(user.email, "");
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn test_short_uid_is_parsed_whole() {
        let user = AuthUser::from_provider(&provider("ff", Some("a@b.c"), None));
        assert_eq!(user.id, 0xff);
    }

    #[test]
    fn test_multibyte_uid_maps_to_zero() {
        // Tail offset lands inside a multi-byte character; must not panic.
        let user = AuthUser::from_provider(&provider("αβγδx", Some("a@b.c"), None));
        assert_eq!(user.id, 0);
    }
}
