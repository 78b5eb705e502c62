use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::LogoutButton;

/// Top navigation bar; the routing links come in as children so this crate
/// stays independent of the app's `Route` type.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        div {
            class: "navbar",
            style: "display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.25rem; background: #111827; color: #e5e7eb;",
            span { style: "font-weight: 700;", "Vigil" }
            {children}
            div { style: "flex: 1;" }
            if let Some(user) = state.user {
                span {
                    style: "font-size: 0.8125rem; color: #9ca3af;",
                    "{user.first_name} {user.last_name}"
                }
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}
