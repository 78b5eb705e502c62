//! Login page view with password and Google sign-in.

use dioxus::prelude::*;
use ui::{login, login_with_google, reset_password, signup, use_auth};

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    SignIn,
    SignUp,
    Reset,
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();

    // If already logged in, redirect to the dashboard
    if !auth().loading && auth().user.is_some() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    }

    let mut mode = use_signal(|| Mode::SignIn);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    let submit = move |_| async move {
        error.set(None);
        notice.set(None);
        let result = match mode() {
            Mode::SignIn => login(auth, &email(), &password()).await,
            Mode::SignUp => {
                let first = Some(first_name().trim().to_string()).filter(|s| !s.is_empty());
                let last = Some(last_name().trim().to_string()).filter(|s| !s.is_empty());
                signup(auth, &email(), &password(), first, last).await
            }
            Mode::Reset => match reset_password(&email()).await {
                Ok(()) => {
                    notice.set(Some(format!("Password reset email sent to {}", email())));
                    return;
                }
                Err(e) => Err(e),
            },
        };

        match result {
            Ok(()) => {
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let google = move |_| async move {
        if let Err(e) = login_with_google().await {
            error.set(Some(e.to_string()));
        }
    };

    rsx! {
        div {
            class: "login-container",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; background: #111827;",

            h1 {
                style: "margin-bottom: 0.5rem; color: #e5e7eb; font-weight: 700; font-size: 1.75rem;",
                "Vigil"
            }

            p {
                style: "margin-bottom: 2rem; color: #9ca3af; font-size: 0.9375rem;",
                {match mode() {
                    Mode::SignIn => "Sign in to the surveillance dashboard",
                    Mode::SignUp => "Create your account",
                    Mode::Reset => "Enter your email to reset your password",
                }}
            }

            div {
                class: "login-form",
                style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",

                if mode() == Mode::SignUp {
                    input {
                        class: "login-input",
                        r#type: "text",
                        placeholder: "First name",
                        value: first_name(),
                        oninput: move |evt| first_name.set(evt.value()),
                    }
                    input {
                        class: "login-input",
                        r#type: "text",
                        placeholder: "Last name",
                        value: last_name(),
                        oninput: move |evt| last_name.set(evt.value()),
                    }
                }

                input {
                    class: "login-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                if mode() != Mode::Reset {
                    input {
                        class: "login-input",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }
                if let Some(msg) = notice() {
                    p { class: "form-notice", "{msg}" }
                }

                button {
                    class: "login-btn password-btn",
                    onclick: submit,
                    {match mode() {
                        Mode::SignIn => "Sign In",
                        Mode::SignUp => "Create Account",
                        Mode::Reset => "Send Reset Email",
                    }}
                }

                if mode() == Mode::SignIn {
                    button {
                        class: "login-btn google-btn",
                        onclick: google,
                        "Continue with Google"
                    }
                }

                div {
                    style: "display: flex; justify-content: space-between; font-size: 0.8125rem;",
                    if mode() == Mode::SignIn {
                        button {
                            class: "link-btn",
                            onclick: move |_| mode.set(Mode::SignUp),
                            "Need an account?"
                        }
                        button {
                            class: "link-btn",
                            onclick: move |_| mode.set(Mode::Reset),
                            "Forgot password?"
                        }
                    } else {
                        button {
                            class: "link-btn",
                            onclick: move |_| mode.set(Mode::SignIn),
                            "Back to sign in"
                        }
                    }
                }
            }
        }

        style {
            r#"
            .login-input {{
                padding: 0.625rem 0.75rem;
                border: 1px solid #374151;
                border-radius: 4px;
                background: #1f2937;
                color: #e5e7eb;
                font-size: 0.9375rem;
            }}

            .login-btn {{
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 0.625rem 1.25rem;
                border: none;
                border-radius: 4px;
                font-size: 0.9375rem;
                font-weight: 500;
                cursor: pointer;
                transition: background-color 0.15s;
            }}

            .login-btn:hover {{
                opacity: 0.9;
            }}

            .password-btn {{
                background-color: #2563eb;
                color: white;
            }}

            .google-btn {{
                background-color: #4285f4;
                color: white;
            }}

            .google-btn:hover {{
                background-color: #357abd;
            }}

            .form-error {{
                margin: 0;
                color: #f87171;
                font-size: 0.8125rem;
            }}

            .form-notice {{
                margin: 0;
                color: #34d399;
                font-size: 0.8125rem;
            }}
            "#
        }
    }
}
