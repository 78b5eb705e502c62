//! # Transient toast notifications
//!
//! A context-held [`ToastStack`] signal that any component can push into,
//! plus the [`ToastHost`] that renders the stack in the corner of the
//! viewport. Toasts auto-dismiss after five seconds.

use std::time::Duration;

use dioxus::prelude::*;

use crate::fetch::sleep;

const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Visual style of a toast, mapped from alert severity by the notification
/// layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast--info",
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Warning => "toast toast--warning",
            ToastLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Get the toast stack signal from context.
pub fn use_toasts() -> Signal<ToastStack> {
    use_context::<Signal<ToastStack>>()
}

/// Push a toast and schedule its auto-dismissal.
pub fn push_toast(stack: &mut Signal<ToastStack>, level: ToastLevel, message: &str) {
    let id = stack.write().push(level, message);
    let mut stack = *stack;
    spawn(async move {
        sleep(TOAST_DURATION).await;
        stack.write().dismiss(id);
    });
}

/// Provider component that owns the toast stack and renders the host.
/// Wrap the app with this component to enable toasts anywhere below it.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let stack = use_signal(ToastStack::default);
    use_context_provider(|| stack);

    rsx! {
        {children}
        ToastHost {}
    }
}

/// Renders the current toast stack, newest at the bottom.
#[component]
pub fn ToastHost() -> Element {
    let mut stack = use_toasts();

    rsx! {
        div {
            class: "toast-host",
            style: "position: fixed; top: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 1000;",
            for toast in stack().toasts {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    style: "display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1rem; border-radius: 6px; color: white; box-shadow: 0 2px 8px rgba(0,0,0,0.25);",
                    span { "{toast.message}" }
                    button {
                        style: "background: none; border: none; color: inherit; cursor: pointer; font-size: 1rem;",
                        onclick: move |_| {
                            stack.write().dismiss(toast.id);
                        },
                        "✕"
                    }
                }
            }
        }

        style {
            r#"
            .toast--info {{ background-color: #2563eb; }}
            .toast--success {{ background-color: #16a34a; }}
            .toast--warning {{ background-color: #d97706; }}
            .toast--error {{ background-color: #dc2626; }}
            "#
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut stack = ToastStack::default();
        let a = stack.push(ToastLevel::Info, "one");
        let b = stack.push(ToastLevel::Error, "two");
        assert!(b > a);
        assert_eq!(stack.toasts.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut stack = ToastStack::default();
        let a = stack.push(ToastLevel::Info, "one");
        let b = stack.push(ToastLevel::Warning, "two");
        stack.dismiss(a);
        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].id, b);
    }
}
