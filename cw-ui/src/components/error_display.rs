//! Error display component.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box, with a button to clear it.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; display: flex; justify-content: space-between; align-items: center;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            button {
                style: "background: none; border: none; color: #C62828; cursor: pointer; font-size: 16px;",
                onclick: move |_| state.error_msg.set(None),
                "×"
            }
        }
    }
}
