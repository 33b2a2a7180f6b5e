//! Header shown on every signed-in screen.

use crate::state::AppState;
use cw_core::navigation::Screen;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TopBarProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    /// Screen the back arrow returns to; no arrow when `None`.
    #[props(default)]
    pub back: Option<Screen>,
}

/// Title, offline indicator, signed-in user and logout.
#[component]
pub fn TopBar(props: TopBarProps) -> Element {
    let mut state = use_context::<AppState>();
    let offline = (state.offline)();
    let user = state
        .navigator
        .read()
        .user()
        .map(|u| format!("{} ({})", u.username, u.role.label()));
    let back = props.back;

    rsx! {
        div {
            style: "background: white; border-bottom: 1px solid #E5E7EB; padding: 12px 24px; display: flex; justify-content: space-between; align-items: center;",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                if let Some(target) = back {
                    button {
                        style: "background: none; border: none; cursor: pointer; font-size: 18px; color: #374151;",
                        onclick: move |_| state.navigator.write().navigate(target),
                        "←"
                    }
                }
                div {
                    h1 { style: "margin: 0; font-size: 20px; color: #111827;", "{props.title}" }
                    if !props.subtitle.is_empty() {
                        p { style: "margin: 0; font-size: 13px; color: #6B7280;", "{props.subtitle}" }
                    }
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                if offline {
                    span {
                        style: "padding: 2px 10px; border-radius: 9999px; background: #FEF3C7; color: #92400E; font-size: 12px; font-weight: 600;",
                        "Offline"
                    }
                } else {
                    span {
                        style: "padding: 2px 10px; border-radius: 9999px; background: #DCFCE7; color: #166534; font-size: 12px; font-weight: 600;",
                        "Online"
                    }
                }
                if let Some(user) = user {
                    span { style: "font-size: 13px; color: #374151;", "{user}" }
                    button {
                        style: "padding: 6px 12px; border: 1px solid #D1D5DB; border-radius: 6px; background: white; cursor: pointer;",
                        onclick: move |_| state.navigator.write().logout(),
                        "Logout"
                    }
                }
            }
        }
    }
}
