use super::{INPUT_STYLE, PRIMARY_BUTTON_STYLE};
use cw_core::user::User;
use cw_ui::js_bridge;
use cw_ui::state::AppState;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    SignUp,
}

fn tab_style(active: bool) -> &'static str {
    if active {
        "flex: 1; padding: 10px; border: none; border-bottom: 2px solid #2563EB; background: none; color: #2563EB; font-weight: 600; cursor: pointer;"
    } else {
        "flex: 1; padding: 10px; border: none; border-bottom: 2px solid #E5E7EB; background: none; color: #6B7280; cursor: pointer;"
    }
}

#[component]
pub fn Auth() -> Element {
    let mut state = use_context::<AppState>();
    let mut mode = use_signal(|| Mode::Login);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut name = use_signal(String::new);

    let role = state.navigator.read().auth_role();
    let role_label = role.label();
    let role_chosen = state.navigator.read().pending_role().is_some();
    let current = mode();
    let (heading, submit_label) = match current {
        Mode::Login => ("Welcome", "Sign In"),
        Mode::SignUp => ("Join the coastal safety community", "Create Account"),
    };

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let email_value = email();
        if email_value.trim().is_empty() || password().is_empty() {
            state.report_error("Sign in failed", "email and password are required");
            return;
        }
        let id = format!("u{:x}", js_bridge::now_ms());
        let user = User::from_credentials(id, &email_value, role);
        log::info!("[CW] auth: signed in {} as {}", user.username, user.role.as_str());
        state.navigator.write().login(user);
    };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: linear-gradient(135deg, #E0F2FE, #F0FDFA);",
            div {
                style: "width: 380px; background: white; border-radius: 12px; padding: 28px; box-shadow: 0 10px 30px rgba(0,0,0,0.1);",
                h1 { style: "margin: 0; text-align: center; color: #0C4A6E;", "CoastalWatch" }
                p { style: "margin: 4px 0 16px 0; text-align: center; color: #6B7280;", "{heading}" }
                if role_chosen {
                    p {
                        style: "margin: 0 0 12px 0; padding: 6px 10px; background: #EFF6FF; color: #1D4ED8; border-radius: 6px; font-size: 13px; text-align: center;",
                        "Signing in as {role_label} · Role selected from landing page"
                    }
                }
                div {
                    style: "display: flex; margin-bottom: 16px;",
                    button { style: tab_style(current == Mode::Login), onclick: move |_| mode.set(Mode::Login), "Login" }
                    button { style: tab_style(current == Mode::SignUp), onclick: move |_| mode.set(Mode::SignUp), "Sign Up" }
                }
                form {
                    onsubmit: submit,
                    style: "display: flex; flex-direction: column; gap: 12px;",
                    if current == Mode::SignUp {
                        label {
                            style: "font-size: 13px; font-weight: 600; color: #374151;",
                            "Full Name"
                            input {
                                style: INPUT_STYLE,
                                value: "{name}",
                                oninput: move |evt: Event<FormData>| name.set(evt.value()),
                            }
                        }
                    }
                    label {
                        style: "font-size: 13px; font-weight: 600; color: #374151;",
                        "Email"
                        input {
                            r#type: "email",
                            style: INPUT_STYLE,
                            placeholder: "you@example.com",
                            value: "{email}",
                            oninput: move |evt: Event<FormData>| email.set(evt.value()),
                        }
                    }
                    label {
                        style: "font-size: 13px; font-weight: 600; color: #374151;",
                        "Password"
                        input {
                            r#type: "password",
                            style: INPUT_STYLE,
                            value: "{password}",
                            oninput: move |evt: Event<FormData>| password.set(evt.value()),
                        }
                    }
                    button { r#type: "submit", style: PRIMARY_BUTTON_STYLE, "{submit_label}" }
                }
                button {
                    style: "margin-top: 12px; width: 100%; padding: 10px; border: 1px dashed #9CA3AF; border-radius: 6px; background: white; color: #374151; cursor: pointer;",
                    onclick: move |_| {
                        log::info!("[CW] auth: guest access");
                        state.navigator.write().login(User::guest());
                    },
                    "Continue as Guest"
                }
            }
        }
    }
}
