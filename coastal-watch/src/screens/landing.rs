use cw_core::navigation::Screen;
use cw_core::user::UserRole;
use cw_ui::state::AppState;
use dioxus::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    ("Citizen Reporting", "Quick and easy hazard reporting with photos and location data"),
    ("Official Verification", "Real-time monitoring and verification by coastal authorities"),
    ("Live Updates", "Continuous monitoring with satellite and social media data"),
];

fn role_blurb(role: UserRole) -> &'static str {
    match role {
        UserRole::Citizen => "Report hazards you see on the coast",
        UserRole::Analyst => "Monitor reports and social signals",
        _ => "Verify reports and issue alerts",
    }
}

#[component]
pub fn Landing() -> Element {
    let mut state = use_context::<AppState>();
    let roles: Vec<_> = UserRole::SIGN_IN
        .into_iter()
        .map(|role| (role, role.as_str(), role.label(), role_blurb(role)))
        .collect();

    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(180deg, #0C4A6E 0%, #0369A1 55%, #F9FAFB 55%);",
            div {
                style: "max-width: 960px; margin: 0 auto; padding: 64px 24px 32px 24px; color: white; text-align: center;",
                h1 { style: "font-size: 44px; margin: 0;", "CoastalWatch" }
                p { style: "font-size: 20px; margin: 8px 0 32px 0; opacity: 0.9;", "Real-time Coastal Hazard Platform" }
                div {
                    style: "display: flex; gap: 16px; justify-content: center; flex-wrap: wrap;",
                    for (role, id, label, blurb) in roles {
                        button {
                            key: "{id}",
                            style: "min-width: 220px; padding: 16px; border: none; border-radius: 10px; background: white; color: #0C4A6E; cursor: pointer; text-align: left;",
                            onclick: move |_| {
                                log::info!("[CW] landing: continue as {}", id);
                                state.navigator.write().navigate_to(Screen::Auth, None, Some(role));
                            },
                            div { style: "font-size: 17px; font-weight: 700;", "{label}" }
                            div { style: "font-size: 13px; color: #475569; margin-top: 4px;", "{blurb}" }
                        }
                    }
                }
                button {
                    style: "margin-top: 24px; padding: 12px 28px; border: none; border-radius: 9999px; background: #DC2626; color: white; font-weight: 700; font-size: 16px; cursor: pointer;",
                    onclick: move |_| state.navigator.write().navigate(Screen::EmergencyReport),
                    "Report Emergency"
                }
            }
            div {
                style: "max-width: 960px; margin: 0 auto; padding: 0 24px 48px 24px; display: flex; gap: 16px; flex-wrap: wrap;",
                for (title, blurb) in FEATURES {
                    div {
                        key: "{title}",
                        style: "flex: 1; min-width: 240px; background: white; border-radius: 10px; padding: 20px; box-shadow: 0 4px 12px rgba(0,0,0,0.08);",
                        h3 { style: "margin: 0 0 8px 0; color: #0C4A6E;", "{title}" }
                        p { style: "margin: 0; color: #4B5563; font-size: 14px;", "{blurb}" }
                    }
                }
            }
            footer {
                style: "text-align: center; padding: 24px; color: #6B7280; font-size: 13px;",
                "CoastalWatch · Privacy · Contact"
            }
        }
    }
}
