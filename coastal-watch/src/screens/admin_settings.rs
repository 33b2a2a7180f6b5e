//! User management, system sliders, data sources and the audit log.
//!
//! Role and status changes go to the store and leave an audit entry; the
//! sliders and switches are session-only.

use super::{actor_name, record_audit, CARD_STYLE};
use cw_core::audit::AuditKind;
use cw_core::navigation::Screen;
use cw_core::user::{AccountStatus, UserRole};
use cw_ui::components::{Badge, TopBar};
use cw_ui::js_bridge;
use cw_ui::state::AppState;
use cw_utils::dates::{format_datetime, format_time_ago};
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Users,
    System,
    Sources,
    Audit,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Users, Tab::System, Tab::Sources, Tab::Audit];

    fn label(self) -> &'static str {
        match self {
            Tab::Users => "User Management",
            Tab::System => "System Settings",
            Tab::Sources => "Data Sources",
            Tab::Audit => "Audit Logs",
        }
    }
}

fn account_badge(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => "green",
        AccountStatus::Inactive => "grey",
        AccountStatus::Pending => "yellow",
    }
}

#[component]
fn Slider(label: String, value: Signal<u32>, min: u32, max: u32, step: u32) -> Element {
    let mut value = value;
    rsx! {
        label {
            style: "display: block; margin: 12px 0; font-size: 13px; font-weight: bold; color: #374151;",
            "{label}: {value}"
            input {
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                style: "width: 100%;",
                oninput: move |evt: Event<FormData>| {
                    if let Ok(v) = evt.value().parse::<u32>() {
                        value.set(v.clamp(min, max));
                    }
                },
            }
        }
    }
}

#[component]
fn Switch(label: String, detail: String, on: Signal<bool>) -> Element {
    let mut on = on;
    let (track, knob) = if on() { ("#2563EB", "20px") } else { ("#D1D5DB", "2px") };
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 10px 0; border-bottom: 1px solid #F3F4F6;",
            div {
                p { style: "margin: 0; font-size: 14px; font-weight: 600;", "{label}" }
                p { style: "margin: 0; font-size: 12px; color: #6B7280;", "{detail}" }
            }
            button {
                style: "position: relative; width: 42px; height: 24px; border: none; border-radius: 12px; background: {track}; cursor: pointer;",
                onclick: move |_| on.toggle(),
                span { style: "position: absolute; top: 2px; left: {knob}; width: 20px; height: 20px; border-radius: 50%; background: white;" }
            }
        }
    }
}

#[component]
pub fn AdminSettings() -> Element {
    let state = use_context::<AppState>();
    let mut tab = use_signal(|| Tab::Users);
    let refresh_seconds = use_signal(|| 30u32);
    let max_cluster = use_signal(|| 25u32);
    let default_threshold = use_signal(|| 50u32);
    let social = use_signal(|| true);
    let satellite = use_signal(|| true);
    let incois = use_signal(|| false);

    let users = state.query("Failed to load users", |db| db.query_system_users());
    let logs = state.query("Failed to load audit log", |db| db.query_audit_logs());
    let now = js_bridge::wall_clock();
    let current = tab();

    let tabs: Vec<_> = Tab::ALL
        .into_iter()
        .map(|t| {
            let style = if t == current {
                "padding: 8px 14px; border: none; border-bottom: 2px solid #2563EB; background: none; color: #2563EB; font-weight: 600; cursor: pointer;"
            } else {
                "padding: 8px 14px; border: none; border-bottom: 2px solid transparent; background: none; color: #6B7280; cursor: pointer;"
            };
            (t, t.label(), style)
        })
        .collect();

    let user_rows: Vec<_> = users
        .into_iter()
        .map(|u| {
            let activity = match (u.reports_submitted, u.reports_verified) {
                (_, Some(v)) => format!("{} verified", v),
                (Some(s), None) => format!("{} submitted", s),
                (None, None) => "No activity".to_string(),
            };
            let last_active = format_time_ago(&u.last_active, &now);
            (u.id, u.name, u.email, u.role, u.status, activity, last_active)
        })
        .collect();

    let log_rows: Vec<_> = logs
        .into_iter()
        .map(|l| (l.id, format_datetime(&l.timestamp), l.actor, l.action, l.details, l.kind.color()))
        .collect();

    let change_role = move |id: String, name: String, value: String| {
        let Ok(role) = value.parse::<UserRole>() else {
            return;
        };
        let Some(db) = state.db.peek().clone() else {
            return;
        };
        let result = db.update_user_role(&id, role).and_then(|changed| {
            if changed {
                record_audit(
                    &db,
                    &actor_name(&state),
                    "User role changed",
                    format!("{} role changed to {}", name, role.as_str()),
                    AuditKind::UserManagement,
                )?;
            }
            Ok(())
        });
        match result {
            Ok(()) => state.touch(),
            Err(e) => state.report_error("Failed to change role", e),
        }
    };

    let change_status = move |id: String, name: String, value: String| {
        let Ok(status) = value.parse::<AccountStatus>() else {
            return;
        };
        let Some(db) = state.db.peek().clone() else {
            return;
        };
        let result = db.update_user_status(&id, status).and_then(|changed| {
            if changed {
                record_audit(
                    &db,
                    &actor_name(&state),
                    "User status changed",
                    format!("{} is now {}", name, status.as_str()),
                    AuditKind::UserManagement,
                )?;
            }
            Ok(())
        });
        match result {
            Ok(()) => state.touch(),
            Err(e) => state.report_error("Failed to change status", e),
        }
    };

    let body = match current {
        Tab::Users => rsx! {
            div {
                style: CARD_STYLE,
                h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "User Role Management" }
                table {
                    style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                    thead {
                        tr {
                            style: "text-align: left; color: #6B7280; border-bottom: 1px solid #E5E7EB;",
                            th { style: "padding: 6px;", "User" }
                            th { style: "padding: 6px;", "Role" }
                            th { style: "padding: 6px;", "Status" }
                            th { style: "padding: 6px;", "Activity" }
                            th { style: "padding: 6px;", "Last Active" }
                        }
                    }
                    tbody {
                        for (id, name, email, role, status, activity, last_active) in user_rows {
                            tr {
                                key: "{id}",
                                style: "border-bottom: 1px solid #F3F4F6;",
                                td {
                                    style: "padding: 6px;",
                                    p { style: "margin: 0; font-weight: 600;", "{name}" }
                                    p { style: "margin: 0; color: #6B7280;", "{email}" }
                                }
                                td {
                                    style: "padding: 6px;",
                                    select {
                                        onchange: {
                                            let (id, name) = (id.clone(), name.clone());
                                            move |evt: Event<FormData>| change_role(id.clone(), name.clone(), evt.value())
                                        },
                                        for r in UserRole::ALL {
                                            option { value: r.as_str(), selected: r == role, {r.label()} }
                                        }
                                    }
                                }
                                td {
                                    style: "padding: 6px; display: flex; gap: 6px; align-items: center;",
                                    Badge { color: account_badge(status).to_string(), text: status.as_str().to_string() }
                                    select {
                                        onchange: {
                                            let (id, name) = (id.clone(), name.clone());
                                            move |evt: Event<FormData>| change_status(id.clone(), name.clone(), evt.value())
                                        },
                                        for s in AccountStatus::ALL {
                                            option { value: s.as_str(), selected: s == status, {s.as_str()} }
                                        }
                                    }
                                }
                                td { style: "padding: 6px;", "{activity}" }
                                td { style: "padding: 6px; color: #6B7280;", "{last_active}" }
                            }
                        }
                    }
                }
            }
        },
        Tab::System => rsx! {
            div {
                style: CARD_STYLE,
                h3 { style: "margin: 0; font-size: 15px;", "Map Settings" }
                p { style: "margin: 0; font-size: 12px; color: #6B7280;", "Configure map refresh rates and clustering behavior" }
                Slider { label: "Map Refresh Interval (seconds)", value: refresh_seconds, min: 10, max: 300, step: 10 }
                Slider { label: "Maximum Cluster Size", value: max_cluster, min: 5, max: 100, step: 5 }
                Slider { label: "Default Cluster Threshold", value: default_threshold, min: 0, max: 100, step: 5 }
            }
        },
        Tab::Sources => rsx! {
            div {
                style: CARD_STYLE,
                h3 { style: "margin: 0; font-size: 15px;", "Data Source Configuration" }
                p { style: "margin: 0 0 8px 0; font-size: 12px; color: #6B7280;", "Enable or disable active data sources" }
                Switch { label: "Social Media Data", detail: "Twitter, Facebook, Instagram and YouTube ingestion", on: social }
                Switch { label: "Satellite Data", detail: "Sea-state imagery overlays", on: satellite }
                Switch { label: "INCOIS Advisories", detail: "Official ocean state forecasts", on: incois }
            }
        },
        Tab::Audit => rsx! {
            div {
                style: CARD_STYLE,
                h3 { style: "margin: 0; font-size: 15px;", "System Activity Logs" }
                p { style: "margin: 0 0 8px 0; font-size: 12px; color: #6B7280;", "Monitor system actions and user activities" }
                for (id, when, actor, action, details, color) in log_rows {
                    div {
                        key: "{id}",
                        style: "display: flex; gap: 10px; padding: 8px 0; border-bottom: 1px solid #F3F4F6;",
                        span { style: "width: 10px; height: 10px; margin-top: 5px; border-radius: 50%; background: {color}; flex-shrink: 0;" }
                        div {
                            p { style: "margin: 0; font-size: 14px; font-weight: 600;", "{action}" }
                            p { style: "margin: 0; font-size: 13px; color: #374151;", "{details}" }
                            p { style: "margin: 0; font-size: 12px; color: #6B7280;", "{actor} · {when}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        TopBar { title: "System Administration", subtitle: "Manage users, settings, and system configuration", back: Some(Screen::Dashboard) }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 24px;",
            div {
                style: "display: flex; gap: 4px; border-bottom: 1px solid #E5E7EB; margin-bottom: 16px;",
                for (t, label, style) in tabs {
                    button { key: "{label}", style, onclick: move |_| tab.set(t), "{label}" }
                }
            }
            {body}
        }
    }
}
