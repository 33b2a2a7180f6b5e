use super::{actor_name, record_audit, CARD_STYLE, INPUT_STYLE, PRIMARY_BUTTON_STYLE};
use cw_core::audit::AuditKind;
use cw_core::navigation::Screen;
use cw_core::report::ReportStatus;
use cw_db::HazardRepository;
use cw_ui::components::{SelectField, StatusBadge, TopBar, UrgencyBadge};
use cw_ui::state::AppState;
use cw_utils::dates::format_datetime;
use dioxus::prelude::*;

const PRIORITIES: [(&str, &str); 4] = [
    ("low", "Low Priority"),
    ("medium", "Medium Priority"),
    ("high", "High Priority"),
    ("critical", "Critical"),
];

const TEAM: [(&str, &str); 3] = [
    ("analyst1", "Dr. Sarah Patel (Senior Analyst)"),
    ("analyst2", "Raj Kumar (Field Coordinator)"),
    ("analyst3", "Lisa Wong (Marine Specialist)"),
];

/// Verification buttons: (target status, label, colour).
const ACTIONS: [(ReportStatus, &str, &str); 4] = [
    (ReportStatus::Verified, "Verify", "#16A34A"),
    (ReportStatus::UnderReview, "Mark Under Review", "#2563EB"),
    (ReportStatus::Unverified, "Reset to Pending", "#CA8A04"),
    (ReportStatus::Dismissed, "Dismiss", "#DC2626"),
];

fn options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(v, t)| (v.to_string(), t.to_string())).collect()
}

#[component]
pub fn ReportDetails() -> Element {
    let mut state = use_context::<AppState>();
    let mut notes = use_signal(String::new);
    let mut priority = use_signal(|| "medium".to_string());
    let mut assignee = use_signal(String::new);

    let selected = state.navigator.read().selected_report().map(str::to_string);
    let report = state.query("Failed to load report", |db| db.report_or_first(selected.as_deref()));
    let back = if state.navigator.read().user().is_some_and(|u| u.role.is_staff()) {
        Screen::Dashboard
    } else {
        Screen::MyReports
    };

    let Some(report) = report else {
        return rsx! {
            TopBar { title: "Report Details", back: Some(back) }
            div {
                style: "padding: 48px; text-align: center; color: #6B7280;",
                "No reports yet."
            }
        };
    };

    let id = report.id.clone();
    let hazard = report.hazard.label();
    let when = format_datetime(&report.timestamp);
    let coords = format!("{:.4}, {:.4}", report.latitude, report.longitude);
    let location = report.location.clone().unwrap_or_else(|| "Unknown location".to_string());
    let description = report.description.clone().unwrap_or_default();
    let trust = report.trust_score.value();
    let saved_notes = report.verifier_notes.clone();
    let assigned_label = TEAM.iter().find(|(v, _)| *v == assignee()).map(|(_, t)| *t);

    let actions: Vec<_> = ACTIONS
        .into_iter()
        .map(|(status, label, color)| {
            let current = status == report.status;
            (status, label, color, current, if current { "0.5" } else { "1" })
        })
        .collect();

    rsx! {
        TopBar { title: "Report Details", subtitle: "{id}", back: Some(back) }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 24px; display: flex; gap: 24px; align-items: flex-start; flex-wrap: wrap;",
            div {
                style: "{CARD_STYLE} flex: 2; min-width: 360px;",
                div {
                    style: "display: flex; gap: 8px; align-items: center; margin-bottom: 12px;",
                    h2 { style: "margin: 0; font-size: 20px;", "{hazard}" }
                    StatusBadge { status: report.status }
                    UrgencyBadge { urgency: report.urgency }
                }
                h3 { style: "font-size: 15px; margin: 12px 0 6px 0;", "Report Information" }
                table {
                    style: "font-size: 14px; border-collapse: collapse;",
                    tbody {
                        tr { td { style: "padding: 4px 12px 4px 0; color: #6B7280;", "Location:" } td { "{location}" } }
                        tr { td { style: "padding: 4px 12px 4px 0; color: #6B7280;", "Coordinates:" } td { "{coords}" } }
                        tr { td { style: "padding: 4px 12px 4px 0; color: #6B7280;", "Timestamp:" } td { "{when}" } }
                        tr { td { style: "padding: 4px 12px 4px 0; color: #6B7280;", "Reporter:" } td { "{report.reporter}" } }
                        tr { td { style: "padding: 4px 12px 4px 0; color: #6B7280;", "Trust Score:" } td { "{trust}" } }
                    }
                }
                if !description.is_empty() {
                    h3 { style: "font-size: 15px; margin: 16px 0 6px 0;", "Description" }
                    p { style: "margin: 0; font-size: 14px; color: #374151;", "{description}" }
                }
                if let Some(saved) = saved_notes {
                    h3 { style: "font-size: 15px; margin: 16px 0 6px 0;", "Verifier Notes" }
                    p { style: "margin: 0; font-size: 14px; color: #374151; white-space: pre-wrap;", "{saved}" }
                }
            }
            div {
                style: "{CARD_STYLE} flex: 1; min-width: 280px;",
                h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Verification" }
                label {
                    style: "display: block; font-size: 13px; font-weight: bold; color: #374151;",
                    "Verification Notes"
                    textarea {
                        style: "{INPUT_STYLE} min-height: 80px;",
                        placeholder: "Add notes for other verifiers...",
                        value: "{notes}",
                        oninput: move |evt: Event<FormData>| notes.set(evt.value()),
                    }
                }
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px; margin: 12px 0;",
                    for (status, label, color, current, opacity) in actions {
                        button {
                            key: "{label}",
                            style: "padding: 8px; border: none; border-radius: 6px; background: {color}; color: white; cursor: pointer; font-weight: 600; opacity: {opacity};",
                            disabled: current,
                            onclick: {
                                let id = id.clone();
                                move |_| {
                                    let text = notes();
                                    let text = (!text.trim().is_empty()).then_some(text);
                                    let Some(db) = state.db.peek().clone() else {
                                        return;
                                    };
                                    let result = db.set_status(&id, status, text.as_deref()).and_then(|changed| {
                                        if changed {
                                            log::info!("[CW] details: {} -> {}", id, status.as_str());
                                            record_audit(
                                                &db,
                                                &actor_name(&state),
                                                "Report status changed",
                                                format!("Report {} marked as {}", id, status.label()),
                                                AuditKind::Verification,
                                            )?;
                                        }
                                        Ok(())
                                    });
                                    match result {
                                        Ok(()) => {
                                            notes.set(String::new());
                                            state.touch();
                                        }
                                        Err(e) => state.report_error("Failed to update report", e),
                                    }
                                }
                            },
                            "{label}"
                        }
                    }
                }
                SelectField {
                    label: "Priority Level",
                    options: options(&PRIORITIES),
                    value: priority(),
                    on_change: move |v: String| priority.set(v),
                }
                SelectField {
                    label: "Assign to Team Member",
                    options: options(&TEAM),
                    value: assignee(),
                    placeholder: "Select team member".to_string(),
                    on_change: move |v: String| assignee.set(v),
                }
                if let Some(who) = assigned_label {
                    p { style: "margin: 8px 0 0 0; font-size: 12px; color: #4B5563;", "Assigned to {who}" }
                }
                button {
                    style: "{PRIMARY_BUTTON_STYLE} width: 100%; margin-top: 12px;",
                    onclick: move |_| state.navigator.write().navigate(back),
                    "Done"
                }
            }
        }
    }
}
