use super::{CARD_STYLE, INPUT_STYLE, SECONDARY_BUTTON_STYLE};
use cw_core::navigation::Screen;
use cw_core::report::{Report, ReportStatus};
use cw_core::user::User;
use cw_db::models::StatusCounts;
use cw_db::HazardRepository;
use cw_ui::components::{SelectField, StatCard, StatusBadge, TopBar, UrgencyBadge};
use cw_ui::state::AppState;
use cw_utils::dates::format_datetime;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    List,
    Grid,
}

fn status_options() -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), "All Statuses".to_string()))
        .chain(ReportStatus::ALL.into_iter().map(|s| (s.as_str().to_string(), s.label().to_string())))
        .collect()
}

#[component]
pub fn MyReports() -> Element {
    let mut state = use_context::<AppState>();
    let mut search = use_signal(String::new);
    let mut status = use_signal(|| "all".to_string());
    let mut layout = use_signal(|| Layout::List);

    let username = state
        .navigator
        .read()
        .user()
        .map(|u| u.username.clone())
        .unwrap_or_else(|| User::GUEST_NAME.to_string());
    let reports = state.query("Failed to load your reports", |db| db.reports_by(&username));
    let counts: StatusCounts = state.query("Failed to count your reports", |db| db.status_counts(Some(&username)));

    let wanted = status().parse::<ReportStatus>().ok();
    let query = search();
    let shown: Vec<Report> = reports
        .into_iter()
        .filter(|r| wanted.is_none_or(|s| r.status == s))
        .filter(|r| r.matches_query(&query))
        .collect();
    let current = layout();
    let container = match current {
        Layout::List => "display: flex; flex-direction: column; gap: 12px;",
        Layout::Grid => "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 12px;",
    };
    let back = if state.navigator.read().user().is_some_and(|u| u.role.is_staff()) {
        Screen::Dashboard
    } else {
        Screen::CitizenReporting
    };

    rsx! {
        TopBar { title: "My Reports", subtitle: "View and manage your submitted reports", back: Some(back) }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column; gap: 16px;",
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                StatCard { title: "Total", value: "{counts.total}" }
                StatCard { title: "Pending", value: "{counts.unverified}", accent: "#CA8A04" }
                StatCard { title: "Under Review", value: "{counts.under_review}", accent: "#2563EB" }
                StatCard { title: "Verified", value: "{counts.verified}", accent: "#16A34A" }
                StatCard { title: "Dismissed", value: "{counts.dismissed}", accent: "#DC2626" }
            }
            div {
                style: "{CARD_STYLE} display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap;",
                div {
                    style: "flex: 1; min-width: 220px; margin-bottom: 8px;",
                    input {
                        style: INPUT_STYLE,
                        placeholder: "Search by hazard, location or notes...",
                        value: "{search}",
                        oninput: move |evt: Event<FormData>| search.set(evt.value()),
                    }
                }
                SelectField { label: "Status", options: status_options(), value: status(), on_change: move |v: String| status.set(v) }
                button {
                    style: "{SECONDARY_BUTTON_STYLE} margin-bottom: 8px;",
                    onclick: move |_| layout.set(if current == Layout::List { Layout::Grid } else { Layout::List }),
                    if current == Layout::List { "Grid view" } else { "List view" }
                }
            }
            if shown.is_empty() {
                div {
                    style: "{CARD_STYLE} text-align: center; color: #6B7280;",
                    "No reports found"
                }
            }
            div {
                style: container,
                for report in shown {
                    MyReportCard { key: "{report.id}", report }
                }
            }
        }
        div {
            style: "text-align: center; padding-bottom: 24px;",
            button {
                style: SECONDARY_BUTTON_STYLE,
                onclick: move |_| state.navigator.write().navigate(Screen::CitizenReporting),
                "Submit a new report"
            }
        }
    }
}

#[component]
fn MyReportCard(report: Report) -> Element {
    let mut state = use_context::<AppState>();
    let id = report.id.clone();
    let hazard = report.hazard.label();
    let when = format_datetime(&report.timestamp);
    let location = report.location.clone().unwrap_or_default();
    let notes = report.verifier_notes.clone();

    rsx! {
        div {
            style: "{CARD_STYLE} cursor: pointer;",
            onclick: move |_| state.navigator.write().navigate_to(Screen::ReportDetails, Some(&id), None),
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 8px;",
                strong { "{hazard}" }
                StatusBadge { status: report.status }
            }
            p { style: "margin: 4px 0; font-size: 13px; color: #4B5563;", "{location}" }
            p { style: "margin: 4px 0; font-size: 12px; color: #6B7280;", "{when}" }
            UrgencyBadge { urgency: report.urgency }
            if let Some(notes) = notes {
                div {
                    style: "margin-top: 8px; padding: 8px; background: #F9FAFB; border-radius: 6px; font-size: 12px;",
                    strong { "Verifier Notes: " }
                    "{notes}"
                }
            }
        }
    }
}
