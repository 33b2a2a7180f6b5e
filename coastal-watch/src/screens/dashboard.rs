//! Analyst/official dashboard: filters, the map and the side panel.
//!
//! Mounting the dashboard turns on live report injection and, for staff,
//! the emergency alert overlay; leaving it turns both off again.

use super::{CARD_STYLE, SECONDARY_BUTTON_STYLE};
use cw_core::hazard::HazardType;
use cw_core::navigation::Screen;
use cw_core::report::Report;
use cw_db::HazardRepository;
use cw_map::cluster::CLUSTERS;
use cw_map::UrgencyTier;
use cw_ui::components::{EmergencyPopup, IndianMap, SelectField, StatusBadge, TopBar, UrgencyBadge};
use cw_ui::state::AppState;
use dioxus::prelude::*;
use std::collections::BTreeSet;

pub(crate) const SOURCES: [&str; 4] = ["Citizen Reports", "Social Media", "Satellite Data", "INCOIS Advisories"];

const TIME_RANGES: [(&str, &str); 4] = [
    ("1h", "Last 1 Hour"),
    ("6h", "Last 6 Hours"),
    ("24h", "Last 24 Hours"),
    ("7d", "Last 7 Days"),
];

#[derive(Debug, Clone, PartialEq)]
enum Panel {
    Cluster(String),
    Report(String),
}

/// Sync the simulation with the dashboard's toggles.
fn apply_toggles(mut state: AppState, live: bool, popups: bool) {
    let staff = state.navigator.peek().user().is_some_and(|u| u.role.is_staff());
    if let Some(sim) = state.sim.write().as_mut() {
        sim.set_live_updates(live);
        sim.set_emergency_popups(staff && popups);
    }
}

fn toggle_row(label: &str, on: bool) -> (String, &'static str) {
    let text = format!("{} {}", label, if on { "ON" } else { "OFF" });
    let style = if on {
        "padding: 6px 12px; border: none; border-radius: 9999px; background: #2563EB; color: white; cursor: pointer; font-size: 12px;"
    } else {
        "padding: 6px 12px; border: 1px solid #D1D5DB; border-radius: 9999px; background: white; color: #374151; cursor: pointer; font-size: 12px;"
    };
    (text, style)
}

#[component]
pub fn Dashboard() -> Element {
    let mut state = use_context::<AppState>();
    let mut hazards = use_signal(|| HazardType::REPORTABLE.into_iter().collect::<BTreeSet<_>>());
    let mut sources = use_signal(|| SOURCES.into_iter().collect::<BTreeSet<_>>());
    let mut time_range = use_signal(|| "24h".to_string());
    let mut cluster_threshold = use_signal(|| 50u32);
    let mut heatmap_opacity = use_signal(|| 0.7f64);
    let mut sonification = use_signal(|| true);
    let mut live = use_signal(|| true);
    let mut panel = use_signal(|| None::<Panel>);

    use_hook(move || apply_toggles(state, true, *state.emergency_popups.peek()));
    use_drop(move || {
        if let Some(sim) = state.sim.write().as_mut() {
            sim.set_live_updates(false);
            sim.set_emergency_popups(false);
        }
    });

    let staff = state.navigator.read().user().is_some_and(|u| u.role.is_staff());
    let popups = (state.emergency_popups)();

    let all_reports = state.query("Failed to load reports", |db| db.reports());
    let selected_hazards = hazards();
    let reports: Vec<Report> = all_reports
        .into_iter()
        .filter(|r| selected_hazards.contains(&r.hazard))
        .collect();
    let urgent = reports.iter().filter(|r| r.is_urgent()).count();
    let report_count = reports.len();

    let hazard_boxes: Vec<_> = HazardType::REPORTABLE
        .into_iter()
        .map(|h| (h, h.label(), selected_hazards.contains(&h)))
        .collect();
    let chosen_sources = sources();
    let source_boxes: Vec<_> = SOURCES.into_iter().map(|s| (s, chosen_sources.contains(s))).collect();
    let opacity_label = format!("{:.0}%", heatmap_opacity() * 100.0);
    let (sonification_text, sonification_style) = toggle_row("Sonification", sonification());
    let (live_text, live_style) = toggle_row("Live Data", live());
    let (popup_text, popup_style) = toggle_row("Emergency Alerts", popups);

    let panel_view = panel().map(|p| match p {
        Panel::Cluster(id) => {
            let cluster = CLUSTERS.iter().find(|c| c.id == id);
            let count = cluster.map(|c| c.count).unwrap_or_default();
            let max_urgency = reports.iter().map(|r| r.urgency.value()).max().unwrap_or_default();
            let recent: Vec<Report> = reports.iter().take(3).cloned().collect();
            rsx! {
                h4 { style: "margin: 0 0 8px 0;", "Cluster Overview" }
                div {
                    style: "font-size: 13px; display: flex; flex-direction: column; gap: 4px; margin-bottom: 12px;",
                    div { style: "display: flex; justify-content: space-between;", span { "Total Reports:" } strong { "{count}" } }
                    div { style: "display: flex; justify-content: space-between;", span { "Last Updated:" } span { "2 min ago" } }
                    div { style: "display: flex; justify-content: space-between;", span { "Max Urgency:" } strong { "{max_urgency}" } }
                }
                h4 { style: "margin: 0 0 8px 0;", "Recent Reports" }
                for report in recent {
                    ReportRow { key: "{report.id}", report }
                }
            }
        }
        Panel::Report(id) => match reports.iter().find(|r| r.id == id).cloned() {
            Some(report) => rsx! {
                h4 { style: "margin: 0 0 8px 0;", "Report Details" }
                ReportRow { report }
            },
            None => rsx! {
                p { style: "color: #6B7280; font-size: 13px;", "Report {id} is no longer on the map" }
            },
        },
    });

    rsx! {
        TopBar { title: "Coastal Hazard Dashboard", subtitle: "Live monitoring of India's coastline" }
        div {
            style: "display: flex; gap: 8px; padding: 8px 24px; background: white; border-bottom: 1px solid #E5E7EB; align-items: center; flex-wrap: wrap;",
            button { style: SECONDARY_BUTTON_STYLE, onclick: move |_| state.navigator.write().navigate(Screen::Analytics), "Analytics" }
            button { style: SECONDARY_BUTTON_STYLE, onclick: move |_| state.navigator.write().navigate(Screen::SocialFeed), "Social Feed" }
            button { style: SECONDARY_BUTTON_STYLE, onclick: move |_| state.navigator.write().navigate(Screen::ReportDetails), "Reports" }
            button { style: SECONDARY_BUTTON_STYLE, onclick: move |_| state.navigator.write().navigate(Screen::AdminSettings), "Settings" }
            span { style: "flex: 1;" }
            span { style: "font-size: 13px; color: #4B5563;", "{report_count} reports · {urgent} urgent" }
            if staff {
                button {
                    style: popup_style,
                    onclick: move |_| {
                        let next = !popups;
                        state.emergency_popups.set(next);
                        apply_toggles(state, live(), next);
                    },
                    "{popup_text}"
                }
            }
        }
        div {
            style: "display: flex; gap: 16px; padding: 16px 24px; align-items: flex-start;",
            div {
                style: "{CARD_STYLE} width: 240px; flex-shrink: 0;",
                h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Filters" }
                p { style: "margin: 8px 0 4px 0; font-size: 13px; font-weight: bold;", "Hazard Types" }
                for (hazard, label, checked) in hazard_boxes {
                    label {
                        key: "{label}",
                        style: "display: flex; gap: 6px; font-size: 13px; margin: 2px 0;",
                        input {
                            r#type: "checkbox",
                            checked,
                            onchange: move |_| {
                                let mut set = hazards.write();
                                if !set.remove(&hazard) {
                                    set.insert(hazard);
                                }
                            },
                        }
                        "{label}"
                    }
                }
                p { style: "margin: 12px 0 4px 0; font-size: 13px; font-weight: bold;", "Sources" }
                for (source, checked) in source_boxes {
                    label {
                        key: "{source}",
                        style: "display: flex; gap: 6px; font-size: 13px; margin: 2px 0;",
                        input {
                            r#type: "checkbox",
                            checked,
                            onchange: move |_| {
                                let mut set = sources.write();
                                if !set.remove(source) {
                                    set.insert(source);
                                }
                            },
                        }
                        "{source}"
                    }
                }
                SelectField {
                    label: "Date Range",
                    options: TIME_RANGES.iter().map(|(v, t)| (v.to_string(), t.to_string())).collect::<Vec<_>>(),
                    value: time_range(),
                    on_change: move |v: String| time_range.set(v),
                }
                label {
                    style: "display: block; margin-top: 8px; font-size: 13px; font-weight: bold;",
                    "Cluster Threshold: {cluster_threshold}"
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: "{cluster_threshold}",
                        style: "width: 100%;",
                        oninput: move |evt: Event<FormData>| {
                            if let Ok(v) = evt.value().parse() {
                                cluster_threshold.set(v);
                            }
                        },
                    }
                }
            }
            div {
                style: "flex: 1; display: flex; flex-direction: column; gap: 12px; min-width: 620px;",
                div {
                    style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                    label {
                        style: "font-size: 13px; display: flex; align-items: center; gap: 6px;",
                        "Heatmap Opacity"
                        input {
                            r#type: "range",
                            min: "0",
                            max: "1",
                            step: "0.1",
                            value: "{heatmap_opacity}",
                            oninput: move |evt: Event<FormData>| {
                                if let Ok(v) = evt.value().parse::<f64>() {
                                    heatmap_opacity.set(v.clamp(0.0, 1.0));
                                }
                            },
                        }
                        span { "{opacity_label}" }
                    }
                    button { style: sonification_style, onclick: move |_| sonification.toggle(), "{sonification_text}" }
                    button {
                        style: live_style,
                        onclick: move |_| {
                            let next = !live();
                            live.set(next);
                            apply_toggles(state, next, popups);
                        },
                        "{live_text}"
                    }
                }
                IndianMap {
                    reports,
                    heatmap_opacity: heatmap_opacity(),
                    on_marker_details: move |id: String| panel.set(Some(Panel::Report(id))),
                    on_cluster_click: move |id: String| panel.set(Some(Panel::Cluster(id))),
                }
            }
            if let Some(body) = panel_view {
                div {
                    style: "{CARD_STYLE} width: 320px; flex-shrink: 0;",
                    div {
                        style: "display: flex; justify-content: flex-end;",
                        button {
                            style: "background: none; border: none; cursor: pointer; font-size: 16px;",
                            onclick: move |_| panel.set(None),
                            "×"
                        }
                    }
                    {body}
                }
            }
        }
        if staff {
            EmergencyPopup {
                on_view_details: move |id: String| {
                    state.navigator.write().navigate_to(Screen::ReportDetails, Some(&id), None);
                },
            }
        }
    }
}

/// Compact report card for the side panel.
#[component]
fn ReportRow(report: Report) -> Element {
    let mut state = use_context::<AppState>();
    let id = report.id.clone();
    let hazard = report.hazard.label();
    let when = report.timestamp.format("%H:%M").to_string();
    let width = report.urgency.value();
    let bar = UrgencyTier::of(report.urgency).marker_color();

    rsx! {
        div {
            style: "border: 1px solid #E5E7EB; border-radius: 6px; padding: 10px; margin-bottom: 8px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 6px;",
                strong { style: "font-size: 14px;", "{hazard}" }
                StatusBadge { status: report.status }
            }
            p { style: "margin: 4px 0; font-size: 12px; color: #6B7280;", "By {report.reporter} · {when}" }
            div {
                style: "display: flex; align-items: center; gap: 6px;",
                div {
                    style: "flex: 1; height: 6px; background: #E5E7EB; border-radius: 3px;",
                    div { style: "height: 6px; width: {width}%; background: {bar}; border-radius: 3px;" }
                }
                UrgencyBadge { urgency: report.urgency }
            }
            button {
                style: "{SECONDARY_BUTTON_STYLE} margin-top: 8px; width: 100%;",
                onclick: move |_| state.navigator.write().navigate_to(Screen::ReportDetails, Some(&id), None),
                "View Details"
            }
        }
    }
}
