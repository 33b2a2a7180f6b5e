//! Stack of emergency alert cards in the top-right corner.
//!
//! The list itself lives in the simulation's [`cw_sim::AlertQueue`]; this
//! component only draws it and forwards dismiss/view clicks.

use crate::js_bridge;
use crate::state::AppState;
use cw_utils::dates::format_time_ago;
use dioxus::prelude::*;

struct AlertCard {
    id: String,
    area_name: String,
    level: String,
    color: &'static str,
    description: String,
    time_ago: String,
    affected_population: u32,
    report_count: u32,
}

#[derive(Props, Clone, PartialEq)]
pub struct EmergencyPopupProps {
    /// Called with the alert id after the alert is dismissed.
    pub on_view_details: EventHandler<String>,
}

#[component]
pub fn EmergencyPopup(props: EmergencyPopupProps) -> Element {
    let mut state = use_context::<AppState>();
    let on_view = props.on_view_details;
    let now = js_bridge::wall_clock();

    let cards: Vec<AlertCard> = match &*state.sim.read() {
        Some(sim) => sim
            .alerts()
            .visible()
            .into_iter()
            .map(|a| AlertCard {
                id: a.id.clone(),
                area_name: a.area_name.clone(),
                level: a.level.as_str().to_uppercase(),
                color: a.level.color(),
                description: a.description.clone(),
                time_ago: format_time_ago(&a.timestamp, &now),
                affected_population: a.affected_population,
                report_count: a.report_count,
            })
            .collect(),
        None => Vec::new(),
    };

    if cards.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "position: fixed; top: 80px; right: 16px; z-index: 50; display: flex; flex-direction: column; gap: 12px; width: 340px;",
            for card in cards {
                div {
                    key: "{card.id}",
                    style: "background: white; border-radius: 8px; overflow: hidden; box-shadow: 0 8px 24px rgba(0,0,0,0.25);",
                    div {
                        style: "background: {card.color}; color: white; padding: 8px 12px; display: flex; justify-content: space-between; align-items: center;",
                        strong { "⚠ {card.area_name}" }
                        span { style: "font-size: 11px; font-weight: 700;", "{card.level}" }
                    }
                    div {
                        style: "padding: 10px 12px; font-size: 13px; color: #374151;",
                        p { style: "margin: 0 0 6px 0;", "{card.description}" }
                        p { style: "margin: 0; color: #6B7280; font-size: 12px;",
                            "{card.time_ago} · {card.affected_population} affected · {card.report_count} reports"
                        }
                        div {
                            style: "display: flex; gap: 8px; margin-top: 10px;",
                            button {
                                style: "flex: 1; padding: 6px; border: none; border-radius: 6px; background: #DC2626; color: white; cursor: pointer;",
                                onclick: {
                                    let id = card.id.clone();
                                    move |_| {
                                        let opened = state
                                            .sim
                                            .write()
                                            .as_mut()
                                            .and_then(|sim| sim.alerts_mut().view_details(&id));
                                        if let Some(id) = opened {
                                            on_view.call(id);
                                        }
                                    }
                                },
                                "View Details"
                            }
                            button {
                                style: "flex: 1; padding: 6px; border: 1px solid #D1D5DB; border-radius: 6px; background: white; cursor: pointer;",
                                onclick: {
                                    let id = card.id.clone();
                                    move |_| {
                                        if let Some(sim) = state.sim.write().as_mut() {
                                            sim.alerts_mut().dismiss(&id);
                                        }
                                        log::info!("[CW] alerts: dismissed {}", id);
                                    }
                                },
                                "Dismiss"
                            }
                        }
                    }
                }
            }
        }
    }
}
