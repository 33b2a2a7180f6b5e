//! The interactive India map: state outlines, heatmap, report lighthouses
//! and cluster bubbles.
//!
//! All geometry and animation state comes from `cw-map`. This component
//! only wires DOM events into a [`MapController`] and runs a frame loop
//! while the controller has work to do.

use crate::js_bridge;
use cw_core::report::Report;
use cw_map::cluster::CLUSTERS;
use cw_map::state_panel::StateStats;
use cw_map::states::{find_state, state_fill, COASTLINE_PATH, INDIAN_STATES};
use cw_map::{layout_markers, render_heatmap_layer, MapController, MapEvent, UrgencyTier, MAP_CSS};
use dioxus::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const FRAME_MS: u32 = 16;

#[derive(Props, Clone, PartialEq)]
pub struct IndianMapProps {
    pub reports: Vec<Report>,
    #[props(default = 0.7)]
    pub heatmap_opacity: f64,
    /// Fired once the zoom onto a clicked marker has landed.
    pub on_marker_details: EventHandler<String>,
    pub on_cluster_click: EventHandler<String>,
}

/// Drive the controller from animation frames until it settles.
fn start_frames(mut map: Signal<MapController>, mut ticking: Signal<bool>, on_details: EventHandler<String>) {
    if ticking() {
        return;
    }
    ticking.set(true);
    spawn(async move {
        loop {
            js_bridge::sleep_ms(FRAME_MS).await;
            let events = map.write().tick(js_bridge::now_ms());
            for event in events {
                match event {
                    MapEvent::OpenDetails(id) => on_details.call(id),
                }
            }
            if map.read().is_settled() {
                break;
            }
        }
        ticking.set(false);
    });
}

/// Name for the hover tooltip. Hidden while a state's panel is open.
fn hovered_label(hovered: Option<&str>, selected: Option<&str>) -> Option<&'static str> {
    if selected.is_some() {
        return None;
    }
    hovered.and_then(find_state).map(|s| s.name)
}

#[component]
pub fn IndianMap(props: IndianMapProps) -> Element {
    let mut map = use_signal(MapController::new);
    let ticking = use_signal(|| false);
    let on_details = props.on_marker_details;
    let on_cluster = props.on_cluster_click;

    let controller = map.read().clone();
    let transform = controller.transform().css();
    let hovered = controller.hovered_state().map(str::to_string);
    let selected = controller.selected_state().map(str::to_string);
    let show_reset = controller.show_reset_button();
    let background = render_heatmap_layer(props.heatmap_opacity);

    let markers: Vec<_> = layout_markers(&props.reports)
        .into_iter()
        .map(|m| {
            let id = m.report_id.clone();
            let at = m.position;
            let dot = m.status_dot();
            (m, id, at, dot)
        })
        .collect();
    let clusters: Vec<_> = CLUSTERS.iter().map(|c| (c, c.label_position())).collect();
    let legend: Vec<_> = [UrgencyTier::High, UrgencyTier::Medium, UrgencyTier::Low]
        .into_iter()
        .map(|t| (t.marker_color(), t.legend()))
        .collect();

    let hovered_name = hovered_label(hovered.as_deref(), selected.as_deref());
    let selected_panel = selected.as_deref().and_then(find_state).map(|s| {
        let stats = StateStats::sample(&mut SmallRng::seed_from_u64(js_bridge::now_ms()));
        (s.name, stats)
    });

    rsx! {
        div {
            style: "position: relative; width: 600px; height: 650px; overflow: hidden; border-radius: 8px; background: #0f172a;",
            style { "{MAP_CSS}" }
            div {
                style: "position: absolute; top: 0; left: 0; width: 600px; height: 650px; transform-origin: 0 0; transform: {transform};",
                div {
                    style: "position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none;",
                    dangerous_inner_html: "{background}",
                }
                svg {
                    style: "position: absolute; top: 0; left: 0;",
                    width: "600",
                    height: "650",
                    view_box: "0 0 600 650",
                    for shape in INDIAN_STATES.iter() {
                        path {
                            key: "{shape.id}",
                            d: shape.path,
                            fill: state_fill(shape.id, hovered.as_deref(), selected.as_deref()),
                            stroke: "white",
                            stroke_width: "1.5",
                            stroke_opacity: "0.9",
                            style: "cursor: pointer;",
                            onmouseenter: move |_| map.write().hover_state(Some(shape.id)),
                            onmouseleave: move |_| map.write().hover_state(None),
                            onclick: move |_| map.write().select_state(Some(shape.id)),
                        }
                    }
                    path {
                        d: COASTLINE_PATH,
                        stroke: "rgba(59, 130, 246, 0.6)",
                        stroke_width: "2",
                        fill: "none",
                        pointer_events: "none",
                    }
                    for shape in INDIAN_STATES.iter() {
                        text {
                            x: "{shape.label.x}",
                            y: "{shape.label.y}",
                            fill: "white",
                            font_size: "8",
                            text_anchor: "middle",
                            opacity: "0.8",
                            pointer_events: "none",
                            "{shape.name}"
                        }
                    }
                    for (marker, id, at, dot) in markers {
                        g {
                            key: "{marker.report_id}",
                            style: "cursor: pointer;",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                map.write().select_marker(&id, at, js_bridge::now_ms());
                                start_frames(map, ticking, on_details);
                            },
                            circle { cx: "{marker.position.x}", cy: "{marker.position.y}", r: "{marker.main_beam_radius}", fill: "none", stroke: marker.color(), stroke_width: "2", opacity: "0.6", class: marker.animation.class() }
                            circle { cx: "{marker.position.x}", cy: "{marker.position.y}", r: "{marker.secondary_beam_radius}", fill: "none", stroke: marker.color(), stroke_width: "1", opacity: "0.8", class: marker.animation.class() }
                            circle { cx: "{marker.position.x}", cy: "{marker.position.y}", r: "10", fill: marker.color(), stroke: "white", stroke_width: "3" }
                            circle { cx: "{dot.x}", cy: "{dot.y}", r: "4", fill: marker.status_color, stroke: "white", stroke_width: "1" }
                            if marker.alert_ring {
                                circle { cx: "{marker.position.x}", cy: "{marker.position.y}", r: "45", fill: "none", stroke: "#DC2626", stroke_width: "1", opacity: "0.3" }
                            }
                        }
                    }
                    for (cluster, label) in clusters {
                        g {
                            key: "{cluster.id}",
                            style: "cursor: pointer;",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_cluster.call(cluster.id.to_string());
                            },
                            circle { cx: "{cluster.center.x}", cy: "{cluster.center.y}", r: "{cluster.radius}", fill: cluster.color, fill_opacity: "0.8", stroke: "white", stroke_width: "{cluster.stroke_width}" }
                            text { x: "{label.x}", y: "{label.y}", fill: "white", font_size: "{cluster.font_size}", font_weight: "bold", text_anchor: "middle", "{cluster.count}" }
                        }
                    }
                }
            }

            if let Some(name) = hovered_name {
                div {
                    style: "position: absolute; top: 12px; left: 12px; background: rgba(15, 23, 42, 0.85); color: white; padding: 4px 10px; border-radius: 6px; font-size: 13px;",
                    "{name}"
                }
            }

            if show_reset {
                button {
                    style: "position: absolute; top: 12px; right: 12px; padding: 6px 12px; border-radius: 6px; border: none; background: white; cursor: pointer; font-size: 13px;",
                    onclick: move |_| {
                        map.write().reset(js_bridge::now_ms());
                        start_frames(map, ticking, on_details);
                    },
                    "Reset View"
                }
            }

            if let Some((name, stats)) = selected_panel {
                div {
                    style: "position: absolute; bottom: 12px; left: 12px; background: white; padding: 12px 16px; border-radius: 8px; font-size: 13px; min-width: 200px; box-shadow: 0 4px 12px rgba(0,0,0,0.3);",
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px;",
                        strong { "{name}" }
                        button {
                            style: "background: none; border: none; cursor: pointer;",
                            onclick: move |_| map.write().select_state(None),
                            "×"
                        }
                    }
                    p { style: "margin: 2px 0;", "Active reports: {stats.active_reports}" }
                    p { style: "margin: 2px 0;", "Last update: {stats.last_update_minutes} min ago" }
                    p { style: "margin: 2px 0;", "Average urgency: {stats.average_urgency}" }
                }
            }

            div {
                style: "position: absolute; bottom: 12px; right: 12px; background: rgba(255,255,255,0.95); padding: 8px 12px; border-radius: 8px; font-size: 12px;",
                for (color, text) in legend {
                    div {
                        style: "display: flex; align-items: center; gap: 6px; margin: 2px 0;",
                        span { style: "display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: {color};" }
                        "{text}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_only_without_a_selected_state() {
        assert_eq!(hovered_label(Some("kerala"), None), Some("Kerala"));
        assert_eq!(hovered_label(Some("kerala"), Some("goa")), None);
        assert_eq!(hovered_label(None, None), None);
        assert_eq!(hovered_label(Some("atlantis"), None), None);
    }
}
