//! Citizen hazard form with an upload queue sidebar.
//!
//! Submitting queues the report with the simulation (which decides between
//! `waiting` and `uploading` from the network state) and writes it to the
//! repository as an unverified report by the signed-in user.

use super::{CARD_STYLE, INPUT_STYLE, PRIMARY_BUTTON_STYLE, SECONDARY_BUTTON_STYLE};
use cw_core::hazard::HazardType;
use cw_core::navigation::Screen;
use cw_core::report::Report;
use cw_core::user::User;
use cw_db::HazardRepository;
use cw_ui::components::{SelectField, TopBar, UploadBadge};
use cw_ui::js_bridge::{self, GeoFix};
use cw_ui::state::AppState;
use dioxus::prelude::*;

const DEFAULT_LOCATION: &str = "Auto-detected: Marina Beach, Chennai";
/// Marina Beach, used when no geolocation fix was taken.
const DEFAULT_FIX: GeoFix = GeoFix {
    latitude: 13.0500,
    longitude: 80.2824,
};

const PHOTO_INPUT: &str = "cw-photo-upload";
const VIDEO_INPUT: &str = "cw-video-upload";

pub(crate) fn hazard_options(hazards: &[HazardType]) -> Vec<(String, String)> {
    hazards
        .iter()
        .map(|h| (h.label().to_string(), h.label().to_string()))
        .collect()
}

/// Attachment picker showing the chosen file names.
#[component]
pub(crate) fn AttachmentPicker(input_id: String, label: String, accept: String, files: Signal<Vec<String>>) -> Element {
    let mut files = files;
    let pick_id = input_id.clone();
    let read_id = input_id.clone();
    let chosen = files.read().join(", ");

    rsx! {
        div {
            style: "margin: 8px 0;",
            input {
                id: "{input_id}",
                r#type: "file",
                accept: "{accept}",
                multiple: true,
                style: "display: none;",
                onchange: move |_| files.set(js_bridge::selected_file_names(&read_id)),
            }
            button {
                r#type: "button",
                style: SECONDARY_BUTTON_STYLE,
                onclick: move |_| js_bridge::click_element(&pick_id),
                "{label}"
            }
            if !chosen.is_empty() {
                span { style: "margin-left: 8px; font-size: 12px; color: #4B5563;", "{chosen}" }
            }
        }
    }
}

#[component]
pub fn CitizenReporting() -> Element {
    let mut state = use_context::<AppState>();
    let mut hazard = use_signal(String::new);
    let mut location = use_signal(|| DEFAULT_LOCATION.to_string());
    let mut notes = use_signal(String::new);
    let photos = use_signal(Vec::<String>::new);
    let videos = use_signal(Vec::<String>::new);
    let mut geo = use_signal(|| None::<GeoFix>);
    let mut locating = use_signal(|| false);
    let mut submitted = use_signal(|| None::<String>);

    let offline = (state.offline)();
    let queue: Vec<_> = state
        .sim
        .read()
        .as_ref()
        .map(|sim| {
            sim.uploads()
                .items()
                .iter()
                .map(|q| (q.id.clone(), q.hazard.label(), q.submitted_at.clone(), q.status))
                .collect()
        })
        .unwrap_or_default();
    let queue_title = if offline { "Reports will sync when online" } else { "Recent submissions" };
    let fix_text = geo().map(|fix| (format!("{:.6}", fix.latitude), format!("{:.6}", fix.longitude)));
    let can_submit = !hazard().is_empty();
    let submit_opacity = if can_submit { "1" } else { "0.5" };

    let capture_location = move |_| {
        locating.set(true);
        spawn(async move {
            match js_bridge::current_position().await {
                Ok(fix) => {
                    log::info!("[CW] reporting: geo-tagged at {:.4}, {:.4}", fix.latitude, fix.longitude);
                    geo.set(Some(fix));
                }
                Err(e) => state.report_error("Could not get your location", e),
            }
            locating.set(false);
        });
    };

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Ok(hazard_type) = hazard().parse::<HazardType>() else {
            return;
        };
        state.advance_simulation(true);
        let Some(queued) = state.sim.write().as_mut().map(|sim| sim.submit_report(hazard_type)) else {
            state.report_error("Submit failed", "live services are not ready");
            return;
        };

        let reporter = state
            .navigator
            .peek()
            .user()
            .map(|u| u.username.clone())
            .unwrap_or_else(|| User::GUEST_NAME.to_string());
        let fix = geo().unwrap_or(DEFAULT_FIX);
        let mut report = Report::submitted(queued.id.clone(), hazard_type, reporter, js_bridge::wall_clock());
        report.latitude = fix.latitude;
        report.longitude = fix.longitude;
        report.location = Some(location().trim_start_matches("Auto-detected: ").to_string());
        let text = notes();
        report.description = (!text.trim().is_empty()).then_some(text);

        if let Some(db) = state.db.peek().clone() {
            match db.add_report(&report) {
                Ok(()) => state.touch(),
                Err(e) => state.report_error("Failed to save report", e),
            }
        }

        submitted.set(Some(queued.status.as_str().to_string()));
        hazard.set(String::new());
        notes.set(String::new());
        geo.set(None);
    };

    rsx! {
        TopBar { title: "Report a Coastal Hazard", subtitle: "Help keep the coast safe" }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 24px; display: flex; gap: 24px; align-items: flex-start; flex-wrap: wrap;",
            form {
                style: "{CARD_STYLE} flex: 2; min-width: 360px;",
                onsubmit: submit,
                h2 { style: "margin: 0 0 12px 0; font-size: 18px;", "New Report" }
                SelectField {
                    label: "Hazard Type",
                    options: hazard_options(&HazardType::REPORTABLE),
                    value: hazard(),
                    placeholder: "Select hazard type".to_string(),
                    on_change: move |v: String| hazard.set(v),
                }
                label {
                    style: "display: block; margin: 8px 0; font-size: 13px; font-weight: bold; color: #374151;",
                    "Location"
                    input {
                        style: INPUT_STYLE,
                        value: "{location}",
                        oninput: move |evt: Event<FormData>| location.set(evt.value()),
                    }
                }
                div {
                    style: "margin: 12px 0; padding: 12px; background: #FFF7ED; border: 1px solid #FED7AA; border-radius: 6px;",
                    p { style: "margin: 0 0 8px 0; font-size: 13px; font-weight: 600; color: #9A3412;", "Geo-tagged Report" }
                    button {
                        r#type: "button",
                        style: SECONDARY_BUTTON_STYLE,
                        disabled: locating(),
                        onclick: capture_location,
                        if locating() { "Locating..." } else { "Use my current location" }
                    }
                    if let Some((lat, lng)) = fix_text {
                        div {
                            style: "margin-top: 8px; font-size: 12px; color: #9A3412;",
                            p { style: "margin: 0;", "Latitude: {lat}" }
                            p { style: "margin: 0;", "Longitude: {lng}" }
                        }
                    }
                }
                AttachmentPicker { input_id: "{PHOTO_INPUT}", label: "Add Photos", accept: "image/*", files: photos }
                AttachmentPicker { input_id: "{VIDEO_INPUT}", label: "Add Video", accept: "video/*", files: videos }
                label {
                    style: "display: block; margin: 8px 0; font-size: 13px; font-weight: bold; color: #374151;",
                    "Notes"
                    textarea {
                        style: "{INPUT_STYLE} min-height: 90px;",
                        placeholder: "Describe what you see...",
                        value: "{notes}",
                        oninput: move |evt: Event<FormData>| notes.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    style: "{PRIMARY_BUTTON_STYLE} width: 100%; opacity: {submit_opacity};",
                    disabled: !can_submit,
                    "Submit Report"
                }
            }
            div {
                style: "flex: 1; min-width: 260px; display: flex; flex-direction: column; gap: 16px;",
                div {
                    style: CARD_STYLE,
                    h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "{queue_title}" }
                    if queue.is_empty() {
                        p { style: "color: #6B7280; font-size: 13px;", "Nothing queued" }
                    }
                    for (id, label, at, status) in queue {
                        div {
                            key: "{id}",
                            style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 0; border-bottom: 1px solid #F3F4F6;",
                            div {
                                p { style: "margin: 0; font-size: 14px; font-weight: 600;", "{label}" }
                                p { style: "margin: 0; font-size: 12px; color: #6B7280;", "{at}" }
                            }
                            UploadBadge { status }
                        }
                    }
                }
                div {
                    style: CARD_STYLE,
                    h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Quick Actions" }
                    button {
                        style: "{SECONDARY_BUTTON_STYLE} width: 100%; margin-bottom: 8px;",
                        onclick: move |_| state.navigator.write().navigate(Screen::MyReports),
                        "View My Reports"
                    }
                    button {
                        style: "{SECONDARY_BUTTON_STYLE} width: 100%; color: #B91C1C; border-color: #FCA5A5;",
                        onclick: move |_| state.navigator.write().navigate(Screen::EmergencyReport),
                        "Emergency Report"
                    }
                }
            }
        }
        if let Some(status) = submitted() {
            div {
                style: "position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 50;",
                div {
                    style: "background: white; border-radius: 12px; padding: 24px; width: 340px; text-align: center;",
                    h3 { style: "margin: 0 0 8px 0; color: #15803D;", "Report Submitted" }
                    p {
                        style: "margin: 0 0 16px 0; color: #4B5563; font-size: 14px;",
                        "Thank you. Your report is {status}."
                    }
                    button {
                        style: PRIMARY_BUTTON_STYLE,
                        onclick: move |_| submitted.set(None),
                        "Done"
                    }
                }
            }
        }
    }
}
