use super::citizen_reporting::{hazard_options, AttachmentPicker};
use super::{CARD_STYLE, INPUT_STYLE, PRIMARY_BUTTON_STYLE, SECONDARY_BUTTON_STYLE};
use cw_core::hazard::HazardType;
use cw_ui::components::SelectField;
use cw_ui::js_bridge;
use cw_ui::state::AppState;
use dioxus::prelude::*;

const DEFAULT_LOCATION: &str = "Auto-detected: Current Location";

const HOTLINES: [(&str, &str, &str); 3] = [
    ("National Emergency", "Fire, Police, Ambulance", "108"),
    ("Coast Guard", "Marine Emergency", "1554"),
    ("Disaster Management", "State Control Room", "1070"),
];

const GUIDELINES: [&str; 3] = [
    "Move to higher ground immediately if near water",
    "Follow official evacuation orders",
    "Do not attempt to drive through flooded areas",
];

/// `ER-` plus the last six digits of the clock.
fn reference_number(now_ms: u64) -> String {
    format!("ER-{:06}", now_ms % 1_000_000)
}

#[component]
pub fn EmergencyReport() -> Element {
    let mut state = use_context::<AppState>();
    let mut hazard = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut location = use_signal(|| DEFAULT_LOCATION.to_string());
    let mut contact = use_signal(String::new);
    let files = use_signal(Vec::<String>::new);
    let mut reference = use_signal(|| None::<String>);

    let home = state.navigator.read().home();
    let ready = !hazard().is_empty() && !notes().trim().is_empty();
    let submit_opacity = if ready { "1" } else { "0.5" };

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let Ok(hazard_type) = hazard().parse::<HazardType>() else {
            return;
        };
        let number = reference_number(js_bridge::now_ms());
        log::warn!(
            "[CW] emergency: {} reported at {} ({} attachments), ref {}",
            hazard_type,
            location(),
            files.read().len(),
            number
        );
        reference.set(Some(number));
    };

    rsx! {
        div {
            style: "background: #DC2626; color: white; padding: 16px 24px; display: flex; justify-content: space-between; align-items: center;",
            div {
                h1 { style: "margin: 0; font-size: 22px;", "Emergency Report" }
                p { style: "margin: 0; font-size: 13px; opacity: 0.9;", "Emergency Mode: reports are sent immediately to authorities" }
            }
            button {
                style: "padding: 6px 12px; border: 1px solid white; border-radius: 6px; background: transparent; color: white; cursor: pointer;",
                onclick: move |_| state.navigator.write().navigate(home),
                "Back"
            }
        }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 24px; display: flex; gap: 24px; align-items: flex-start; flex-wrap: wrap;",
            form {
                style: "{CARD_STYLE} flex: 2; min-width: 360px; border-color: #FCA5A5;",
                onsubmit: submit,
                SelectField {
                    label: "Emergency Type",
                    options: hazard_options(&HazardType::EMERGENCY),
                    value: hazard(),
                    placeholder: "Select emergency type".to_string(),
                    on_change: move |v: String| hazard.set(v),
                }
                label {
                    style: "display: block; margin: 8px 0; font-size: 13px; font-weight: bold; color: #374151;",
                    "Description"
                    textarea {
                        style: "{INPUT_STYLE} min-height: 100px;",
                        placeholder: "Describe the emergency situation in detail...",
                        value: "{notes}",
                        oninput: move |evt: Event<FormData>| notes.set(evt.value()),
                    }
                }
                label {
                    style: "display: block; margin: 8px 0; font-size: 13px; font-weight: bold; color: #374151;",
                    "Location"
                    input {
                        style: INPUT_STYLE,
                        placeholder: "Describe the location",
                        value: "{location}",
                        oninput: move |evt: Event<FormData>| location.set(evt.value()),
                    }
                }
                label {
                    style: "display: block; margin: 8px 0; font-size: 13px; font-weight: bold; color: #374151;",
                    "Contact Number (optional)"
                    input {
                        r#type: "tel",
                        style: INPUT_STYLE,
                        placeholder: "+91 XXXXX XXXXX",
                        value: "{contact}",
                        oninput: move |evt: Event<FormData>| contact.set(evt.value()),
                    }
                }
                p { style: "margin: 12px 0 0 0; font-size: 12px; color: #6B7280;", "Upload photos or videos of the emergency" }
                AttachmentPicker { input_id: "cw-emergency-upload", label: "Add Photos / Video", accept: "image/*,video/*", files }
                button {
                    r#type: "submit",
                    style: "{PRIMARY_BUTTON_STYLE} width: 100%; background: #DC2626; opacity: {submit_opacity};",
                    disabled: !ready,
                    "Send Emergency Report"
                }
            }
            div {
                style: "flex: 1; min-width: 260px; display: flex; flex-direction: column; gap: 16px;",
                div {
                    style: CARD_STYLE,
                    h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Emergency Hotline" }
                    for (name, detail, number) in HOTLINES {
                        div {
                            key: "{number}",
                            style: "display: flex; justify-content: space-between; padding: 6px 0; border-bottom: 1px solid #F3F4F6;",
                            div {
                                p { style: "margin: 0; font-size: 14px; font-weight: 600;", "{name}" }
                                p { style: "margin: 0; font-size: 12px; color: #6B7280;", "{detail}" }
                            }
                            strong { style: "font-size: 18px; color: #DC2626;", "{number}" }
                        }
                    }
                }
                div {
                    style: CARD_STYLE,
                    h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Safety Guidelines" }
                    ul {
                        style: "margin: 0; padding-left: 18px; font-size: 13px; color: #374151;",
                        for line in GUIDELINES {
                            li { key: "{line}", "{line}" }
                        }
                    }
                }
            }
        }
        if let Some(number) = reference() {
            div {
                style: "position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 50;",
                div {
                    style: "background: white; border-radius: 12px; padding: 24px; width: 380px;",
                    h3 { style: "margin: 0 0 8px 0; color: #15803D;", "Emergency response team notified" }
                    div {
                        style: "padding: 12px; background: #F0FDF4; border-radius: 8px; margin-bottom: 12px;",
                        p { style: "margin: 0; font-weight: 600; color: #166534;", "Report ID: {number}" }
                        p { style: "margin: 4px 0 0 0; font-size: 13px; color: #15803D;", "Save this number for reference" }
                    }
                    p { style: "margin: 0 0 4px 0; font-weight: 600; font-size: 14px;", "What Happens Next?" }
                    ul {
                        style: "margin: 0 0 12px 0; padding-left: 18px; font-size: 13px; color: #374151;",
                        li { "Report sent immediately to authorities" }
                        li { "Response coordinated based on severity" }
                        li { "Status updates if contact provided" }
                    }
                    p { style: "margin: 0 0 12px 0; font-size: 12px; color: #B91C1C;", "If you are in immediate danger, call 108 immediately." }
                    div {
                        style: "display: flex; gap: 8px; justify-content: flex-end;",
                        button {
                            style: SECONDARY_BUTTON_STYLE,
                            onclick: move |_| {
                                reference.set(None);
                                hazard.set(String::new());
                                notes.set(String::new());
                            },
                            "New Report"
                        }
                        button {
                            style: PRIMARY_BUTTON_STYLE,
                            onclick: move |_| state.navigator.write().navigate(home),
                            "Done"
                        }
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
    fn reference_keeps_last_six_digits() {
        assert_eq!(reference_number(1_757_349_123_456), "ER-123456");
        assert_eq!(reference_number(1_000_000_000_042), "ER-000042");
    }
}
