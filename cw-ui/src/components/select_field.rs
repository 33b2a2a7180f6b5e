//! Labelled dropdown used by every filter and form on the dashboard.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SelectFieldProps {
    pub label: String,
    /// (value, text) pairs
    pub options: Vec<(String, String)>,
    pub value: String,
    pub on_change: EventHandler<String>,
    /// Leading option with an empty value, e.g. "Select hazard type".
    #[props(default)]
    pub placeholder: Option<String>,
}

#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; margin: 8px 0; font-size: 13px; font-weight: bold; color: #374151;",
            "{props.label}"
            select {
                style: "padding: 6px 8px; border: 1px solid #D1D5DB; border-radius: 6px; font-weight: normal;",
                onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
                if let Some(placeholder) = props.placeholder.clone() {
                    option { value: "", selected: props.value.is_empty(), "{placeholder}" }
                }
                for (value, text) in props.options.iter() {
                    option {
                        value: "{value}",
                        selected: *value == props.value,
                        "{text}"
                    }
                }
            }
        }
    }
}
