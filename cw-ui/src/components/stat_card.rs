use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    #[props(default = String::new())]
    pub subtitle: String,
    #[props(default = "#2563EB".to_string())]
    pub accent: String,
}

/// KPI tile: a label, a big number and an optional caption.
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            style: "background: white; border: 1px solid #E5E7EB; border-left: 4px solid {props.accent}; border-radius: 8px; padding: 16px; min-width: 160px; flex: 1;",
            p { style: "margin: 0; font-size: 13px; color: #6B7280;", "{props.title}" }
            p { style: "margin: 4px 0 0 0; font-size: 26px; font-weight: 700; color: #111827;", "{props.value}" }
            if !props.subtitle.is_empty() {
                p { style: "margin: 4px 0 0 0; font-size: 12px; color: #6B7280;", "{props.subtitle}" }
            }
        }
    }
}
