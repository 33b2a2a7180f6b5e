use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SvgChartProps {
    pub title: String,
    /// A complete `<svg>` document from [`crate::charts`].
    pub svg: String,
    #[props(default = String::new())]
    pub caption: String,
}

/// Card wrapping a pre-rendered SVG chart.
#[component]
pub fn SvgChart(props: SvgChartProps) -> Element {
    rsx! {
        div {
            style: "background: white; border: 1px solid #E5E7EB; border-radius: 8px; padding: 16px;",
            h3 { style: "margin: 0 0 4px 0; font-size: 16px;", "{props.title}" }
            if !props.caption.is_empty() {
                p { style: "margin: 0 0 8px 0; font-size: 12px; color: #666;", "{props.caption}" }
            }
            div { style: "width: 100%;", dangerous_inner_html: "{props.svg}" }
        }
    }
}
