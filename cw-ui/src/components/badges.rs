//! Small coloured pills for urgency, status and upload state.

use cw_core::report::{ReportStatus, Urgency};
use cw_core::upload::UploadStatus;
use cw_map::UrgencyTier;
use dioxus::prelude::*;

/// Background and text colour for a badge colour name.
pub fn badge_palette(name: &str) -> (&'static str, &'static str) {
    match name {
        "red" => ("#FEE2E2", "#B91C1C"),
        "yellow" => ("#FEF9C3", "#A16207"),
        "blue" => ("#DBEAFE", "#1D4ED8"),
        "green" => ("#DCFCE7", "#15803D"),
        "orange" => ("#FFEDD5", "#C2410C"),
        _ => ("#F3F4F6", "#374151"),
    }
}

pub fn status_badge_color(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Verified => "green",
        ReportStatus::UnderReview => "blue",
        ReportStatus::Dismissed => "red",
        ReportStatus::Unverified => "yellow",
    }
}

#[component]
pub fn Badge(color: String, text: String) -> Element {
    let (bg, fg) = badge_palette(&color);
    rsx! {
        span {
            style: "display: inline-block; padding: 2px 8px; border-radius: 9999px; font-size: 12px; font-weight: 600; background: {bg}; color: {fg};",
            "{text}"
        }
    }
}

#[component]
pub fn UrgencyBadge(urgency: Urgency) -> Element {
    let color = UrgencyTier::of(urgency).badge_color();
    rsx! {
        Badge { color: color.to_string(), text: format!("Urgency {}", urgency.value()) }
    }
}

#[component]
pub fn StatusBadge(status: ReportStatus) -> Element {
    rsx! {
        Badge { color: status_badge_color(status).to_string(), text: status.label().to_string() }
    }
}

#[component]
pub fn UploadBadge(status: UploadStatus) -> Element {
    let bg = status.color();
    let text = status.as_str();
    rsx! {
        span {
            style: "display: inline-block; padding: 2px 8px; border-radius: 9999px; font-size: 12px; font-weight: 600; color: white; background: {bg};",
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_known_palette() {
        for status in ReportStatus::ALL {
            assert_ne!(badge_palette(status_badge_color(status)).0, "#F3F4F6", "{status:?}");
        }
    }

    #[test]
    fn unknown_colour_falls_back_to_grey() {
        assert_eq!(badge_palette("mauve"), ("#F3F4F6", "#374151"));
    }
}
