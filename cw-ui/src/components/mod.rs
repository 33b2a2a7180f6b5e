//! Reusable Dioxus RSX components for the CoastalWatch screens.

mod badges;
mod emergency_popup;
mod error_display;
mod indian_map;
mod loading_spinner;
mod select_field;
mod stat_card;
mod svg_chart;
mod top_bar;

pub use badges::{badge_palette, status_badge_color, Badge, StatusBadge, UploadBadge, UrgencyBadge};
pub use emergency_popup::EmergencyPopup;
pub use error_display::ErrorDisplay;
pub use indian_map::IndianMap;
pub use loading_spinner::LoadingSpinner;
pub use select_field::SelectField;
pub use stat_card::StatCard;
pub use svg_chart::SvgChart;
pub use top_bar::TopBar;
