//! KPI tiles, four charts, the regional table and export.

use super::{CARD_STYLE, PRIMARY_BUTTON_STYLE};
use cw_core::analytics::{HazardTrendPoint, Kpis};
use cw_core::hazard::HazardType;
use cw_core::navigation::Screen;
use cw_ui::charts::{bar_chart_svg, donut_chart_svg, line_chart_svg, Series, Slice};
use cw_ui::components::{SelectField, StatCard, SvgChart, TopBar};
use cw_ui::js_bridge;
use cw_ui::state::AppState;
use cw_utils::export::{export_filename, DATE_RANGES, FORMATS};
use dioxus::prelude::*;

fn hazard_color(hazard: HazardType) -> &'static str {
    match hazard {
        HazardType::HighWaves => "#3B82F6",
        HazardType::Flooding => "#10B981",
        HazardType::OilSpill => "#F59E0B",
        HazardType::Tsunami => "#EF4444",
        HazardType::SwellSurge => "#8B5CF6",
        HazardType::AbnormalTide => "#06B6D4",
        HazardType::OtherEmergency => "#6B7280",
    }
}

/// One line per hazard over the distinct dates, in first-seen order.
fn hazard_series(points: &[HazardTrendPoint]) -> (Vec<String>, Vec<Series>) {
    let mut labels: Vec<String> = Vec::new();
    let mut hazards: Vec<HazardType> = Vec::new();
    for p in points {
        if !labels.contains(&p.date) {
            labels.push(p.date.clone());
        }
        if !hazards.contains(&p.hazard) {
            hazards.push(p.hazard);
        }
    }
    let series = hazards
        .into_iter()
        .map(|hazard| Series {
            name: hazard.label().to_string(),
            color: hazard_color(hazard),
            values: labels
                .iter()
                .map(|date| {
                    points
                        .iter()
                        .filter(|p| p.hazard == hazard && &p.date == date)
                        .map(|p| p.count as f64)
                        .sum()
                })
                .collect(),
        })
        .collect();
    (labels, series)
}

fn options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(v, t)| (v.to_string(), t.to_string())).collect()
}

fn status_for(percentage: u32) -> (&'static str, &'static str) {
    match percentage {
        p if p >= 80 => ("green", "Excellent"),
        p if p >= 70 => ("blue", "Good"),
        _ => ("yellow", "Needs Attention"),
    }
}

#[component]
pub fn Analytics() -> Element {
    let state = use_context::<AppState>();
    let mut range = use_signal(|| "7d".to_string());
    let mut format = use_signal(|| "pdf".to_string());

    let kpis: Kpis = state.query("Failed to load KPIs", |db| db.query_kpis());
    let trends = state.query("Failed to load hazard trends", |db| db.query_hazard_trends());
    let regions = state.query("Failed to load region stats", |db| db.query_region_stats());
    let shares = state.query("Failed to load source shares", |db| db.query_source_shares());
    let verification = state.query("Failed to load verification trend", |db| db.query_verification_trends());

    let (trend_labels, trend_series) = hazard_series(&trends);
    let trend_svg = line_chart_svg(&trend_labels, &trend_series);
    let region_svg = bar_chart_svg(
        &regions
            .iter()
            .map(|r| (r.region.clone(), r.reports as f64))
            .collect::<Vec<_>>(),
        "#3B82F6",
    );
    let source_svg = donut_chart_svg(
        &shares
            .iter()
            .map(|s| Slice {
                name: s.name.clone(),
                value: s.value as f64,
                color: s.color.clone(),
            })
            .collect::<Vec<_>>(),
    );
    let verification_labels: Vec<String> = verification.iter().map(|p| p.date.clone()).collect();
    let verification_svg = line_chart_svg(
        &verification_labels,
        &[
            Series {
                name: "Verified".to_string(),
                color: "#22C55E",
                values: verification.iter().map(|p| p.verified as f64).collect(),
            },
            Series {
                name: "Pending".to_string(),
                color: "#EAB308",
                values: verification.iter().map(|p| p.pending as f64).collect(),
            },
            Series {
                name: "Dismissed".to_string(),
                color: "#EF4444",
                values: verification.iter().map(|p| p.dismissed as f64).collect(),
            },
        ],
    );

    let trend_text = format!("{:+.1}% from yesterday", kpis.trend_percent);
    let response_text = format!("{} min", kpis.average_response_minutes);
    let rows: Vec<_> = regions
        .iter()
        .map(|r| {
            let (color, label) = status_for(r.percentage);
            (r.region.clone(), r.reports, r.verified, r.percentage, color, label)
        })
        .collect();

    let export = move |_| {
        let filename = export_filename(&range(), &format(), &js_bridge::wall_clock().date_naive());
        log::info!("[CW] analytics: export {}", filename);
        js_bridge::alert(&format!("Exporting {}...", filename));
    };

    rsx! {
        TopBar { title: "Analytics Dashboard", subtitle: "Coastal hazard reporting insights and trends", back: Some(Screen::Dashboard) }
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column; gap: 16px;",
            div {
                style: "{CARD_STYLE} display: flex; gap: 16px; align-items: flex-end; flex-wrap: wrap;",
                SelectField { label: "Date Range", options: options(&DATE_RANGES), value: range(), on_change: move |v: String| range.set(v) }
                SelectField { label: "Export Format", options: options(&FORMATS), value: format(), on_change: move |v: String| format.set(v) }
                button { style: "{PRIMARY_BUTTON_STYLE} margin-bottom: 8px;", onclick: export, "Export Report" }
                span { style: "margin-left: auto; font-size: 12px; color: #9CA3AF;", "Data is mock for prototype demonstration" }
            }
            div {
                style: "display: flex; gap: 16px; flex-wrap: wrap;",
                StatCard { title: "Total Reports (24h)", value: "{kpis.total_reports_24h}", subtitle: trend_text }
                StatCard { title: "Verified Reports", value: "{kpis.verified_count}", accent: "#16A34A" }
                StatCard { title: "Peak Region", value: "{kpis.peak_urgency_region}", accent: "#DC2626" }
                StatCard { title: "Avg Response Time", value: response_text, accent: "#CA8A04" }
                StatCard { title: "Active Sources", value: "{kpis.active_sources}", accent: "#7C3AED" }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(520px, 1fr)); gap: 16px;",
                SvgChart { title: "Hazard Trends", svg: trend_svg, caption: "Number of reports by hazard type" }
                SvgChart { title: "Reports by Region", svg: region_svg, caption: "Reports and verification rates by region" }
                SvgChart { title: "Report Sources", svg: source_svg, caption: "Distribution of report sources" }
                SvgChart { title: "Verification Trend", svg: verification_svg, caption: "Daily verification workflow" }
            }
            div {
                style: CARD_STYLE,
                h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Regional Performance Details" }
                table {
                    style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                    thead {
                        tr {
                            style: "text-align: left; color: #6B7280; border-bottom: 1px solid #E5E7EB;",
                            th { style: "padding: 6px;", "Region" }
                            th { style: "padding: 6px;", "Total Reports" }
                            th { style: "padding: 6px;", "Verified" }
                            th { style: "padding: 6px;", "Verification Rate" }
                            th { style: "padding: 6px;", "Status" }
                        }
                    }
                    tbody {
                        for (region, reports, verified, percentage, color, label) in rows {
                            tr {
                                key: "{region}",
                                style: "border-bottom: 1px solid #F3F4F6;",
                                td { style: "padding: 6px; font-weight: 600;", "{region}" }
                                td { style: "padding: 6px;", "{reports}" }
                                td { style: "padding: 6px;", "{verified}" }
                                td { style: "padding: 6px;", "{percentage}%" }
                                td { style: "padding: 6px;", cw_ui::components::Badge { color: color.to_string(), text: label.to_string() } }
                            }
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

    fn point(date: &str, hazard: HazardType, count: u32) -> HazardTrendPoint {
        HazardTrendPoint {
            date: date.to_string(),
            hazard,
            count,
        }
    }

    #[test]
    fn hazard_series_pivots_by_date() {
        let points = vec![
            point("2025-09-02", HazardType::HighWaves, 12),
            point("2025-09-02", HazardType::Flooding, 8),
            point("2025-09-03", HazardType::HighWaves, 15),
        ];
        let (labels, series) = hazard_series(&points);
        assert_eq!(labels, vec!["2025-09-02", "2025-09-03"]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "High Waves");
        assert_eq!(series[0].values, vec![12.0, 15.0]);
        assert_eq!(series[1].values, vec![8.0, 0.0], "missing days count as zero");
    }

    #[test]
    fn region_status_bands() {
        assert_eq!(status_for(83).1, "Excellent");
        assert_eq!(status_for(72).1, "Good");
        assert_eq!(status_for(58).1, "Needs Attention");
    }
}
