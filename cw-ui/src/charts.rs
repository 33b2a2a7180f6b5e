//! SVG chart builders for the analytics screen.
//!
//! Each builder returns a complete `<svg>` document string that the
//! [`SvgChart`](crate::components::SvgChart) component injects as-is.

use cw_map::svg::escape_into;
use std::f64::consts::PI;
use std::fmt::Write;

pub const CHART_WIDTH: f64 = 560.0;
pub const CHART_HEIGHT: f64 = 260.0;

const PAD_LEFT: f64 = 44.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 28.0;
const PAD_BOTTOM: f64 = 32.0;

/// One line of a line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// One slice of a donut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// Round up to 1, 2 or 5 times a power of ten.
pub fn nice_max(max: f64) -> f64 {
    if !(max > 0.0) || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= max)
        .unwrap_or(10.0 * magnitude)
}

fn plot_width() -> f64 {
    CHART_WIDTH - PAD_LEFT - PAD_RIGHT
}

fn plot_height() -> f64 {
    CHART_HEIGHT - PAD_TOP - PAD_BOTTOM
}

fn x_at(i: usize, n: usize) -> f64 {
    if n <= 1 {
        PAD_LEFT + plot_width() / 2.0
    } else {
        PAD_LEFT + i as f64 / (n - 1) as f64 * plot_width()
    }
}

fn y_at(value: f64, max: f64) -> f64 {
    PAD_TOP + plot_height() - value / max * plot_height()
}

fn open(svg: &mut String) {
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100%\" viewBox=\"0 0 {} {}\" font-family=\"sans-serif\">",
        CHART_WIDTH, CHART_HEIGHT
    );
}

fn empty_chart() -> String {
    let mut svg = String::new();
    open(&mut svg);
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"#9CA3AF\" font-size=\"14\">No data</text></svg>",
        CHART_WIDTH / 2.0,
        CHART_HEIGHT / 2.0
    );
    svg
}

/// Horizontal grid lines at 0, half and max, with value labels.
fn build_grid(svg: &mut String, max: f64) {
    for value in [0.0, max / 2.0, max] {
        let y = y_at(value, max);
        let _ = write!(
            svg,
            "<line x1=\"{PAD_LEFT}\" x2=\"{}\" y1=\"{y}\" y2=\"{y}\" stroke=\"#E5E7EB\"/>\
             <text x=\"{}\" y=\"{}\" text-anchor=\"end\" fill=\"#6B7280\" font-size=\"11\">{}</text>",
            CHART_WIDTH - PAD_RIGHT,
            PAD_LEFT - 6.0,
            y + 4.0,
            value.round()
        );
    }
}

fn build_x_labels(svg: &mut String, labels: &[String], x: impl Fn(usize) -> f64) {
    for (i, label) in labels.iter().enumerate() {
        let _ = write!(
            svg,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"#6B7280\" font-size=\"11\">",
            x(i),
            CHART_HEIGHT - PAD_BOTTOM + 18.0
        );
        escape_into(svg, label);
        svg.push_str("</text>");
    }
}

fn build_legend(svg: &mut String, entries: &[(&str, &str)]) {
    let mut x = PAD_LEFT;
    for (name, color) in entries {
        let _ = write!(
            svg,
            "<rect x=\"{x}\" y=\"8\" width=\"10\" height=\"10\" rx=\"2\" fill=\"{color}\"/>\
             <text x=\"{}\" y=\"17\" fill=\"#374151\" font-size=\"11\">",
            x + 14.0
        );
        escape_into(svg, name);
        svg.push_str("</text>");
        x += 24.0 + name.len() as f64 * 6.5;
    }
}

/// Multi-series line chart over shared x labels.
pub fn line_chart_svg(labels: &[String], series: &[Series]) -> String {
    if labels.is_empty() || series.iter().all(|s| s.values.is_empty()) {
        return empty_chart();
    }
    let max = nice_max(
        series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max),
    );
    let n = labels.len();

    let mut svg = String::with_capacity(4 * 1024);
    open(&mut svg);
    build_grid(&mut svg, max);
    build_x_labels(&mut svg, labels, |i| x_at(i, n));
    for s in series {
        let points: Vec<String> = s
            .values
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, v)| format!("{},{}", x_at(i, n), y_at(*v, max)))
            .collect();
        let _ = write!(
            svg,
            "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>",
            s.color,
            points.join(" ")
        );
        for (i, v) in s.values.iter().take(n).enumerate() {
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{}\" r=\"3\" fill=\"{}\"/>",
                x_at(i, n),
                y_at(*v, max),
                s.color
            );
        }
    }
    let legend: Vec<(&str, &str)> = series.iter().map(|s| (s.name.as_str(), s.color)).collect();
    build_legend(&mut svg, &legend);
    svg.push_str("</svg>");
    svg
}

/// Vertical bar chart, one bar per label.
pub fn bar_chart_svg(bars: &[(String, f64)], color: &str) -> String {
    if bars.is_empty() {
        return empty_chart();
    }
    let max = nice_max(bars.iter().map(|(_, v)| *v).fold(0.0, f64::max));
    let slot = plot_width() / bars.len() as f64;
    let bar_width = slot * 0.6;

    let mut svg = String::with_capacity(2 * 1024);
    open(&mut svg);
    build_grid(&mut svg, max);
    for (i, (_, value)) in bars.iter().enumerate() {
        let x = PAD_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let y = y_at(*value, max);
        let _ = write!(
            svg,
            "<rect x=\"{x}\" y=\"{y}\" width=\"{bar_width}\" height=\"{}\" rx=\"3\" fill=\"{color}\"/>",
            PAD_TOP + plot_height() - y
        );
    }
    let labels: Vec<String> = bars.iter().map(|(l, _)| l.clone()).collect();
    build_x_labels(&mut svg, &labels, |i| PAD_LEFT + slot * (i as f64 + 0.5));
    svg.push_str("</svg>");
    svg
}

/// Donut chart with a legend showing each slice's share.
pub fn donut_chart_svg(slices: &[Slice]) -> String {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if !(total > 0.0) {
        return empty_chart();
    }
    let (cx, cy, outer, inner) = (CHART_HEIGHT / 2.0, CHART_HEIGHT / 2.0, 100.0, 60.0);

    let mut svg = String::with_capacity(2 * 1024);
    open(&mut svg);
    let mut start = -PI / 2.0;
    for s in slices.iter().filter(|s| s.value > 0.0) {
        let sweep = s.value / total * 2.0 * PI;
        if sweep >= 2.0 * PI - 1e-9 {
            let _ = write!(
                svg,
                "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                (outer + inner) / 2.0,
                s.color,
                outer - inner
            );
        } else {
            let end = start + sweep;
            let large = if sweep > PI { 1 } else { 0 };
            let (x0, y0) = (cx + outer * start.cos(), cy + outer * start.sin());
            let (x1, y1) = (cx + outer * end.cos(), cy + outer * end.sin());
            let (x2, y2) = (cx + inner * end.cos(), cy + inner * end.sin());
            let (x3, y3) = (cx + inner * start.cos(), cy + inner * start.sin());
            let _ = write!(
                svg,
                "<path d=\"M{x0:.2},{y0:.2} A{outer},{outer} 0 {large} 1 {x1:.2},{y1:.2} \
                 L{x2:.2},{y2:.2} A{inner},{inner} 0 {large} 0 {x3:.2},{y3:.2} Z\" fill=\"{}\"/>",
                s.color
            );
        }
        start += sweep;
    }

    let legend_x = CHART_HEIGHT + 20.0;
    for (i, s) in slices.iter().enumerate() {
        let y = 60.0 + i as f64 * 24.0;
        let _ = write!(
            svg,
            "<rect x=\"{legend_x}\" y=\"{}\" width=\"12\" height=\"12\" rx=\"2\" fill=\"{}\"/>\
             <text x=\"{}\" y=\"{y}\" fill=\"#374151\" font-size=\"13\">",
            y - 10.0,
            s.color,
            legend_x + 18.0
        );
        escape_into(&mut svg, &s.name);
        let _ = write!(svg, " ({:.0}%)</text>", s.value / total * 100.0);
    }
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|d| format!("Sep {d}")).collect()
    }

    #[test]
    fn nice_max_rounds_up() {
        assert_eq!(nice_max(94.0), 100.0);
        assert_eq!(nice_max(35.0), 50.0);
        assert_eq!(nice_max(8.0), 10.0);
        assert_eq!(nice_max(5.0), 5.0);
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(f64::NAN), 1.0);
    }

    #[test]
    fn line_chart_draws_one_polyline_per_series() {
        let series = vec![
            Series { name: "Verified".into(), color: "#16A34A", values: vec![1.0, 4.0, 2.0] },
            Series { name: "Pending".into(), color: "#EAB308", values: vec![3.0, 0.0, 5.0] },
        ];
        let svg = line_chart_svg(&labels(3), &series);
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 6);
        assert!(svg.contains(">Sep 3</text>"));
        assert!(svg.contains(">Pending</text>"));
    }

    #[test]
    fn line_chart_puts_max_at_the_top() {
        let series = vec![Series { name: "A".into(), color: "#000", values: vec![0.0, 10.0] }];
        let svg = line_chart_svg(&labels(2), &series);
        let top = format!("{},{}", CHART_WIDTH - PAD_RIGHT, PAD_TOP);
        assert!(svg.contains(&top), "{svg}");
    }

    #[test]
    fn bar_chart_has_a_bar_per_entry() {
        let bars = vec![("Chennai".to_string(), 45.0), ("Kochi".to_string(), 28.0)];
        let svg = bar_chart_svg(&bars, "#3B82F6");
        assert_eq!(svg.matches("rx=\"3\" fill=\"#3B82F6\"").count(), 2);
        assert!(svg.contains(">Kochi</text>"));
    }

    #[test]
    fn donut_slices_and_shares() {
        let slices = vec![
            Slice { name: "Citizen Reports".into(), value: 45.0, color: "#3B82F6".into() },
            Slice { name: "Social Media".into(), value: 30.0, color: "#10B981".into() },
            Slice { name: "Official".into(), value: 25.0, color: "#F59E0B".into() },
        ];
        let svg = donut_chart_svg(&slices);
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains("Citizen Reports (45%)"));
    }

    #[test]
    fn single_slice_is_a_full_ring() {
        let slices = vec![Slice { name: "All".into(), value: 3.0, color: "#111".into() }];
        let svg = donut_chart_svg(&slices);
        assert!(!svg.contains("<path"));
        assert!(svg.contains("stroke=\"#111\""));
    }

    #[test]
    fn empty_inputs_render_a_placeholder() {
        assert!(line_chart_svg(&[], &[]).contains("No data"));
        assert!(bar_chart_svg(&[], "#000").contains("No data"));
        assert!(donut_chart_svg(&[]).contains("No data"));
    }

    #[test]
    fn labels_are_escaped() {
        let bars = vec![("A&B".to_string(), 1.0)];
        assert!(bar_chart_svg(&bars, "#000").contains(">A&amp;B</text>"));
    }
}
