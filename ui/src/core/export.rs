//! Standalone SVG serialization of the chart for download.

use super::chart::{ChartRenderer, VIEW_HEIGHT, VIEW_WIDTH};
use super::config::PageConfig;
use super::format::format_number;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, PartialEq)]
pub struct SvgExport {
    pub filename: &'static str,
    pub mime: &'static str,
    pub markup: String,
}

/// Serializes the chart as currently shown, highlight included.
pub fn svg_markup(chart: &ChartRenderer) -> String {
    let w = format_number(VIEW_WIDTH);
    let h = format_number(VIEW_HEIGHT);
    let mut svg = format!(
        r#"<svg xmlns="{SVG_NS}" id="chart" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#
    );
    for bar in chart.bars() {
        svg.push_str(&bar.svg_rect());
    }
    svg.push_str("</svg>");
    svg
}

pub fn export_vector(chart: &ChartRenderer, config: &PageConfig) -> SvgExport {
    SvgExport {
        filename: config.export_filename,
        mime: config.export_mime,
        markup: svg_markup(chart),
    }
}
