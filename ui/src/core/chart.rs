//! Proportional bar chart over a fixed 100×100 viewport.

use super::format::{format_number, format_percent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDatum {
    pub label: &'static str,
    /// Percentage in `0..=100`.
    pub value: f64,
}

impl ChartDatum {
    pub const fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }
}

/// Where EduKreasi learners study.
pub const CHART_DATA: [ChartDatum; 4] = [
    ChartDatum::new("Sekolah", 75.0),
    ChartDatum::new("Kursus", 45.0),
    ChartDatum::new("Mandiri", 60.0),
    ChartDatum::new("Komunitas", 30.0),
];

pub const VIEW_WIDTH: f64 = 100.0;
pub const VIEW_HEIGHT: f64 = 100.0;
pub const PADDING: f64 = 10.0;
/// Bars scale into `VIEW_HEIGHT - PLOT_INSET`.
pub const PLOT_INSET: f64 = 20.0;
pub const BAR_WIDTH_RATIO: f64 = 0.7;
pub const BAR_INSET_RATIO: f64 = 0.15;
pub const CORNER_RADIUS: f64 = 2.0;
/// Fallback scale when every value is zero.
pub const DEFAULT_MAX: f64 = 100.0;

pub const EVEN_FILL: &str = "#06b6d4";
pub const ODD_FILL: &str = "#7c3aed";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

pub const HIGHLIGHT_STROKE: Stroke = Stroke {
    color: "rgba(0,0,0,0.08)",
    width: 2.0,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub label: &'static str,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub stroke: Option<Stroke>,
}

impl Bar {
    /// Toast text announced when the bar is selected.
    pub fn caption(&self) -> String {
        format!("{}: {}", self.label, format_percent(self.value))
    }

    pub fn svg_rect(&self) -> String {
        let mut rect = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}""#,
            format_number(self.x),
            format_number(self.y),
            format_number(self.width),
            format_number(self.height),
            format_number(CORNER_RADIUS),
            self.fill,
        );
        if let Some(stroke) = self.stroke {
            rect.push_str(&format!(
                r#" stroke="{}" stroke-width="{}""#,
                stroke.color,
                format_number(stroke.width)
            ));
        }
        rect.push_str("/>");
        rect
    }
}

/// Rendered bars plus the current selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartRenderer {
    bars: Vec<Bar>,
    highlighted: Option<usize>,
}

impl ChartRenderer {
    pub fn render(data: &[ChartDatum]) -> Self {
        Self {
            bars: layout(data),
            highlighted: None,
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn bar(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// One legend entry per bar, in bar order.
    pub fn legend(&self) -> impl Iterator<Item = (usize, &'static str)> + '_ {
        self.bars.iter().map(|bar| (bar.index, bar.label))
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Strokes exactly the bar at `index` and clears every other stroke. An
    /// index past the end leaves no bar stroked.
    pub fn highlight(&mut self, index: usize) {
        for bar in &mut self.bars {
            bar.stroke = (bar.index == index).then_some(HIGHLIGHT_STROKE);
        }
        self.highlighted = (index < self.bars.len()).then_some(index);
    }
}

fn layout(data: &[ChartDatum]) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }

    let max = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    let max = if max > 0.0 { max } else { DEFAULT_MAX };
    let col_w = (VIEW_WIDTH - PADDING * 2.0) / data.len() as f64;

    data.iter()
        .enumerate()
        .map(|(index, datum)| {
            let height = datum.value / max * (VIEW_HEIGHT - PLOT_INSET);
            Bar {
                index,
                label: datum.label,
                value: datum.value,
                x: PADDING + index as f64 * col_w + col_w * BAR_INSET_RATIO,
                y: VIEW_HEIGHT - PADDING - height,
                width: col_w * BAR_WIDTH_RATIO,
                height,
                fill: if index % 2 == 0 { EVEN_FILL } else { ODD_FILL },
                stroke: None,
            }
        })
        .collect()
}
