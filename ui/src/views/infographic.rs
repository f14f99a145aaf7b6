use dioxus::prelude::*;

use crate::core::chart::{Bar, CORNER_RADIUS, VIEW_HEIGHT, VIEW_WIDTH};
use crate::core::format::format_number;
use crate::core::Command;

use super::use_page;

#[component]
pub fn InfographicSection() -> Element {
    let (page, dispatcher) = use_page();

    let (bars, legend) = {
        let page = page.read();
        let chart = page.chart();
        let legend: Vec<(usize, &'static str, &'static str)> = chart
            .legend()
            .map(|(index, label)| {
                let class = if chart.highlighted() == Some(index) {
                    "chart-legend__item chart-legend__item--active"
                } else {
                    "chart-legend__item"
                };
                (index, label, class)
            })
            .collect();
        (chart.bars().to_vec(), legend)
    };
    let view_box = format!(
        "0 0 {} {}",
        format_number(VIEW_WIDTH),
        format_number(VIEW_HEIGHT)
    );

    rsx! {
        section { id: "infografis", class: "section infographic",
            h2 { "Infografis" }
            p { "Tempat belajar yang paling sering dipilih peserta EduKreasi (dalam persen)." }
            svg {
                id: "chart",
                class: "chart",
                view_box: "{view_box}",
                "role": "img",
                "aria-label": "Grafik batang tempat belajar",
                for bar in bars {
                    ChartBar { key: "{bar.index}", bar: bar }
                }
            }
            div { id: "labels", class: "chart-legend",
                for (index, label, class) in legend {
                    button {
                        key: "{index}",
                        r#type: "button",
                        class: "{class}",
                        onclick: move |_| dispatcher.send(Command::SelectBar(index)),
                        "{label}"
                    }
                }
            }
        }
    }
}

#[component]
fn ChartBar(bar: Bar) -> Element {
    let (_, dispatcher) = use_page();
    let index = bar.index;
    let stroke = bar.stroke.map(|stroke| stroke.color);
    let stroke_width = bar.stroke.map(|stroke| format_number(stroke.width));

    rsx! {
        rect {
            class: "chart__bar",
            x: "{format_number(bar.x)}",
            y: "{format_number(bar.y)}",
            width: "{format_number(bar.width)}",
            height: "{format_number(bar.height)}",
            rx: "{format_number(CORNER_RADIUS)}",
            fill: bar.fill,
            stroke: stroke,
            stroke_width: stroke_width,
            onclick: move |_| dispatcher.send(Command::SelectBar(index)),
        }
    }
}
