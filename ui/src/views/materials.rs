use dioxus::prelude::*;

use crate::core::Command;

use super::use_page;

#[component]
pub fn MaterialsSection() -> Element {
    let (page, dispatcher) = use_page();

    let (cards, saved_count) = {
        let page = page.read();
        let cards: Vec<(String, String, bool, bool)> = page
            .materials()
            .iter()
            .map(|material| {
                (
                    material.title.to_string(),
                    material.summary.to_string(),
                    page.nav().card_visible(material.title),
                    page.is_saved(material.title),
                )
            })
            .collect();
        (cards, page.saved_titles().len())
    };

    rsx! {
        section { id: "materi", class: "section materials",
            div { class: "section__header",
                h2 { "Materi" }
                span { class: "materials__saved", "Tersimpan: {saved_count} materi" }
            }
            input {
                id: "search",
                r#type: "search",
                class: "materials__search",
                placeholder: "Cari materi...",
                aria_label: "Cari materi",
                oninput: move |evt: FormEvent| dispatcher.send(Command::Search(evt.value())),
            }
            div { class: "materials__grid",
                for (title, summary, visible, saved) in cards {
                    MaterialCard {
                        key: "{title}",
                        title: title.clone(),
                        summary: summary,
                        visible: visible,
                        saved: saved,
                    }
                }
            }
        }
    }
}

#[component]
fn MaterialCard(title: String, summary: String, visible: bool, saved: bool) -> Element {
    let (_, dispatcher) = use_page();
    let display = if visible { "" } else { "display: none" };
    let save_label = if saved { "Tersimpan" } else { "Simpan" };
    let open_title = title.clone();
    let save_title = title.clone();

    rsx! {
        article { class: "material-card", style: "{display}",
            h3 { class: "material-card__title", "{title}" }
            p { class: "material-card__summary", "{summary}" }
            div { class: "material-card__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| dispatcher.send(Command::OpenMaterial(open_title.clone())),
                    "Buka"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| dispatcher.send(Command::SaveMaterial(save_title.clone())),
                    "{save_label}"
                }
            }
        }
    }
}
