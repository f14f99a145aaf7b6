use dioxus::prelude::*;

use crate::core::Command;

use super::use_page;

const DOWNLOAD_HINT: &str =
    "Simpan infografis sebagai berkas SVG atau cetak halaman ini untuk belajar tanpa layar.";

#[component]
pub fn DownloadSection() -> Element {
    let (_, dispatcher) = use_page();

    rsx! {
        section { id: "download", class: "section download",
            h2 { "Unduh & Cetak" }
            p { "{DOWNLOAD_HINT}" }
            div { class: "download__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| dispatcher.send(Command::ExportChart),
                    "Unduh SVG"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| dispatcher.send(Command::PrintPage),
                    "Cetak"
                }
            }
        }
    }
}
