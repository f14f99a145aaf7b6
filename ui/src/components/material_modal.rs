use dioxus::prelude::*;

use crate::core::Command;
use crate::views::use_page;

/// The one material overlay. Hidden until a card's "Buka" button opens it;
/// only the close button hides it again.
#[component]
pub fn MaterialModalView() -> Element {
    let (page, dispatcher) = use_page();
    let modal = page.read().modal().clone();
    let overlay_class = if modal.is_open() {
        "modal"
    } else {
        "modal hidden"
    };

    rsx! {
        div {
            class: "{overlay_class}",
            "role": "dialog",
            "aria-modal": "true",
            "aria-labelledby": "modalTitle",
            div { class: "modal__panel",
                button {
                    id: "modalClose",
                    r#type: "button",
                    class: "modal__close",
                    aria_label: "Tutup",
                    onclick: move |_| dispatcher.send(Command::CloseModal),
                    "×"
                }
                h3 { id: "modalTitle", class: "modal__title", "{modal.title()}" }
                p { id: "modalContent", class: "modal__content", "{modal.body()}" }
            }
        }
    }
}
