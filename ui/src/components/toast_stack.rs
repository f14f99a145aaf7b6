use dioxus::prelude::*;

use crate::views::use_page;

#[component]
pub fn ToastStack() -> Element {
    let (page, _) = use_page();
    let toasts = page.read().toasts().to_vec();

    rsx! {
        div { class: "toast-stack", "role": "status", "aria-live": "polite",
            for toast in toasts {
                div { key: "{toast.id}", class: "{toast.css_class()}", "{toast.message}" }
            }
        }
    }
}
