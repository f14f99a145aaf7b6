use dioxus::prelude::*;

use crate::components::AnimatedFigure;

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: "beranda", class: "section hero",
            div { class: "hero__copy",
                h1 { "Belajar kreatif, kapan saja." }
                p {
                    "EduKreasi mengumpulkan materi ringkas untuk belajar mandiri, "
                    "di rumah maupun di sekolah."
                }
                p { class: "hero__hint", "Tekan tombol 1 untuk langsung ke materi pertama." }
                a { class: "button button--primary", href: "#materi", "Mulai belajar" }
            }
            AnimatedFigure { slot: 0 }
        }
    }
}
