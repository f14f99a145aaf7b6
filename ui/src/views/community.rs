use dioxus::prelude::*;

use crate::components::AnimatedFigure;

#[component]
pub fn CommunitySection() -> Element {
    rsx! {
        section { id: "komunitas", class: "section community",
            div { class: "community__copy",
                h2 { "Komunitas" }
                p {
                    "Belajar lebih seru bersama teman. Ikuti kelompok belajar daring "
                    "setiap Sabtu dan bagikan hasil karyamu."
                }
            }
            AnimatedFigure { slot: 1 }
        }
    }
}
