use dioxus::prelude::*;

use crate::core::animation::AnimationState;
use crate::core::catalog::ANIMATIONS;
use crate::core::Command;
use crate::views::use_page;

/// Animation with a one-way switch to a static placeholder on load failure.
#[component]
pub fn AnimatedFigure(slot: usize) -> Element {
    let (page, dispatcher) = use_page();
    let Some(animation) = ANIMATIONS.get(slot).copied() else {
        return rsx! {};
    };
    let (state, placeholder) = {
        let page = page.read();
        (page.animation_state(slot), page.config().animation_placeholder)
    };

    match state {
        AnimationState::Playing => rsx! {
            img {
                class: "animation",
                src: animation.src,
                alt: animation.alt,
                onerror: move |_| dispatcher.send(Command::AnimationFailed(slot)),
            }
        },
        AnimationState::Fallback => rsx! {
            img {
                class: "animation animation--fallback",
                src: placeholder,
                alt: animation.alt,
            }
        },
    }
}
