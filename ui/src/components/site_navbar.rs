use dioxus::prelude::*;

use crate::core::catalog::SECTIONS;
use crate::core::Command;
use crate::views::use_page;

/// Sticky header with the mobile menu toggle and scroll-spy links.
#[component]
pub fn SiteNavbar() -> Element {
    let (page, dispatcher) = use_page();

    let (nav_class, expanded, links) = {
        let page = page.read();
        let nav = page.nav();
        let nav_class = if nav.menu_open() {
            "site-nav site-nav--open"
        } else {
            "site-nav"
        };
        let links: Vec<(String, &'static str, &'static str)> = SECTIONS
            .iter()
            .map(|section| {
                let href = section.href();
                let class = if nav.is_link_active(&href) {
                    "site-nav__link site-nav__link--active"
                } else {
                    "site-nav__link"
                };
                (href, section.label, class)
            })
            .collect();
        (nav_class, nav.aria_expanded(), links)
    };

    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner",
                a { class: "site-header__brand", href: "#beranda", "EduKreasi" }
                button {
                    id: "menuBtn",
                    r#type: "button",
                    class: "site-header__menu",
                    aria_label: "Menu navigasi",
                    aria_controls: "site-nav",
                    aria_expanded: "{expanded}",
                    onclick: move |_| dispatcher.send(Command::ToggleMenu),
                    "☰"
                }
                nav { id: "site-nav", class: "{nav_class}",
                    for (href, label, class) in links {
                        a { key: "{href}", href: "{href}", class: "{class}", "{label}" }
                    }
                }
            }
        }
    }
}
