//! Shared UI crate for the EduKreasi page: controller logic, browser glue
//! and the Dioxus views that render it.

pub mod core;
pub mod platform;
pub mod views;

pub mod components {
    mod animated_figure;
    pub use animated_figure::AnimatedFigure;

    mod material_modal;
    pub use material_modal::MaterialModalView;

    mod site_navbar;
    pub use site_navbar::SiteNavbar;

    mod toast_stack;
    pub use toast_stack::ToastStack;
}

pub use views::EduKreasiPage;
