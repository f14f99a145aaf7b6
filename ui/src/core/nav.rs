//! Navigation state: mobile menu, scroll spy and card search.

#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub offset_top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavController {
    menu_open: bool,
    active_section: Option<String>,
    keyword: String,
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the menu and returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Value for the toggle button's `aria-expanded`.
    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open {
            "true"
        } else {
            "false"
        }
    }

    pub fn filter_cards(&mut self, keyword: &str) {
        self.keyword = keyword.to_lowercase();
    }

    pub fn card_visible(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.keyword)
    }

    /// Recomputes the active section from scratch for `scroll_y`.
    pub fn update_active_link(
        &mut self,
        scroll_y: f64,
        sections: &[SectionOffset],
        threshold: f64,
    ) -> Option<&str> {
        self.active_section = active_section_for(scroll_y, sections, threshold).map(str::to_string);
        self.active_section.as_deref()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Whether the link with `href` (for example `#materi`) is the active one.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active_section, href.strip_prefix('#')) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }
}

/// The last section, in document order, whose top minus `threshold` sits at
/// or above `scroll_y`.
pub fn active_section_for(
    scroll_y: f64,
    sections: &[SectionOffset],
    threshold: f64,
) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.offset_top - threshold)
        .map(|section| section.id.as_str())
}
