//! Fixed page constants. There is no config file or environment lookup; the
//! controller takes a `PageConfig` so the values travel explicitly.

/// Storage key holding the JSON array of saved material titles.
pub const STORAGE_KEY: &str = "edukreasi_progress";

pub const TOAST_VISIBLE_MS: u64 = 2_500;
pub const TOAST_FADE_MS: u64 = 300;

/// Sections count as reached this many pixels before their top edge.
pub const SCROLL_THRESHOLD_PX: f64 = 60.0;

pub const JUMP_KEY: &str = "1";

pub const EXPORT_FILENAME: &str = "infografis.svg";
pub const EXPORT_MIME: &str = "image/svg+xml;charset=utf-8";

pub const ANIMATION_PLACEHOLDER: &str =
    "https://via.placeholder.com/800x450.png?text=Animasi+Tidak+Dapat+Dimuat";

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub storage_key: &'static str,
    pub toast_visible_ms: u64,
    pub toast_fade_ms: u64,
    pub scroll_threshold_px: f64,
    pub jump_key: &'static str,
    pub export_filename: &'static str,
    pub export_mime: &'static str,
    pub animation_placeholder: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY,
            toast_visible_ms: TOAST_VISIBLE_MS,
            toast_fade_ms: TOAST_FADE_MS,
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            jump_key: JUMP_KEY,
            export_filename: EXPORT_FILENAME,
            export_mime: EXPORT_MIME,
            animation_placeholder: ANIMATION_PLACEHOLDER,
        }
    }
}
