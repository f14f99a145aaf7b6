//! The single material overlay.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialModal {
    open: bool,
    title: String,
    body: String,
}

impl MaterialModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `title`. Opening while already open replaces the content.
    pub fn open(&mut self, title: &str) {
        self.title = title.to_string();
        self.body = placeholder_body(title);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

fn placeholder_body(title: &str) -> String {
    format!("Ini adalah materi \"{title}\". Anda bisa menambahkan konten dinamis di sini.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!MaterialModal::new().is_open());
    }

    #[test]
    fn reopening_replaces_content() {
        let mut modal = MaterialModal::new();
        modal.open("Matematika Dasar");
        modal.open("Seni Menggambar");
        assert!(modal.is_open());
        assert_eq!(modal.title(), "Seni Menggambar");
        assert!(modal.body().contains("\"Seni Menggambar\""));
    }

    #[test]
    fn close_hides() {
        let mut modal = MaterialModal::new();
        modal.open("Sains");
        modal.close();
        assert!(!modal.is_open());
    }
}
