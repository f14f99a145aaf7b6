//! Static page content: sections, material cards and animations.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const SECTIONS: [Section; 5] = [
    Section {
        id: "beranda",
        label: "Beranda",
    },
    Section {
        id: "materi",
        label: "Materi",
    },
    Section {
        id: "infografis",
        label: "Infografis",
    },
    Section {
        id: "komunitas",
        label: "Komunitas",
    },
    Section {
        id: "download",
        label: "Unduh",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const MATERIALS: [Material; 6] = [
    Material {
        title: "Matematika Dasar",
        summary: "Bilangan, pecahan dan operasi hitung lewat permainan sederhana.",
    },
    Material {
        title: "Membaca Kreatif",
        summary: "Latihan memahami cerita pendek dan menuliskan ulang dengan gaya sendiri.",
    },
    Material {
        title: "Sains Eksperimen",
        summary: "Percobaan rumahan tentang air, udara dan cahaya.",
    },
    Material {
        title: "Seni Menggambar",
        summary: "Garis, bentuk dan warna untuk pemula.",
    },
    Material {
        title: "Informatika Ringkas",
        summary: "Berpikir komputasional tanpa komputer.",
    },
    Material {
        title: "Bahasa Inggris Sehari-hari",
        summary: "Kosakata dan percakapan pendek untuk kegiatan harian.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const ANIMATIONS: [Animation; 2] = [
    Animation {
        src: "https://assets.edukreasi.id/animasi/belajar.webp",
        alt: "Animasi anak belajar bersama",
    },
    Animation {
        src: "https://assets.edukreasi.id/animasi/komunitas.webp",
        alt: "Animasi kegiatan komunitas",
    },
];
