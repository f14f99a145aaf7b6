mod page;
pub(crate) use page::use_page;
pub use page::{Controller, EduKreasiPage};

mod hero;
pub use hero::HeroSection;

mod materials;
pub use materials::MaterialsSection;

mod infographic;
pub use infographic::InfographicSection;

mod community;
pub use community::CommunitySection;

mod download;
pub use download::DownloadSection;
