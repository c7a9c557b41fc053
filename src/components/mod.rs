//! UI Components
//!
//! One component per page section, plus shared status placeholders.

mod certificates;
mod experience;
mod status;
mod tech;
mod works;

pub use certificates::CertificatesSection;
pub use experience::ExperienceSection;
pub use status::{SectionError, SectionLoading};
pub use tech::TechSection;
pub use works::WorksSection;
