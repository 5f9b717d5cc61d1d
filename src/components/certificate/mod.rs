pub mod layout;
pub mod models;
mod render;

pub use layout::{lay_out, RowArrangement, SignatoryLayout};
pub use models::{CertificateData, Signatory};
pub use render::{scale_factor, CertificatePreview, CertificateView, MountedPreview};
