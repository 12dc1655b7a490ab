pub mod types;
pub mod classification;

pub use types::OrgDocsError;
pub use classification::ErrorClassification;
