pub mod parser;
pub mod types;
pub mod credentials;

pub use types::*;
pub use parser::{load_config, build_config};
pub use credentials::load_credential_sets;
