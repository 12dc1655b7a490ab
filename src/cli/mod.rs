pub mod commands;
pub mod logging;
pub mod sync;
pub mod preview;
pub mod validate;

pub use commands::{Cli, Commands};
