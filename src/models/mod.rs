pub mod credential;
pub mod account;
pub mod iam;
pub mod inventory;

pub use credential::*;
pub use account::*;
pub use iam::*;
pub use inventory::*;
