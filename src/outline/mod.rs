pub mod store;
pub mod client;

pub use store::DocumentStore;
pub use client::OutlineClient;
