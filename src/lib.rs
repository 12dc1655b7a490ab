pub mod aws;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod outline;
pub mod pipeline;
pub mod reporting;
