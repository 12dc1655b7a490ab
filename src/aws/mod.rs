pub mod api;
pub mod client;
pub mod sdk;

pub use api::{AccountRecord, OrganizationApi, OrganizationConnector, Page};
pub use client::OrganizationClient;
pub use sdk::AwsConnector;
