/// Network adapters for the platform REST API
mod xray_client;

pub use xray_client::XrayClient;
