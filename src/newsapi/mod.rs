pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::NewsApiClient;
pub use config::NewsConfig;
pub use error::NewsApiError;
pub use types::*;
