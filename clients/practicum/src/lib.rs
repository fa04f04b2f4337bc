mod client;
mod config;
mod error;

pub use client::{ReviewClient, DEFAULT_ENDPOINT};
pub use config::ReviewClientConfig;
pub use error::ApiError;
