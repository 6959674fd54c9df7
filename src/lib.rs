pub mod consts;
pub mod error;
pub mod config;
pub mod network;
pub mod api;
pub mod selector;
pub mod downloader;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};

pub mod prelude {
    pub use super::consts::*;
    pub use super::error::{Error, Result};
    pub use super::config::{ClientConfig, DecodePolicy};
    pub use super::network::{Transport, TransportError, HttpTransport};
    pub use super::api::Client;
    pub use super::api::schema::*;
    pub use super::selector::select_file;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
