#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod config;
pub use config::*;
pub mod error;
pub use error::*;
pub mod network;
pub use network::*;
pub mod openalex;
pub use openalex::*;
pub mod search;
pub use search::*;
#[cfg(feature = "server")]
pub mod server;
pub(crate) mod utils;

#[cfg(test)]
pub(crate) mod testing;
