//! OpenAlex API

pub mod client;
pub use client::*;
pub mod authors;
pub use authors::*;
pub mod models;
pub use models::*;
pub mod works;
pub use works::*;
