mod auth;
pub mod client;
mod profile;
pub mod types;

pub use client::*;
pub use types::*;
