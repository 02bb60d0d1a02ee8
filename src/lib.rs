pub mod config;
pub mod error;
pub mod expert;
pub mod llm;
pub mod resolver;
pub mod server;

pub use error::{Error, Result};
