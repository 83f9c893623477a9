pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod server;

pub use error::{Error, Result};
