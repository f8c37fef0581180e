pub mod cli;
pub mod error;
pub mod models;
pub mod queries;
pub mod readers;
pub mod service;
pub mod utils;

pub use error::{QueryError, Result};
