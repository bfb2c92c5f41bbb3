pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod io;
pub mod render;

pub use error::{DebindexError, Result};
