//! Local backend implementations

pub mod console;

pub use console::{ConsoleBackend, ConsoleFormat};

pub use crate::core::Backend;
