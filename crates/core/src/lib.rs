//! Framework-free domain vocabulary shared by the storage and HTTP crates.

pub mod error;
pub mod kind;
pub mod types;
pub mod validation;
