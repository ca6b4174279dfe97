//! Domain models

mod file;

pub use file::{FileRecord, NewFileRecord};
