//! Pixbin Storage Library
//!
//! Local-filesystem store for uploaded files. All files live directly under
//! a configured root directory, named by their cleaned original filename.
//! Filenames must not contain `..` segments or a leading `/`; the store
//! re-checks this guard beneath the service-level validation.

pub mod local;

pub use local::LocalStore;
