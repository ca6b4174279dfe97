//! Pixbin Database Library
//!
//! Repository over the stored-file metadata table, plus the embedded
//! migrations consumed by the api crate and the tests.

pub mod db;

pub use db::FileRepository;

/// Embedded migrations for the `files` table. Run against a pool at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
