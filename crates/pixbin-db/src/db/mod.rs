//! Database repositories for the data access layer

mod files;

pub use files::FileRepository;
