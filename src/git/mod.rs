pub mod repo;

pub use repo::{blob_paths, BlameScope, GitRepo};
