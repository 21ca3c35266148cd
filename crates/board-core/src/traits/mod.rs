//! Ports implemented by infrastructure

mod repositories;

pub use repositories::{ChangeLogSource, RepoResult};
