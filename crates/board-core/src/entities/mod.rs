//! Domain entities - core business objects

mod file;
mod label;
mod milestone;
mod user;

pub use file::ProjectFile;
pub use label::Label;
pub use milestone::Milestone;
pub use user::User;
