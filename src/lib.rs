pub mod api;
pub mod blocks;
pub mod errors;
pub mod fsops;
pub mod manifest;
pub mod package;
pub mod project;

// Public API
pub use api::{cleanup_authoring_content, initialize, SetupError};
pub use project::{ProjectType, UnknownProjectType};
