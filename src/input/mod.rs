//! Input processing module
//! Handles text extraction, job list loading, and input management

pub mod jobs;
pub mod manager;
pub mod text_extractor;

pub use jobs::load_jobs;
pub use manager::InputManager;
