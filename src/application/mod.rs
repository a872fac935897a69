//! Application layer - Use cases and orchestration

pub mod entry_log;
pub mod init;
pub mod manage_config;
pub mod session;

pub use entry_log::{EntryLog, Submission};
pub use manage_config::ConfigService;
pub use session::Session;
