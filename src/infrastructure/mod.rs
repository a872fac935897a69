//! Infrastructure layer - External I/O, persistence and display ports

pub mod config;
pub mod render;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use render::{RecordingRenderer, RenderCommand, Renderer};
pub use repository::LogDirectory;
pub use storage::{FileStore, MemoryStore, SnapshotStore};
