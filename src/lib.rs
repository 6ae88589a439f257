// TaskTracker - Persistent task tracking over a single JSON file

pub mod error;
pub mod models;
pub mod store;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use models::{Status, Task, now_timestamp};
pub use store::TaskStore;
