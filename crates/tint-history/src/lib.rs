//! tint History
//!
//! A small log of color inputs the user has copied. Entries are unique by
//! exact text, kept oldest first, and capped at a configurable capacity.

mod backend;
mod display;
mod list;
mod store;

pub use backend::{FileBackend, HISTORY_KEY, HistoryBackend, MemoryBackend};
pub use display::{DisplayEntry, display_order};
pub use list::{AppendOutcome, HistoryList, append};
pub use store::HistoryStore;

/// History persistence error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("history storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("history record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("history record has unexpected shape: {0}")]
    Shape(String),
}
