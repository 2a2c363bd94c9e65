//! tint Session
//!
//! Ties the color pipeline, the history store and the clipboard together
//! behind one object a UI can drive.
//!
//! # Example
//! ```rust,ignore
//! use tint_session::{Config, FormatKind, Session, SystemClipboard};
//!
//! let mut session = Session::open(Config::default());
//! session.set_input("red");
//! let copied = smol::block_on(session.copy(FormatKind::Hex, &SystemClipboard::new()))?;
//! assert_eq!(copied, "#FF0000FF");
//! ```

mod clipboard;
mod config;
mod session;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use config::{Config, ConfigBuilder, ConfigError};
pub use session::Session;

// Re-export sub-crates for front ends
pub use tint_color as color;
pub use tint_color::{FormatKind, FormattedColor};
pub use tint_history as history;

/// Session operation error
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no converted value to copy")]
    NothingToCopy,

    #[error("copy failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("history not saved: {0}")]
    Store(#[from] tint_history::StoreError),
}
