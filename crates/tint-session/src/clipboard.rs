//! Clipboard integration
//!
//! Write converted values to the system clipboard.

use std::cell::RefCell;
#[cfg(target_os = "linux")]
use std::process::{Child, Command, Stdio};

/// Clipboard write error
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("no clipboard available")]
    Unavailable,

    #[error("clipboard I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard helper exited unsuccessfully")]
    Failed,
}

/// Something text can be copied to
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for &C {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// System clipboard via `xclip` or `xsel`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_os = "linux")]
        {
            use std::io::ErrorKind;

            // Try xclip first, then xsel
            let spawned = Command::new("xclip")
                .args(["-selection", "clipboard"])
                .stdin(Stdio::piped())
                .stderr(Stdio::null())
                .spawn()
                .or_else(|_| {
                    Command::new("xsel")
                        .args(["--clipboard", "--input"])
                        .stdin(Stdio::piped())
                        .stderr(Stdio::null())
                        .spawn()
                });

            let mut child = match spawned {
                Ok(child) => child,
                Err(e) if e.kind() == ErrorKind::NotFound => return Err(ClipboardError::Unavailable),
                Err(e) => return Err(e.into()),
            };

            feed_helper(&mut child, text)
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = text;
            Err(ClipboardError::Unavailable)
        }
    }
}

/// Pipe `text` into a spawned helper and wait for it to exit.
///
/// The child is always reaped, including when the write fails.
#[cfg(target_os = "linux")]
fn feed_helper(child: &mut Child, text: &str) -> Result<(), ClipboardError> {
    use std::io::Write;

    // Dropping stdin closes it so the helper sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait()?;
    written?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Failed)
    }
}

/// In-process clipboard that records every write
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: RefCell<Vec<String>>,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail
    pub fn unavailable() -> Self {
        Self {
            writes: RefCell::new(Vec::new()),
            unavailable: true,
        }
    }

    /// Most recent write
    pub fn contents(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.unavailable {
            return Err(ClipboardError::Unavailable);
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}
