use crate::error::Result;

/// Sink for copying text to the host clipboard
pub trait Clipboard {
    /// Copy `text`; an `Err` means the host refused
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Clipboard that remembers what it was given; used where no system
/// clipboard is available and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
