use tracing::warn;
use unixtime_core::CoreError;
use unixtime_core::ports::Clipboard;

/// The host clipboard, opened lazily on first copy
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, CoreError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| {
                warn!("System clipboard unavailable: {}", e);
                CoreError::Clipboard { reason: e.to_string() }
            })?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| CoreError::Clipboard { reason: "clipboard not initialised".to_string() })
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), CoreError> {
        let clipboard = self.handle()?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| CoreError::Clipboard { reason: e.to_string() })
    }
}
