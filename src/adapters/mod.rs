pub mod clipboard;
pub mod zone;

pub use clipboard::SystemClipboard;
pub use zone::ChronoZoneLabel;
