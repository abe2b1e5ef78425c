pub mod time;
pub mod clipboard;
pub mod zone;

// Re-exports
pub use time::*;
pub use clipboard::*;
pub use zone::*;
