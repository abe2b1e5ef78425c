pub mod period;
pub mod timestamp;
pub mod clock;

// Re-exports for convenience
pub use period::*;
pub use timestamp::*;
pub use clock::*;
