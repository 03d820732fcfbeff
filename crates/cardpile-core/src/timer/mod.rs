mod engine;

pub use engine::{SessionTimer, DEFAULT_DURATION_SECS};
