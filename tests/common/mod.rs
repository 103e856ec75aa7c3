mod fixtures;
pub use fixtures::*;

// Re-export commonly used constants from fixturegen for tests
pub use fixturegen::{DEFAULT_FILE_NAME, DEFAULT_HEIGHT, DEFAULT_WIDTH};
