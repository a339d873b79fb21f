//! Configuration for erase operations

/// Default block size for each write call (4 KB)
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Default pattern sequence: overwrite-with-ones, then zero, then random
pub const DEFAULT_PATTERNS: &str = "OZR";

/// Configuration for an [`Eraser`](crate::Eraser) instance.
///
/// Constructed explicitly by the caller before any engine instance is
/// created; the core keeps no ambient global state.
#[derive(Debug, Clone)]
pub struct EraseConfig {
    /// Block size in bytes for each write call
    pub block_size: usize,

    /// Ordered pattern codes applied per file (Z=zero, O=one, R=random).
    /// Codes are resolved lazily, one pass at a time, at fill time.
    pub patterns: String,
}

impl Default for EraseConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            patterns: DEFAULT_PATTERNS.to_string(),
        }
    }
}

impl EraseConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set block size (floored at 1 byte)
    pub fn block_size(mut self, size: usize) -> Self {
        self.block_size = size.max(1);
        self
    }

    /// Set the ordered pattern code sequence
    pub fn patterns(mut self, patterns: impl Into<String>) -> Self {
        self.patterns = patterns.into();
        self
    }
}
