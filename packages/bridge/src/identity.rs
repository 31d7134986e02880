use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identity of one renderer / portal registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RendererId(u64);

impl RendererId {
    /// Allocates the next id from the process-wide allocator.
    pub fn next() -> Self {
        GLOBAL.allocate()
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RendererId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "renderer-{}", self.0)
    }
}

/// Monotonic id allocator. Ids are never reused within an allocator, so
/// registry ordering stays deterministic under test.
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub const fn new() -> Self {
        IdAllocator {
            next: AtomicU64::new(1),
        }
    }

    pub fn allocate(&self) -> RendererId {
        RendererId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: IdAllocator = IdAllocator::new();
