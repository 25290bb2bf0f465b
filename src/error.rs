use thiserror::Error;

/// Failures surfaced by arenas, allocator handles, and the containers
/// built on top of them.
///
/// Every variant is reported immediately to the caller of the operation
/// that triggered it; nothing is retried or silently recovered. A failed
/// allocation leaves both the arena and the shared accounting untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AllocError {
  /// Granting the requested elements would push the shared counter past
  /// the fixed ceiling. Raised before any memory is touched.
  #[error("allocating {requested} element(s) would exceed the limit of {max}")]
  LimitExceeded { requested: usize, max: usize },

  /// The underlying system allocator could not supply a new block.
  #[error("out of memory while requesting {size} bytes")]
  OutOfMemory { size: usize },

  /// A requested alignment is not a power of two. Well-formed element
  /// types never produce this; it guards direct byte-level callers.
  #[error("alignment {align} is not a power of two")]
  BadAlignment { align: usize },
}
