//! The generic allocation contract consumed by allocator-aware containers,
//! and the two handles implementing it.
//!
//! [`ArenaAllocator`] binds a shared [`Arena`](crate::Arena) and shared
//! allocation accounting under a [`Policy`](crate::Policy); [`Heap`] is the
//! stateless global-heap handle containers default to.

mod handle;
mod heap;

#[cfg(test)]
mod tests;

pub use handle::ArenaAllocator;
pub use heap::Heap;

use core::ptr::NonNull;

use crate::error::AllocError;

/// Element-typed allocation contract.
///
/// This is the full capability set a generic container needs from its
/// allocator: typed allocation, infallible deallocation, rebinding to a
/// different element type over the same underlying state, identity-based
/// equality, and the propagation capabilities a container inspects when
/// copying, moving, or swapping.
///
/// Cloning a handle shares its state rather than duplicating capacity:
/// clones and rebinds observe each other's grants and compare equal.
///
/// # Safety
///
/// Implementations must uphold the following for the container code that
/// builds on raw pointers from this trait:
///
/// - `allocate(n)` on success returns a pointer valid for reads and writes
///   of `n` values of `T`, aligned for `T`, and not overlapping any other
///   live allocation from the same or an equal handle.
/// - The memory stays valid until it is passed to `deallocate` on an equal
///   handle or until the last handle sharing the underlying state is
///   dropped, whichever comes first.
/// - Equality must be reflexive among clones and rebinds of one handle:
///   memory allocated through a handle can be deallocated through any
///   handle comparing equal to it.
pub unsafe trait Allocator<T>: Clone + PartialEq {
  /// The same handle bound to a different element type.
  type Rebound<U>: Allocator<U>;

  /// Whether copy-assigning a container replaces the destination's
  /// allocator with the source's.
  const PROPAGATE_ON_COPY_ASSIGN: bool;

  /// Whether move-assigning a container transfers the source's allocator.
  const PROPAGATE_ON_MOVE_ASSIGN: bool;

  /// Whether swapping containers exchanges their allocators. Swapping
  /// containers with unequal, non-propagating allocators is a
  /// precondition violation.
  const PROPAGATE_ON_SWAP: bool;

  /// True only when every two handles of this type compare equal, letting
  /// containers skip runtime equality checks.
  const IS_ALWAYS_EQUAL: bool;

  /// Allocates storage for `n` values of `T`.
  fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError>;

  /// Releases storage previously obtained from an equal handle.
  ///
  /// Never fails. Implementations are free to make this a no-op; the
  /// arena-backed handle deliberately does, so callers must not assume
  /// memory is reused.
  fn deallocate(&self, ptr: NonNull<T>, n: usize);

  /// Produces a handle for element type `U` sharing this handle's arena
  /// and accounting.
  fn rebind<U>(&self) -> Self::Rebound<U>;

  /// Allocator a container clone should start from; defaults to sharing
  /// this handle.
  fn select_on_copy(&self) -> Self {
    self.clone()
  }
}
