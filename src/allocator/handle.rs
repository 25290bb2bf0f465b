extern crate alloc;

use alloc::rc::Rc;
use core::{
  cell::Cell,
  fmt,
  marker::PhantomData,
  mem,
  ptr::NonNull,
};

use crate::{
  allocator::Allocator,
  arena::Arena,
  error::AllocError,
  policy::Policy,
};

/// Allocation accounting shared by every handle derived from a common
/// origin. `allocated` is cumulative and never decremented; allocation
/// through this crate is monotonic.
#[derive(Debug)]
struct AllocState {
  /// Element ceiling, 0 meaning unlimited.
  max_elements: usize,
  allocated: Cell<usize>,
}

impl AllocState {
  fn new(max_elements: usize) -> Self {
    Self {
      max_elements,
      allocated: Cell::new(0),
    }
  }

  /// Fails without changing anything when granting `n` more elements
  /// would cross the ceiling. No partial grants.
  fn check(&self, n: usize) -> Result<(), AllocError> {
    if self.max_elements == 0 {
      return Ok(());
    }
    match self.allocated.get().checked_add(n) {
      Some(total) if total <= self.max_elements => Ok(()),
      _ => Err(AllocError::LimitExceeded {
        requested: n,
        max: self.max_elements,
      }),
    }
  }

  fn commit(&self, n: usize) {
    self.allocated.set(self.allocated.get().saturating_add(n));
  }
}

/// Arena-backed allocator handle for elements of type `T`.
///
/// Binds one shared [`Arena`] and one shared budget, both configured once
/// by the [`Policy`] given at construction. Clones and rebinds reference
/// the same arena and budget; a grant made through any of them is visible
/// to, and constrains, all of them. The arena and budget are released when
/// the last referencing handle is dropped.
///
/// Two handles compare equal iff they reference the same arena. Handles
/// constructed independently never compare equal, even with identical
/// policy values.
pub struct ArenaAllocator<T> {
  arena: Rc<Arena>,
  state: Rc<AllocState>,
  _marker: PhantomData<T>,
}

impl<T> ArenaAllocator<T> {
  /// Creates a handle with a fresh arena and budget.
  ///
  /// The arena's initial block is sized for `policy.initial_elements()`
  /// values of `T`; a `Fixed` policy additionally installs its ceiling in
  /// the shared accounting.
  pub fn try_new(policy: Policy) -> Result<Self, AllocError> {
    let bytes = policy.initial_elements().saturating_mul(mem::size_of::<T>());

    Ok(Self {
      arena: Rc::new(Arena::try_new(bytes)?),
      state: Rc::new(AllocState::new(policy.max_elements())),
      _marker: PhantomData,
    })
  }

  pub fn new(policy: Policy) -> Self {
    Self::try_new(policy)
      .unwrap_or_else(|err| panic!("failed to construct arena allocator: {err}"))
  }

  /// Cumulative elements ever granted through this handle's shared budget.
  pub fn allocated(&self) -> usize {
    self.state.allocated.get()
  }

  /// Element ceiling of the shared budget, 0 meaning unlimited.
  pub fn max_elements(&self) -> usize {
    self.state.max_elements
  }

  /// Whether `other` references the same arena, regardless of its element
  /// type.
  pub fn shares_arena_with<U>(&self, other: &ArenaAllocator<U>) -> bool {
    Rc::ptr_eq(&self.arena, &other.arena)
  }
}

impl<T> Default for ArenaAllocator<T> {
  fn default() -> Self {
    Self::new(Policy::default())
  }
}

impl<T> Clone for ArenaAllocator<T> {
  fn clone(&self) -> Self {
    Self {
      arena: Rc::clone(&self.arena),
      state: Rc::clone(&self.state),
      _marker: PhantomData,
    }
  }
}

impl<T> PartialEq for ArenaAllocator<T> {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.arena, &other.arena)
  }
}

impl<T> Eq for ArenaAllocator<T> {}

impl<T> fmt::Debug for ArenaAllocator<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArenaAllocator")
      .field("allocated", &self.allocated())
      .field("max_elements", &self.max_elements())
      .finish()
  }
}

// SAFETY: allocations come from the shared arena, whose blocks stay at
// stable addresses and are freed only when the last handle drops; the
// shared budget makes grants visible to every equal handle.
unsafe impl<T> Allocator<T> for ArenaAllocator<T> {
  type Rebound<U> = ArenaAllocator<U>;

  const PROPAGATE_ON_COPY_ASSIGN: bool = true;
  const PROPAGATE_ON_MOVE_ASSIGN: bool = true;
  const PROPAGATE_ON_SWAP: bool = true;
  const IS_ALWAYS_EQUAL: bool = false;

  fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
    self.state.check(n)?;

    let size = n
      .checked_mul(mem::size_of::<T>())
      .ok_or(AllocError::OutOfMemory {
        size: n.saturating_mul(mem::size_of::<T>()),
      })?;
    let ptr = self.arena.allocate_bytes(size, mem::align_of::<T>())?;

    self.state.commit(n);
    Ok(ptr.cast())
  }

  /// Guaranteed no-op: memory returns to the system only when the arena
  /// itself is destroyed, and the shared budget never shrinks.
  fn deallocate(&self, _ptr: NonNull<T>, _n: usize) {}

  fn rebind<U>(&self) -> ArenaAllocator<U> {
    ArenaAllocator {
      arena: Rc::clone(&self.arena),
      state: Rc::clone(&self.state),
      _marker: PhantomData,
    }
  }
}
