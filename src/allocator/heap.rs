extern crate alloc;

use alloc::alloc::{
  Layout,
  alloc,
  dealloc,
};
use core::{
  fmt,
  marker::PhantomData,
  ptr::NonNull,
};

use crate::{
  allocator::Allocator,
  error::AllocError,
};

/// Stateless handle to the global heap.
///
/// The default allocator for [`List`](crate::List). Unlike the arena
/// handle its `deallocate` really frees, and every two `Heap` handles are
/// interchangeable.
pub struct Heap<T> {
  _marker: PhantomData<T>,
}

impl<T> Heap<T> {
  pub fn new() -> Self {
    Self {
      _marker: PhantomData,
    }
  }
}

impl<T> Default for Heap<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for Heap<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for Heap<T> {}

impl<T> PartialEq for Heap<T> {
  fn eq(&self, _other: &Self) -> bool {
    true
  }
}

impl<T> Eq for Heap<T> {}

impl<T> fmt::Debug for Heap<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Heap")
  }
}

// SAFETY: memory comes straight from the global allocator with the array
// layout of T and is released with the same layout.
unsafe impl<T> Allocator<T> for Heap<T> {
  type Rebound<U> = Heap<U>;

  const PROPAGATE_ON_COPY_ASSIGN: bool = true;
  const PROPAGATE_ON_MOVE_ASSIGN: bool = true;
  const PROPAGATE_ON_SWAP: bool = true;
  const IS_ALWAYS_EQUAL: bool = true;

  fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
    let layout = Layout::array::<T>(n).map_err(|_| AllocError::OutOfMemory {
      size: n.saturating_mul(size_of::<T>()),
    })?;
    if layout.size() == 0 {
      return Ok(NonNull::dangling());
    }

    // SAFETY: layout has non-zero size
    let raw = unsafe { alloc(layout) };
    NonNull::new(raw.cast()).ok_or(AllocError::OutOfMemory {
      size: layout.size(),
    })
  }

  fn deallocate(&self, ptr: NonNull<T>, n: usize) {
    match Layout::array::<T>(n) {
      Ok(layout) if layout.size() > 0 => {
        // SAFETY: ptr was produced by allocate with the same layout
        unsafe { dealloc(ptr.as_ptr().cast(), layout) };
      }
      _ => {}
    }
  }

  fn rebind<U>(&self) -> Heap<U> {
    Heap::new()
  }
}
