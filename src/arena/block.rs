extern crate alloc;

use alloc::alloc::{
  Layout,
  alloc,
  dealloc,
};
use core::ptr::NonNull;

use getset::CopyGetters;

use crate::error::AllocError;

/// One contiguous owned buffer inside an [`Arena`](crate::Arena).
///
/// The buffer address is stable for the block's entire lifetime; `used`
/// only ever grows and never exceeds `capacity`. The buffer is freed
/// when the block is dropped, which only happens when the owning arena
/// is destroyed.
#[derive(Debug, CopyGetters)]
pub(crate) struct Block {
  buf: NonNull<u8>,
  #[getset(get_copy = "pub(crate)")]
  capacity: usize,
  #[getset(get_copy = "pub(crate)")]
  used: usize,
}

impl Block {
  pub(crate) fn try_new(capacity: usize) -> Result<Self, AllocError> {
    // Zero-sized heap allocations are not representable in Rust.
    let capacity = capacity.max(1);
    let layout = Layout::from_size_align(capacity, 1)
      .map_err(|_| AllocError::OutOfMemory { size: capacity })?;
    // SAFETY: layout has non-zero size
    let raw = unsafe { alloc(layout) };
    let buf = NonNull::new(raw).ok_or(AllocError::OutOfMemory { size: capacity })?;

    Ok(Self {
      buf,
      capacity,
      used: 0,
    })
  }

  /// Carves `size` bytes aligned to `align` from the unused tail, or
  /// returns `None` when the aligned region does not fit.
  ///
  /// `align` must already be validated as a power of two.
  pub(crate) fn carve(&mut self, size: usize, align: usize) -> Option<NonNull<u8>> {
    let base = self.buf.as_ptr() as usize;
    let tail = base + self.used;
    let aligned = tail.checked_add(align - 1)? & !(align - 1);
    let end = aligned.checked_add(size)?;

    if end > base + self.capacity {
      return None;
    }

    self.used = end - base;
    // SAFETY: aligned lies within the live buffer
    Some(unsafe { NonNull::new_unchecked(aligned as *mut u8) })
  }
}

impl Drop for Block {
  fn drop(&mut self) {
    // SAFETY: the layout was validated when the block was created and the
    // buffer has not been freed before
    unsafe {
      let layout = Layout::from_size_align_unchecked(self.capacity, 1);
      dealloc(self.buf.as_ptr(), layout);
    }
  }
}
