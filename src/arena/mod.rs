//! Append-only bump-pointer arena.
//!
//! An [`Arena`] owns an ordered sequence of blocks and carves aligned
//! sub-ranges from the tail of the most recent one. When a request does
//! not fit, a new block is appended and the request retried; blocks are
//! never removed, compacted, or reused. Individual allocations are never
//! returned; every pointer stays valid until the arena itself is dropped,
//! which is the only deallocation path.

mod block;


extern crate alloc;

use alloc::vec::Vec;
use core::{
  cell::UnsafeCell,
  cmp,
  ptr::NonNull,
};

use crate::{
  arena::block::Block,
  error::AllocError,
};

#[derive(Debug)]
pub struct Arena {
  /// Interior mutable state; the arena is single-threaded by design.
  inner: UnsafeCell<ArenaInner>,
}

#[derive(Debug)]
struct ArenaInner {
  blocks: Vec<Block>,
  block_size: usize,
}

impl Arena {
  fn inner(&self) -> &ArenaInner {
    // SAFETY: inner is only mutably accessed through inner_mut
    unsafe { &*self.inner.get() }
  }

  fn inner_mut(&self) -> &mut ArenaInner {
    // SAFETY: callers ensure exclusive access
    unsafe { &mut *self.inner.get() }
  }

  /// Creates an arena holding one block of `block_size` bytes; the same
  /// size is used as the default for blocks appended on growth.
  pub fn try_new(block_size: usize) -> Result<Self, AllocError> {
    let mut blocks = Vec::new();
    blocks.push(Block::try_new(block_size)?);

    Ok(Self {
      inner: UnsafeCell::new(ArenaInner { blocks, block_size }),
    })
  }

  pub fn new(block_size: usize) -> Self {
    Self::try_new(block_size)
      .unwrap_or_else(|_| panic!("failed to allocate arena block of {} bytes", block_size))
  }

  /// Bump-allocates `size` bytes aligned to `align`.
  ///
  /// Fails with [`AllocError::BadAlignment`] when `align` is not a power
  /// of two and with [`AllocError::OutOfMemory`] when a new block cannot
  /// be obtained. On misfit a block of `max(block_size, size + align)`
  /// is appended, which makes the retry succeed by construction.
  pub fn allocate_bytes(&self, size: usize, align: usize) -> Result<NonNull<u8>, AllocError> {
    if !align.is_power_of_two() {
      return Err(AllocError::BadAlignment { align });
    }

    let inner = self.inner_mut();
    loop {
      if let Some(block) = inner.blocks.last_mut() {
        if let Some(ptr) = block.carve(size, align) {
          return Ok(ptr);
        }
      }

      let grown = size
        .checked_add(align)
        .ok_or(AllocError::OutOfMemory { size })?;
      inner
        .blocks
        .push(Block::try_new(cmp::max(inner.block_size, grown))?);
    }
  }

  /// Number of blocks appended so far; at least 1.
  pub fn block_count(&self) -> usize {
    self.inner().blocks.len()
  }

  /// Default size in bytes for newly appended blocks.
  pub fn default_block_size(&self) -> usize {
    self.inner().block_size
  }

  /// Bytes consumed across all blocks, including alignment padding.
  pub fn used(&self) -> usize {
    self.inner().blocks.iter().map(|b| b.used()).sum()
  }

  /// Total capacity in bytes across all blocks.
  pub fn capacity(&self) -> usize {
    self.inner().blocks.iter().map(|b| b.capacity()).sum()
  }
}
