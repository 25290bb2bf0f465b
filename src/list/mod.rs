//! Allocator-aware singly linked list.
//!
//! [`List`] owns its elements in nodes whose storage comes exclusively
//! from an [`Allocator`] handle, rebound to the node type. Copying,
//! moving, and swapping consult the allocator's propagation capabilities
//! and identity-based equality instead of assuming anything about the
//! handle, which is what lets a fixed arena budget span several lists.

mod iter;


pub use iter::{IntoIter, Iter, IterMut};

use core::{
  fmt,
  mem,
  ptr::{
    self,
    NonNull,
  },
};

use crate::{
  allocator::{Allocator, Heap},
  error::AllocError,
};

/// Storage record for one element: the value plus a forward link.
///
/// Lists allocate `Node`s, not bare elements, which is why the element
/// allocator is rebound to this type. The fields are never exposed.
pub struct Node<T> {
  value: T,
  next: *mut Node<T>,
}

type NodeAlloc<T, A> = <A as Allocator<T>>::Rebound<Node<T>>;

/// Singly linked list storing its nodes through an allocator handle.
///
/// Forward iteration only; constant-time insertion at both ends and
/// removal at the front. The end of the list is a null link rather than a
/// self-referencing sentinel node: `head` and `tail` are null exactly when
/// the list is empty, and the last node's link is null otherwise.
///
/// Raw node links make the type single-threaded (`!Send`, `!Sync`), in
/// line with the allocators feeding it.
pub struct List<T, A = Heap<T>>
where
  A: Allocator<T>,
{
  alloc: NodeAlloc<T, A>,
  head: *mut Node<T>,
  tail: *mut Node<T>,
  len: usize,
}

impl<T> List<T, Heap<T>> {
  /// Empty list backed by the global heap.
  pub fn new() -> Self {
    Self::new_in(Heap::new())
  }
}

impl<T> Default for List<T, Heap<T>> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T, A> List<T, A>
where
  A: Allocator<T>,
{
  /// Empty list whose nodes will come from `alloc`.
  pub fn new_in(alloc: A) -> Self {
    Self::with_node_alloc(alloc.rebind::<Node<T>>())
  }

  fn with_node_alloc(alloc: NodeAlloc<T, A>) -> Self {
    Self {
      alloc,
      head: ptr::null_mut(),
      tail: ptr::null_mut(),
      len: 0,
    }
  }

  /// The node-typed allocator handle this list allocates through.
  pub fn allocator(&self) -> &NodeAlloc<T, A> {
    &self.alloc
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.head.is_null()
  }

  fn new_node(&mut self, value: T) -> Result<NonNull<Node<T>>, AllocError> {
    let node = self.alloc.allocate(1)?;
    // SAFETY: allocate returned storage for one node
    unsafe {
      node.as_ptr().write(Node {
        value,
        next: ptr::null_mut(),
      });
    }
    Ok(node)
  }

  /// Inserts at the front; on failure the list is left exactly as it was.
  pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
    let node = self.new_node(value)?;
    // SAFETY: node is freshly allocated and uniquely owned
    unsafe {
      (*node.as_ptr()).next = self.head;
    }
    self.head = node.as_ptr();
    if self.tail.is_null() {
      self.tail = node.as_ptr();
    }
    self.len += 1;
    Ok(())
  }

  pub fn push_front(&mut self, value: T) {
    self
      .try_push_front(value)
      .unwrap_or_else(|err| panic!("failed to push list node: {err}"))
  }

  /// Inserts at the back; on failure the list is left exactly as it was.
  pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
    let node = self.new_node(value)?;
    if self.tail.is_null() {
      self.head = node.as_ptr();
    } else {
      // SAFETY: tail points to the live last node
      unsafe {
        (*self.tail).next = node.as_ptr();
      }
    }
    self.tail = node.as_ptr();
    self.len += 1;
    Ok(())
  }

  pub fn push_back(&mut self, value: T) {
    self
      .try_push_back(value)
      .unwrap_or_else(|err| panic!("failed to push list node: {err}"))
  }

  /// Removes and returns the front element, or `None` when empty.
  pub fn pop_front(&mut self) -> Option<T> {
    if self.head.is_null() {
      return None;
    }

    let node = self.head;
    // SAFETY: head points to a live node owned by this list
    unsafe {
      self.head = (*node).next;
      if self.head.is_null() {
        self.tail = ptr::null_mut();
      }
      let value = ptr::read(&(*node).value);
      self.alloc.deallocate(NonNull::new_unchecked(node), 1);
      self.len -= 1;
      Some(value)
    }
  }

  /// Removes every element, releasing each node through the allocator.
  pub fn clear(&mut self) {
    while self.pop_front().is_some() {}
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self.head)
  }

  pub fn iter_mut(&mut self) -> IterMut<'_, T> {
    IterMut::new(self.head)
  }

  /// Move-assignment: takes `other`'s contents, consulting the
  /// allocator's move-propagation capability first.
  ///
  /// With propagation, or whenever the two allocators compare equal, the
  /// transfer is an O(1) pointer steal and `other` is reset to canonical
  /// empty. Otherwise every element is moved one by one through this
  /// list's own allocator; an allocation failure mid-move keeps the
  /// elements moved so far, drops the element in flight, and leaves the
  /// rest in `other`.
  pub fn try_take_from(&mut self, other: &mut Self) -> Result<(), AllocError> {
    self.clear();
    if <NodeAlloc<T, A> as Allocator<Node<T>>>::PROPAGATE_ON_MOVE_ASSIGN {
      self.alloc = other.alloc.clone();
    }

    if self.alloc == other.alloc {
      self.head = other.head;
      self.tail = other.tail;
      self.len = other.len;
      other.head = ptr::null_mut();
      other.tail = ptr::null_mut();
      other.len = 0;
      return Ok(());
    }

    while let Some(value) = other.pop_front() {
      self.try_push_back(value)?;
    }
    Ok(())
  }

  pub fn take_from(&mut self, other: &mut Self) {
    self
      .try_take_from(other)
      .unwrap_or_else(|err| panic!("failed to move list contents: {err}"))
  }

  /// Copy-assignment: replaces this list's contents with clones of
  /// `other`'s, consulting the allocator's copy-propagation capability.
  ///
  /// With propagation the destination adopts `other`'s allocator before
  /// copying; with equal allocators the copy happens in place; otherwise
  /// a temporary list is built with `other`'s copy-selected allocator and
  /// exchanged in, so a failure leaves this list untouched.
  pub fn try_assign_from(&mut self, other: &Self) -> Result<(), AllocError>
  where
    T: Clone,
  {
    if <NodeAlloc<T, A> as Allocator<Node<T>>>::PROPAGATE_ON_COPY_ASSIGN {
      self.clear();
      self.alloc = other.alloc.clone();
      self.extend_cloned(other)
    } else if self.alloc == other.alloc {
      self.clear();
      self.extend_cloned(other)
    } else {
      let mut fresh = Self::with_node_alloc(other.alloc.select_on_copy());
      fresh.extend_cloned(other)?;
      mem::swap(self, &mut fresh);
      Ok(())
    }
  }

  pub fn assign_from(&mut self, other: &Self)
  where
    T: Clone,
  {
    self
      .try_assign_from(other)
      .unwrap_or_else(|err| panic!("failed to copy list contents: {err}"))
  }

  /// Exchanges contents and allocators with `other` in O(1).
  ///
  /// # Panics
  ///
  /// Swapping lists whose allocators are unequal and non-propagating
  /// would split node ownership from the handle that allocated it, so it
  /// fails fast instead.
  pub fn swap_with(&mut self, other: &mut Self) {
    if <NodeAlloc<T, A> as Allocator<Node<T>>>::PROPAGATE_ON_SWAP || self.alloc == other.alloc {
      mem::swap(self, other);
    } else {
      panic!("cannot swap lists whose allocators are unequal and non-propagating");
    }
  }

  fn extend_cloned(&mut self, other: &Self) -> Result<(), AllocError>
  where
    T: Clone,
  {
    for value in other.iter() {
      self.try_push_back(value.clone())?;
    }
    Ok(())
  }
}

impl<T, A> Drop for List<T, A>
where
  A: Allocator<T>,
{
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T, A> Clone for List<T, A>
where
  T: Clone,
  A: Allocator<T>,
{
  /// Copy construction: the allocator comes from the source's
  /// copy-selection rule, the elements from an element-wise copy. The
  /// clone owns its own nodes even when the handles share an arena.
  fn clone(&self) -> Self {
    let mut cloned = Self::with_node_alloc(self.alloc.select_on_copy());
    for value in self.iter() {
      cloned.push_back(value.clone());
    }
    cloned
  }
}

impl<T, A> PartialEq for List<T, A>
where
  T: PartialEq,
  A: Allocator<T>,
{
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<T, A> Eq for List<T, A>
where
  T: Eq,
  A: Allocator<T>,
{
}

impl<T, A> fmt::Debug for List<T, A>
where
  T: fmt::Debug,
  A: Allocator<T>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T, A> Extend<T> for List<T, A>
where
  A: Allocator<T>,
{
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.push_back(value);
    }
  }
}

impl<T> FromIterator<T> for List<T, Heap<T>> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<'a, T, A> IntoIterator for &'a List<T, A>
where
  A: Allocator<T>,
{
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<'a, T, A> IntoIterator for &'a mut List<T, A>
where
  A: Allocator<T>,
{
  type Item = &'a mut T;
  type IntoIter = IterMut<'a, T>;

  fn into_iter(self) -> IterMut<'a, T> {
    self.iter_mut()
  }
}

impl<T, A> IntoIterator for List<T, A>
where
  A: Allocator<T>,
{
  type Item = T;
  type IntoIter = IntoIter<T, A>;

  fn into_iter(self) -> IntoIter<T, A> {
    IntoIter::new(self)
  }
}
