use core::marker::PhantomData;

use crate::{
  allocator::Allocator,
  list::{List, Node},
};

/// Forward iterator over element references.
///
/// Once the end is reached the iterator stays there; further `next`
/// calls keep returning `None`.
pub struct Iter<'a, T> {
  cur: *const Node<T>,
  _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
  pub(super) fn new(head: *const Node<T>) -> Self {
    Self {
      cur: head,
      _marker: PhantomData,
    }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    if self.cur.is_null() {
      return None;
    }
    // SAFETY: cur points to a live node of the borrowed list
    unsafe {
      let node = &*self.cur;
      self.cur = node.next;
      Some(&node.value)
    }
  }
}

impl<T> Clone for Iter<'_, T> {
  fn clone(&self) -> Self {
    Self {
      cur: self.cur,
      _marker: PhantomData,
    }
  }
}

/// Forward iterator over mutable element references.
pub struct IterMut<'a, T> {
  cur: *mut Node<T>,
  _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
  pub(super) fn new(head: *mut Node<T>) -> Self {
    Self {
      cur: head,
      _marker: PhantomData,
    }
  }
}

impl<'a, T> Iterator for IterMut<'a, T> {
  type Item = &'a mut T;

  fn next(&mut self) -> Option<&'a mut T> {
    if self.cur.is_null() {
      return None;
    }
    // SAFETY: cur points to a live node and each node is yielded once
    unsafe {
      let node = &mut *self.cur;
      self.cur = node.next;
      Some(&mut node.value)
    }
  }
}

/// Consuming iterator; drains the list front to back.
pub struct IntoIter<T, A>
where
  A: Allocator<T>,
{
  list: List<T, A>,
}

impl<T, A> IntoIter<T, A>
where
  A: Allocator<T>,
{
  pub(super) fn new(list: List<T, A>) -> Self {
    Self { list }
  }
}

impl<T, A> Iterator for IntoIter<T, A>
where
  A: Allocator<T>,
{
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.list.pop_front()
  }
}
