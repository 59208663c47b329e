use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{Iter, queue_node::QueueNode};

/// Mutable iterator over a [`LinkedQueue`](crate::LinkedQueue), from head to tail.
///
/// The yielded references point into the queue's nodes, so assignments through them change
/// the stored elements.
pub struct IterMut<'a, T> {
  current:   Option<NonNull<QueueNode<T>>>,
  remaining: usize,
  marker:    PhantomData<&'a mut QueueNode<T>>,
}

impl<T> IterMut<'_, T> {
  pub(crate) const fn new(current: Option<NonNull<QueueNode<T>>>, remaining: usize) -> Self {
    Self { current, remaining, marker: PhantomData }
  }
}

impl<'a, T> Iterator for IterMut<'a, T> {
  type Item = &'a mut T;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.current?;
    // SAFETY: the iterator holds the queue's unique borrow for `'a` and visits every node at
    // most once, so the returned references never alias. Only the `value` field is borrowed
    // mutably; `next` is read before that borrow is created.
    unsafe {
      self.current = (*node.as_ptr()).next;
      self.remaining -= 1;
      Some(&mut (*node.as_ptr()).value)
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Shared view of the nodes not yet yielded; `&self` keeps `next` from running meanwhile.
    let remaining: Vec<&T> = Iter::new(self.current, self.remaining).collect();
    f.debug_tuple("IterMut").field(&remaining).finish()
  }
}

// SAFETY: the iterator behaves like `&mut T` for every element it yields.
unsafe impl<T: Send> Send for IterMut<'_, T> {}

// SAFETY: the iterator behaves like `&mut T` for every element it yields.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
