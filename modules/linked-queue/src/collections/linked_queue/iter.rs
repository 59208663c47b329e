use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::queue_node::QueueNode;

/// Borrowing iterator over a [`LinkedQueue`](crate::LinkedQueue), from head to tail.
///
/// Obtained from [`LinkedQueue::iter`](crate::LinkedQueue::iter); yields `None` once it
/// moves past the tail.
pub struct Iter<'a, T> {
  current:   Option<NonNull<QueueNode<T>>>,
  remaining: usize,
  marker:    PhantomData<&'a QueueNode<T>>,
}

impl<T> Iter<'_, T> {
  pub(crate) const fn new(current: Option<NonNull<QueueNode<T>>>, remaining: usize) -> Self {
    Self { current, remaining, marker: PhantomData }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.current?;
    // SAFETY: the iterator borrows the queue for `'a`, so every node reachable from the head
    // stays alive and unmodified for that long.
    let node = unsafe { node.as_ref() };
    self.current = node.next;
    self.remaining -= 1;
    Some(&node.value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
  fn clone(&self) -> Self {
    Self::new(self.current, self.remaining)
  }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let remaining: Vec<&T> = self.clone().collect();
    f.debug_tuple("Iter").field(&remaining).finish()
  }
}

// SAFETY: the iterator only hands out `&T`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}

// SAFETY: the iterator only hands out `&T`.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
