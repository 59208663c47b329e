use core::{fmt, iter::FusedIterator};

use super::LinkedQueue;

/// Owning iterator that drains a [`LinkedQueue`](crate::LinkedQueue) from head to tail.
pub struct IntoIter<T, E> {
  queue: LinkedQueue<T, E>,
}

impl<T, E> IntoIter<T, E> {
  pub(crate) const fn new(queue: LinkedQueue<T, E>) -> Self {
    Self { queue }
  }
}

impl<T, E> Iterator for IntoIter<T, E> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.queue.pop_front_value()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.queue.len(), Some(self.queue.len()))
  }
}

impl<T, E> ExactSizeIterator for IntoIter<T, E> {}

impl<T, E> FusedIterator for IntoIter<T, E> {}

impl<T: fmt::Debug, E> fmt::Debug for IntoIter<T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IntoIter").field(&self.queue).finish()
  }
}
