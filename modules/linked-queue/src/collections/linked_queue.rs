
mod into_iter;
mod iter;
mod iter_mut;
mod queue_node;

use alloc::{alloc::handle_alloc_error, boxed::Box};
use core::{fmt, marker::PhantomData, mem, ptr::NonNull};

pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
use queue_node::QueueNode;

use crate::{EqualityPredicate, PartialEqPredicate, QueueError, TRACING_TARGET};

/// FIFO queue storing each element in its own heap node.
///
/// Elements are appended at the tail with [`enqueue`](Self::enqueue) and removed from the
/// head with [`dequeue`](Self::dequeue). Nodes are linked in both directions; the forward
/// links own the chain and are the only ones walked when memory is released.
///
/// `E` decides equality for [`search`](Self::search). It defaults to [`PartialEqPredicate`],
/// any `Fn(&T, &T) -> bool` closure works as well.
pub struct LinkedQueue<T, E = PartialEqPredicate> {
  head:     Option<NonNull<QueueNode<T>>>,
  tail:     Option<NonNull<QueueNode<T>>>,
  len:      usize,
  equality: E,
  marker:   PhantomData<Box<QueueNode<T>>>,
}

// SAFETY: the queue exclusively owns its nodes, so moving it to another thread moves the
// elements and the predicate along with it.
unsafe impl<T: Send, E: Send> Send for LinkedQueue<T, E> {}

// SAFETY: shared access only hands out `&T` and `&E`.
unsafe impl<T: Sync, E: Sync> Sync for LinkedQueue<T, E> {}

impl<T, E: Default> LinkedQueue<T, E> {
  /// Creates an empty queue with the default equality predicate.
  #[must_use]
  pub fn new() -> Self {
    Self::with_equality(E::default())
  }

  /// Builds a queue by enqueuing every item of `iter` in iteration order.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] carrying the item that could not be stored when a node
  /// cannot be allocated. The nodes created before the failure are released before returning.
  pub fn try_from_iter<I>(iter: I) -> Result<Self, QueueError<T>>
  where
    I: IntoIterator,
    I::Item: Into<T>, {
    Self::try_from_iter_with(iter, E::default())
  }
}

impl<T, E> LinkedQueue<T, E> {
  /// Creates an empty queue that compares elements with `equality`.
  #[must_use]
  pub const fn with_equality(equality: E) -> Self {
    Self { head: None, tail: None, len: 0, equality, marker: PhantomData }
  }

  /// Builds a queue that compares elements with `equality` from the items of `iter`.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] carrying the item that could not be stored when a node
  /// cannot be allocated. The nodes created before the failure are released before returning.
  pub fn try_from_iter_with<I>(iter: I, equality: E) -> Result<Self, QueueError<T>>
  where
    I: IntoIterator,
    I::Item: Into<T>, {
    let mut queue = Self::with_equality(equality);
    for item in iter {
      if let Err(error) = queue.enqueue(item.into()) {
        tracing::debug!(target: TRACING_TARGET, built = queue.len, "releasing partially built queue");
        return Err(error);
      }
    }
    Ok(queue)
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` when the queue holds no elements.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the equality predicate used by [`search`](Self::search).
  #[must_use]
  pub const fn equality(&self) -> &E {
    &self.equality
  }

  /// Appends `value` behind the current tail.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] holding `value` when the node cannot be allocated. The
  /// queue is left untouched.
  pub fn enqueue(&mut self, value: T) -> Result<(), QueueError<T>> {
    let node = QueueNode::try_allocate(value)?;
    self.link_back(node);
    Ok(())
  }

  /// Removes the head element and returns it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to remove.
  pub fn dequeue(&mut self) -> Result<T, QueueError<T>> {
    self.pop_front_value().ok_or(QueueError::Empty)
  }

  /// Drops every element, leaving the queue empty.
  pub fn clear(&mut self) {
    let released = self.len;
    while self.pop_front_value().is_some() {}
    tracing::trace!(target: TRACING_TARGET, released, "queue cleared");
  }

  /// Returns a reference to the head element, if any.
  #[must_use]
  pub fn peek_head(&self) -> Option<&T> {
    // SAFETY: `head` points to a live node owned by this queue; the borrow of `self` keeps it
    // alive and unmodified.
    self.head.map(|node| unsafe { &node.as_ref().value })
  }

  /// Returns a reference to the tail element, if any.
  #[must_use]
  pub fn peek_tail(&self) -> Option<&T> {
    // SAFETY: same as `peek_head`, for the tail node.
    self.tail.map(|node| unsafe { &node.as_ref().value })
  }

  /// Returns a copy of the head element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn head(&self) -> Result<T, QueueError<T>>
  where
    T: Clone, {
    self.peek_head().cloned().ok_or(QueueError::Empty)
  }

  /// Returns a copy of the tail element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn tail(&self) -> Result<T, QueueError<T>>
  where
    T: Clone, {
    self.peek_tail().cloned().ok_or(QueueError::Empty)
  }

  /// Overwrites the head element in place.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Vacant`] holding `value` when the queue holds no elements.
  pub fn set_head(&mut self, value: T) -> Result<(), QueueError<T>> {
    let Some(mut node) = self.head else {
      return Err(QueueError::Vacant(value));
    };
    // SAFETY: `head` is a live node owned by this queue and `&mut self` rules out other borrows.
    unsafe { node.as_mut().value = value };
    Ok(())
  }

  /// Overwrites the tail element in place.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Vacant`] holding `value` when the queue holds no elements.
  pub fn set_tail(&mut self, value: T) -> Result<(), QueueError<T>> {
    let Some(mut node) = self.tail else {
      return Err(QueueError::Vacant(value));
    };
    // SAFETY: `tail` is a live node owned by this queue and `&mut self` rules out other borrows.
    unsafe { node.as_mut().value = value };
    Ok(())
  }

  /// Returns `true` if any element matches `value` according to the equality predicate.
  ///
  /// Elements are visited from head to tail and the scan stops at the first match.
  #[must_use]
  pub fn search(&self, value: &T) -> bool
  where
    E: EqualityPredicate<T>, {
    self.iter().any(|stored| self.equality.equals(stored, value))
  }

  /// Returns an iterator over shared references, from head to tail.
  #[must_use]
  pub const fn iter(&self) -> Iter<'_, T> {
    Iter::new(self.head, self.len)
  }

  /// Returns an iterator over mutable references, from head to tail.
  ///
  /// Writes through the yielded references update the stored elements in place.
  #[must_use]
  pub const fn iter_mut(&mut self) -> IterMut<'_, T> {
    IterMut::new(self.head, self.len)
  }

  /// Replaces the contents of `self` with a deep copy of `other`.
  ///
  /// The copy is built completely before the current nodes are touched, then adopted in one
  /// step. `self` keeps its own equality predicate.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] with the clone that could not be stored when a node of
  /// the copy cannot be allocated. In that case `self` is left exactly as it was.
  pub fn assign_from<F>(&mut self, other: &LinkedQueue<T, F>) -> Result<(), QueueError<T>>
  where
    T: Clone, {
    let mut replacement = other.try_copy_with(())?;
    mem::swap(&mut self.head, &mut replacement.head);
    mem::swap(&mut self.tail, &mut replacement.tail);
    mem::swap(&mut self.len, &mut replacement.len);
    tracing::trace!(target: TRACING_TARGET, len = self.len, replaced = replacement.len, "queue adopted copied chain");
    Ok(())
  }

  /// Returns an independent deep copy of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] with the clone that could not be stored when a node of
  /// the copy cannot be allocated. The partial copy is released and `self` is not modified.
  pub fn try_clone(&self) -> Result<Self, QueueError<T>>
  where
    T: Clone,
    E: Clone, {
    self.try_copy_with(self.equality.clone())
  }

  fn try_copy_with<F>(&self, equality: F) -> Result<LinkedQueue<T, F>, QueueError<T>>
  where
    T: Clone, {
    let mut copy = LinkedQueue::with_equality(equality);
    for value in self.iter() {
      if let Err(error) = copy.enqueue(value.clone()) {
        tracing::debug!(target: TRACING_TARGET, copied = copy.len, source = self.len, "rolling back queue copy");
        return Err(error);
      }
    }
    Ok(copy)
  }

  fn enqueue_or_abort(&mut self, value: T) {
    if self.enqueue(value).is_err() {
      handle_alloc_error(QueueNode::<T>::LAYOUT);
    }
  }

  fn link_back(&mut self, mut node: NonNull<QueueNode<T>>) {
    // SAFETY: `node` is freshly allocated and not linked anywhere; `tail`, when present, is a
    // live node owned by this queue.
    unsafe {
      node.as_mut().prev = self.tail;
      match self.tail {
        | Some(mut tail) => tail.as_mut().next = Some(node),
        | None => self.head = Some(node),
      }
    }
    self.tail = Some(node);
    self.len += 1;
  }

  fn unlink_front(&mut self) -> Option<NonNull<QueueNode<T>>> {
    let node = self.head?;
    // SAFETY: `head` is a live node owned by this queue, and so is its successor.
    unsafe {
      let next = node.as_ref().next;
      match next {
        | Some(mut successor) => successor.as_mut().prev = None,
        | None => self.tail = None,
      }
      self.head = next;
    }
    self.len -= 1;
    Some(node)
  }

  pub(crate) fn pop_front_value(&mut self) -> Option<T> {
    // SAFETY: the node has just been unlinked and nothing else refers to it.
    self.unlink_front().map(|node| unsafe { QueueNode::release(node) })
  }
}

impl<T, E> Drop for LinkedQueue<T, E> {
  fn drop(&mut self) {
    struct DropGuard<'a, T, E>(&'a mut LinkedQueue<T, E>);

    impl<T, E> Drop for DropGuard<'_, T, E> {
      fn drop(&mut self) {
        // Only reached when an element destructor panicked; keep releasing the rest.
        while self.0.pop_front_value().is_some() {}
      }
    }

    while let Some(node) = self.unlink_front() {
      let guard = DropGuard(self);
      // SAFETY: the node has just been unlinked and nothing else refers to it.
      drop(unsafe { QueueNode::release(node) });
      mem::forget(guard);
    }
  }
}

impl<T, E: Default> Default for LinkedQueue<T, E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone, E: Clone> Clone for LinkedQueue<T, E> {
  fn clone(&self) -> Self {
    match self.try_clone() {
      | Ok(copy) => copy,
      | Err(_) => handle_alloc_error(QueueNode::<T>::LAYOUT),
    }
  }

  fn clone_from(&mut self, source: &Self) {
    if self.assign_from(source).is_err() {
      handle_alloc_error(QueueNode::<T>::LAYOUT);
    }
    self.equality.clone_from(&source.equality);
  }
}

impl<T, E, A> FromIterator<A> for LinkedQueue<T, E>
where
  E: Default,
  A: Into<T>,
{
  fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
    let mut queue = Self::new();
    queue.extend(iter);
    queue
  }
}

impl<T, E, A> Extend<A> for LinkedQueue<T, E>
where
  A: Into<T>,
{
  fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
    for item in iter {
      self.enqueue_or_abort(item.into());
    }
  }
}

impl<T, E> IntoIterator for LinkedQueue<T, E> {
  type IntoIter = IntoIter<T, E>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self)
  }
}

impl<'a, T, E> IntoIterator for &'a LinkedQueue<T, E> {
  type IntoIter = Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T, E> IntoIterator for &'a mut LinkedQueue<T, E> {
  type IntoIter = IterMut<'a, T>;
  type Item = &'a mut T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

impl<T: PartialEq, E, F> PartialEq<LinkedQueue<T, F>> for LinkedQueue<T, E> {
  fn eq(&self, other: &LinkedQueue<T, F>) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<T: Eq, E> Eq for LinkedQueue<T, E> {}

impl<T: fmt::Debug, E> fmt::Debug for LinkedQueue<T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: fmt::Display, E> fmt::Display for LinkedQueue<T, E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut values = self.iter();
    if let Some(first) = values.next() {
      write!(f, "{first}")?;
      for value in values {
        write!(f, " {value}")?;
      }
    }
    Ok(())
  }
}
