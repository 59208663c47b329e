
/// Errors reported by [`LinkedQueue`](crate::LinkedQueue) operations.
///
/// Variants raised by operations that take an element by value carry it back, so a failed call
/// never consumes the caller's value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError<T> {
  /// The operation needs at least one element but the queue holds none.
  #[error("queue is empty")]
  Empty,
  /// The queue holds no element to overwrite. Contains the value that was to be written.
  #[error("queue is empty, no element to overwrite")]
  Vacant(T),
  /// Storage for a new node could not be obtained from the allocator. Contains the element
  /// that was to be stored in it.
  #[error("failed to allocate a queue node")]
  AllocError(T),
}

impl<T> QueueError<T> {
  /// Returns `true` when the error reports an empty queue.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    matches!(self, Self::Empty | Self::Vacant(_))
  }

  /// Returns `true` when the error reports an allocation failure.
  #[must_use]
  pub const fn is_alloc_error(&self) -> bool {
    matches!(self, Self::AllocError(_))
  }

  /// Extracts the element carried by variants that hand the caller's value back.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Vacant(item) | Self::AllocError(item) => Some(item),
      | Self::Empty => None,
    }
  }
}
