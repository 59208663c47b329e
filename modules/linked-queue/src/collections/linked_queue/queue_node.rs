use alloc::{
  alloc::{Layout, alloc},
  boxed::Box,
};
use core::ptr::NonNull;

use crate::QueueError;

/// Heap node holding one queue element.
///
/// `next` is the forward link walked on teardown; `prev` is a back-reference only used for
/// tail-side bookkeeping and never followed to release memory.
pub(crate) struct QueueNode<T> {
  pub(crate) value: T,
  pub(crate) next:  Option<NonNull<QueueNode<T>>>,
  pub(crate) prev:  Option<NonNull<QueueNode<T>>>,
}

impl<T> QueueNode<T> {
  /// Layout requested from the global allocator for every node.
  pub(crate) const LAYOUT: Layout = Layout::new::<Self>();

  /// Allocates an unlinked node holding `value`.
  ///
  /// Goes through the global allocator directly so that an exhausted heap is reported
  /// instead of aborting. `value` comes back inside the error when allocation fails.
  pub(crate) fn try_allocate(value: T) -> Result<NonNull<Self>, QueueError<T>> {
    // SAFETY: the layout is never zero-sized because a node always carries two links.
    let raw = unsafe { alloc(Self::LAYOUT) }.cast::<Self>();
    let Some(node) = NonNull::new(raw) else {
      tracing::debug!(target: crate::TRACING_TARGET, size = Self::LAYOUT.size(), "queue node allocation failed");
      return Err(QueueError::AllocError(value));
    };
    // SAFETY: `node` points to freshly allocated memory sized and aligned for `Self`.
    unsafe { node.as_ptr().write(Self { value, next: None, prev: None }) };
    Ok(node)
  }

  /// Releases a node and hands back the value it stored.
  ///
  /// # Safety
  ///
  /// `node` must come from [`QueueNode::try_allocate`], must already be unlinked from every
  /// queue, and must not be used again afterwards.
  pub(crate) unsafe fn release(node: NonNull<Self>) -> T {
    // SAFETY: the node was allocated by the global allocator with `Self::LAYOUT`, which is
    // the layout `Box<Self>` uses, and the caller gives up every other reference to it.
    let boxed = unsafe { Box::from_raw(node.as_ptr()) };
    boxed.value
  }
}
