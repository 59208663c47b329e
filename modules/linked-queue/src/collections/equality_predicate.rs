/// Decides whether two elements are considered equal when a queue is searched.
///
/// The queue never compares elements on its own; [`LinkedQueue::search`](crate::LinkedQueue::search)
/// delegates every comparison to the predicate the queue was built with. Any
/// `Fn(&T, &T) -> bool` closure is a predicate, and [`PartialEqPredicate`](crate::PartialEqPredicate)
/// falls back to `PartialEq`.
pub trait EqualityPredicate<T> {
  /// Returns `true` when `stored` matches the `candidate` value.
  fn equals(&self, stored: &T, candidate: &T) -> bool;
}

impl<T, F> EqualityPredicate<T> for F
where
  F: Fn(&T, &T) -> bool,
{
  fn equals(&self, stored: &T, candidate: &T) -> bool {
    self(stored, candidate)
  }
}
