
use crate::LinkedQueue;

/// Replaces, in place, every element matching `predicate` with `mapping` applied to it.
///
/// Elements are visited once, from head to tail. Non-matching elements are left untouched
/// and neither the order nor the length of the queue changes. Returns how many elements
/// were replaced.
pub fn transform_if<T, E, P, F>(queue: &mut LinkedQueue<T, E>, mut predicate: P, mut mapping: F) -> usize
where
  P: FnMut(&T) -> bool,
  F: FnMut(&T) -> T, {
  let mut replaced = 0;
  for value in queue.iter_mut() {
    if predicate(&*value) {
      *value = mapping(&*value);
      replaced += 1;
    }
  }
  replaced
}
