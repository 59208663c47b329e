
use super::EqualityPredicate;

/// Equality predicate that compares elements with their `PartialEq` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PartialEqPredicate;

impl<T: PartialEq> EqualityPredicate<T> for PartialEqPredicate {
  fn equals(&self, stored: &T, candidate: &T) -> bool {
    stored == candidate
  }
}
