//! Queue collection built from linked heap nodes.

mod equality_predicate;
mod linked_queue;
mod partial_eq_predicate;
mod queue_error;
mod transform_if;

pub use equality_predicate::EqualityPredicate;
pub use linked_queue::{IntoIter, Iter, IterMut, LinkedQueue};
pub use partial_eq_predicate::PartialEqPredicate;
pub use queue_error::QueueError;
pub use transform_if::transform_if;
