#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::manual_assert)]
#![cfg_attr(not(test), no_std)]

//! Doubly-linked FIFO queue for fraktor.
//!
//! [`LinkedQueue`] keeps its elements in individually allocated nodes linked in insertion
//! order. Values enter at the tail and leave from the head, the front and back elements can be
//! inspected and overwritten in place, and membership is decided by a pluggable
//! [`EqualityPredicate`] instead of a fixed `PartialEq` bound.
//!
//! Node allocation is fallible: running out of memory surfaces as [`QueueError::AllocError`],
//! which hands back the element that could not be stored. Every multi-step operation (deep
//! copy, assignment, construction from an iterator) releases the nodes it already built before
//! reporting the failure.
//!
//! ```
//! use fraktor_linked_queue_rs::{LinkedQueue, transform_if};
//!
//! let mut queue: LinkedQueue<i32> = LinkedQueue::try_from_iter([23, 15, 9, 17]).unwrap();
//! let doubled = transform_if(&mut queue, |value| *value > 10 && *value < 20, |value| value * 2);
//!
//! assert_eq!(doubled, 2);
//! assert_eq!(queue.to_string(), "23 30 9 34");
//! assert_eq!(queue.dequeue(), Ok(23));
//! ```

extern crate alloc;

mod collections;

pub use collections::{
  EqualityPredicate, IntoIter, Iter, IterMut, LinkedQueue, PartialEqPredicate, QueueError, transform_if,
};

/// Target used by every `tracing` event emitted from this crate.
pub const TRACING_TARGET: &str = "fraktor::linked_queue";
