use std::fmt;

use fraktor_linked_queue_rs::{EqualityPredicate, LinkedQueue, QueueError, transform_if};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Point {
  x: i32,
  y: i32,
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({},{})", self.x, self.y)
  }
}

#[derive(Clone, Copy, Default)]
struct SameCoordinates;

impl EqualityPredicate<Point> for SameCoordinates {
  fn equals(&self, stored: &Point, candidate: &Point) -> bool {
    stored.x == candidate.x && stored.y == candidate.y
  }
}

#[derive(Clone, Copy, Default)]
struct SameLength;

impl EqualityPredicate<String> for SameLength {
  fn equals(&self, stored: &String, candidate: &String) -> bool {
    stored.len() == candidate.len()
  }
}

const SAMPLE: [i32; 7] = [5, 15, 10, 27, 34, 2, 9];

fn sample_queue() -> LinkedQueue<i32> {
  let mut queue = LinkedQueue::new();
  for value in SAMPLE {
    queue.enqueue(value).unwrap();
  }
  queue
}

fn values(queue: &LinkedQueue<i32>) -> Vec<i32> {
  queue.iter().copied().collect()
}

#[test]
fn enqueue_preserves_insertion_order() {
  let queue = sample_queue();
  assert_eq!(queue.len(), 7);
  assert_eq!(values(&queue), SAMPLE.to_vec());
}

#[test]
fn dequeue_returns_oldest_element() {
  let mut queue = sample_queue();

  assert_eq!(queue.dequeue(), Ok(5));
  assert_eq!(queue.len(), 6);
  assert_eq!(values(&queue), SAMPLE[1..].to_vec());
}

#[test]
fn empty_queue_rejects_element_access() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::new();

  assert_eq!(queue.dequeue(), Err(QueueError::Empty));
  assert_eq!(queue.head(), Err(QueueError::Empty));
  assert_eq!(queue.tail(), Err(QueueError::Empty));
  assert_eq!(queue.set_head(1), Err(QueueError::Vacant(1)));
  assert_eq!(queue.set_tail(2), Err(QueueError::Vacant(2)));
  assert_eq!(queue.len(), 0);
}

#[test]
fn copies_are_independent_of_the_original() {
  let original = sample_queue();
  let mut copy = original.clone();
  let mut assigned: LinkedQueue<i32> = LinkedQueue::new();
  assigned.assign_from(&original).unwrap();

  assert_eq!(copy.len(), original.len());
  assert_eq!(copy, original);
  assert_eq!(assigned, original);

  copy.enqueue(100).unwrap();
  copy.dequeue().unwrap();
  copy.set_head(70).unwrap();
  assigned.clear();

  assert_eq!(values(&original), SAMPLE.to_vec());
  assert_eq!(values(&copy), vec![70, 10, 27, 34, 2, 9, 100]);
}

#[test]
fn search_uses_the_equality_predicate() {
  let queue = sample_queue();
  assert!(queue.search(&15));
  assert!(!queue.search(&99));
  assert!(!LinkedQueue::<i32>::default().search(&15));
}

#[test]
fn search_with_closure_predicate() {
  let within_one = |stored: &i32, candidate: &i32| (stored - candidate).abs() <= 1;
  let queue: LinkedQueue<i32, _> = LinkedQueue::try_from_iter_with(SAMPLE, within_one).unwrap();
  assert!(queue.search(&26));
  assert!(!queue.search(&20));
}

#[test]
fn set_head_and_tail_touch_only_the_ends() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::try_from_iter([20, 15, 10, 17, 25, 30, 23]).unwrap();

  queue.set_head(70).unwrap();
  assert_eq!(queue.head(), Ok(70));
  assert_eq!(queue.tail(), Ok(23));

  queue.set_tail(50).unwrap();
  assert_eq!(values(&queue), vec![70, 15, 10, 17, 25, 30, 50]);
  assert_eq!(queue.len(), 7);
  assert_eq!(queue.to_string(), "70 15 10 17 25 30 50");

  queue.dequeue().unwrap();
  queue.enqueue(100).unwrap();
  assert_eq!(queue.to_string(), "15 10 17 25 30 50 100");
}

#[test]
fn transform_if_doubles_matches_in_place() {
  let mut queue: LinkedQueue<i32> = LinkedQueue::try_from_iter([23, 15, 9, 17, 16, 21, 19]).unwrap();

  transform_if(&mut queue, |value| *value > 10 && *value < 20, |value| 2 * value);

  assert_eq!(values(&queue), vec![23, 30, 9, 34, 32, 21, 38]);
}

#[test]
fn range_construction_keeps_sequence_order() {
  let source = [5_i16, 15, 10, 27, 34, 2, 9];
  let queue: LinkedQueue<i32> = LinkedQueue::try_from_iter(source).unwrap();
  assert_eq!(queue.len(), 7);
  assert_eq!(values(&queue), SAMPLE.to_vec());

  let collected: LinkedQueue<i32> = SAMPLE.iter().copied().collect();
  assert_eq!(collected, queue);
}

#[test]
fn clear_is_idempotent() {
  let mut queue = sample_queue();
  queue.clear();
  assert_eq!(queue.len(), 0);
  queue.clear();
  assert!(queue.is_empty());
  assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn string_queue_searches_and_dequeues() {
  let mut queue: LinkedQueue<String> = ["mia", "marsellus", "jules", "vincent"].into_iter().collect();

  assert!(queue.search(&"jules".to_owned()));
  assert!(!queue.search(&"jimmie".to_owned()));
  assert_eq!(queue.dequeue().as_deref(), Ok("mia"));
  assert_eq!(queue.iter().map(String::as_str).collect::<Vec<_>>(), vec!["marsellus", "jules", "vincent"]);
}

#[test]
fn custom_predicate_type_drives_search() {
  let queue: LinkedQueue<String, SameLength> = ["mia", "marsellus"].into_iter().collect();
  assert!(queue.search(&"tim".to_owned()));
  assert!(!queue.search(&"vincent".to_owned()));
}

#[test]
fn point_queue_supports_field_access_through_iteration() {
  let mut queue: LinkedQueue<Point, SameCoordinates> = LinkedQueue::new();
  for (x, y) in [(1, 1), (1, 2), (2, 7), (0, 0), (5, 4), (2, 4), (1, 0)] {
    queue.enqueue(Point { x, y }).unwrap();
  }

  assert_eq!(queue.len(), 7);
  assert_eq!(queue.head(), Ok(Point { x: 1, y: 1 }));
  assert_eq!(queue.tail(), Ok(Point { x: 1, y: 0 }));
  assert!(queue.search(&Point { x: 0, y: 0 }));

  queue.set_head(Point { x: 9, y: 4 }).unwrap();
  queue.set_tail(Point { x: 7, y: -6 }).unwrap();
  assert_eq!(queue.to_string(), "(9,4) (1,2) (2,7) (0,0) (5,4) (2,4) (7,-6)");

  for point in queue.iter_mut() {
    point.x += 1;
  }
  assert_eq!(queue.iter().map(|point| point.x).collect::<Vec<_>>(), vec![10, 2, 3, 1, 6, 3, 8]);
}

#[test]
fn values_returned_by_accessors_are_copies() {
  let mut queue: LinkedQueue<String> = ["a", "b"].into_iter().collect();
  let mut head = queue.head().unwrap();
  head.push('!');
  assert_eq!(queue.head().as_deref(), Ok("a"));

  if let Some(first) = queue.iter_mut().next() {
    first.push('!');
  }
  assert_eq!(queue.head().as_deref(), Ok("a!"));
}
