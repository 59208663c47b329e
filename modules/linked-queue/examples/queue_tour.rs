use std::{error::Error, fmt};

use fraktor_linked_queue_rs::{EqualityPredicate, LinkedQueue, QueueError, transform_if};

#[derive(Clone, Copy, Debug)]
struct Point {
  x: i32,
  y: i32,
}

impl Point {
  const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({},{})", self.x, self.y)
  }
}

/// Two points match when both coordinates do.
#[derive(Clone, Copy, Default)]
struct SamePoint;

impl EqualityPredicate<Point> for SamePoint {
  fn equals(&self, stored: &Point, candidate: &Point) -> bool {
    stored.x == candidate.x && stored.y == candidate.y
  }
}

fn join<'a, T: fmt::Display + 'a>(values: impl IntoIterator<Item = &'a T>) -> String {
  values.into_iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn construction() -> Result<(), QueueError<i32>> {
  println!("== construction ==");
  let mut original: LinkedQueue<i32> = LinkedQueue::new();
  for value in [5, 15, 10, 27, 34, 2, 9] {
    original.enqueue(value)?;
  }
  println!("enqueued:    {original}");

  let copy = original.try_clone()?;
  println!("cloned:      {copy}");

  let mut assigned: LinkedQueue<i32> = LinkedQueue::new();
  assigned.assign_from(&original)?;
  println!("assigned:    {assigned}");

  let ranged: LinkedQueue<i32> = LinkedQueue::try_from_iter([5, 15, 10, 27, 34, 2, 9])?;
  println!("from range:  {ranged}");
  assert_eq!(copy.len(), original.len());
  Ok(())
}

fn management() -> Result<(), QueueError<i32>> {
  println!("== management ==");
  let mut queue: LinkedQueue<i32> = LinkedQueue::try_from_iter([20, 15, 10, 17, 25, 30, 23])?;
  println!("search 20: {}, search -20: {}", queue.search(&20), queue.search(&-20));
  println!("iterated:  {}", join(&queue));
  println!("head: {}, tail: {}", queue.head()?, queue.tail()?);

  queue.set_head(70)?;
  queue.set_tail(50)?;
  println!("rewritten: {queue}");

  queue.dequeue()?;
  queue.enqueue(100)?;
  println!("rotated:   {queue}");
  Ok(())
}

fn transform() -> Result<(), QueueError<i32>> {
  println!("== transform_if ==");
  let mut queue: LinkedQueue<i32> = LinkedQueue::try_from_iter([23, 15, 9, 17, 16, 21, 19])?;
  let replaced = transform_if(&mut queue, |value| *value > 10 && *value < 20, |value| 2 * value);
  println!("doubled {replaced} values: {queue}");
  Ok(())
}

fn strings() -> Result<(), QueueError<String>> {
  println!("== strings ==");
  let mut queue: LinkedQueue<String> = LinkedQueue::try_from_iter(["mia", "marsellus", "jules", "vincent"])?;
  println!("search jules: {}, search jimmie: {}", queue.search(&"jules".into()), queue.search(&"jimmie".into()));
  let first = queue.dequeue()?;
  println!("dequeued {first}, left: {}", join(&queue));
  Ok(())
}

fn points() -> Result<(), QueueError<Point>> {
  println!("== points ==");
  let mut queue: LinkedQueue<Point, SamePoint> = LinkedQueue::new();
  for (x, y) in [(1, 1), (1, 2), (2, 7), (0, 0), (5, 4), (2, 4), (1, 0)] {
    queue.enqueue(Point::new(x, y))?;
  }
  println!("iterated: {} (len {})", join(&queue), queue.len());
  println!("head: {}, tail: {}", queue.head()?, queue.tail()?);

  queue.set_head(Point::new(9, 4))?;
  queue.set_tail(Point::new(7, -6))?;
  println!("rewritten: {queue}");

  for point in &mut queue {
    point.y = -point.y;
  }
  println!("mirrored:  {queue}");
  Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
  construction()?;
  management()?;
  transform()?;
  strings()?;
  points()?;
  Ok(())
}
