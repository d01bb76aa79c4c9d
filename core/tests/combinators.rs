use std::cell::Cell;

use sumchain_core::prelude::*;

/// Iterator that panics when pulled more than `limit` times.
struct PanicsAfter<I> {
  inner: I,
  pulled: usize,
  limit: usize,
}

impl<I> PanicsAfter<I> {
  fn new(inner: I, limit: usize) -> Self { Self { inner, pulled: 0, limit } }
}

impl<I: Iterator> Iterator for PanicsAfter<I> {
  type Item = I::Item;

  fn next(&mut self) -> Option<Self::Item> {
    self.pulled += 1;
    assert!(self.pulled <= self.limit, "attempt to pull element {} of at most {}", self.pulled, self.limit);
    self.inner.next()
  }
}

#[test]
fn first_never_pulls_a_second_element() {
  assert_eq!(Optional::first(PanicsAfter::new(1.., 1)), Optional::Present(1));
  assert_eq!(Optional::first(PanicsAfter::new(std::iter::empty::<i32>(), 1)), Optional::Empty);
}

#[test]
fn sequence_never_pulls_past_first_empty() {
  let optionals = PanicsAfter::new([Optional::Present(1), Optional::Empty, Optional::Present(2)].into_iter(), 2);
  assert_eq!(Optional::sequence(optionals), Optional::Empty);
}

#[test]
fn sequence_of_all_present_reads_everything() {
  let optionals = PanicsAfter::new((0..3).map(Optional::Present), 4);
  assert_eq!(Optional::sequence(optionals), Optional::Present(vec![0, 1, 2]));
}

#[test]
fn pack_mixed_payloads() {
  #[derive(PartialEq, Debug)]
  enum Item { Number(i32), Text(&'static str) }

  let packed = Optional::pack([Optional::Present(Item::Number(1)), Optional::Empty, Optional::Present(Item::Text("x"))]);
  assert_eq!(packed, Optional::Present(vec![Item::Number(1), Item::Text("x")]));
}

#[test]
fn collect_reads_everything_even_after_errors() {
  let pulled = Cell::new(0);
  let outcomes = [Outcome::Ok("a"), Outcome::Err("x"), Outcome::Err("y"), Outcome::Ok("b")]
    .into_iter()
    .inspect(|_| pulled.set(pulled.get() + 1));
  assert_eq!(Outcome::collect(outcomes), Outcome::Err(vec!["x", "y"]));
  assert_eq!(pulled.get(), 4);
}

#[test]
fn iteration_is_restartable() {
  let present = Optional::Present("x".to_string());
  for _ in 0..3 {
    assert_eq!(present.iter().cloned().collect::<Vec<_>>(), vec!["x".to_string()]);
  }
  let mut count = 0;
  for value in &present {
    assert_eq!(value, "x");
    count += 1;
  }
  assert_eq!(count, 1);

  let err = Outcome::<String, _>::Err("x");
  assert_eq!((&err).into_iter().count(), 0);
  assert_eq!(err.iter().count(), 0);
}

#[test]
fn map_of_then_pack() {
  let words = ["apple", "", "pear", ""];
  let packed = Optional::pack(Optional::map_of(words, |w| !w.is_empty()));
  assert_eq!(packed, Optional::Present(vec!["apple", "pear"]));
}
