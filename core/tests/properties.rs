use quickcheck::quickcheck;

use sumchain_core::prelude::*;

quickcheck! {
  fn optional_of_is_present_iff_some(value: Option<i64>) -> bool {
    Optional::of(value).has_value() == value.is_some()
  }

  fn optional_of_with_follows_predicate(value: i32) -> bool {
    Optional::of_with(value, |v| v % 2 == 0).is_present() == (value % 2 == 0)
  }

  fn outcome_of_is_ok_iff_some(value: Option<String>, otherwise: u8) -> bool {
    Outcome::of(value.clone(), otherwise).has_value() == value.is_some()
  }

  fn present_is_truthy_whatever_the_payload(value: Vec<u8>) -> bool {
    Optional::Present(value.clone()).has_value() && Outcome::<_, ()>::Ok(value).has_value()
  }

  fn payload_round_trips(value: String, error: String) -> bool {
    Optional::Present(value.clone()).value() == &value
      && Outcome::<_, ()>::Ok(value.clone()).value() == &value
      && Outcome::<(), _>::Err(error.clone()).error() == &error
  }

  fn err_passes_through_chains(error: String) -> bool {
    let err = Outcome::<i32, String>::Err(error.clone());
    err.clone().and_then(|v| v + 1) == Outcome::Err(error.clone())
      && err.bind(|v| Outcome::Ok(v * 2)) == Outcome::Err(error)
  }

  fn ok_ignores_or_else(value: i32) -> bool {
    Outcome::<i32, String>::Ok(value).or_else(|_| value.wrapping_add(1)) == Outcome::Ok(value)
  }

  fn inverse_is_an_involution(result: Result<i32, String>) -> bool {
    let outcome = Outcome::from(result);
    outcome.clone().inverse().inverse() == outcome
  }

  fn iteration_matches_len(value: Option<u8>) -> bool {
    let optional = Optional::of(value);
    optional.iter().count() == optional.len() && optional.into_iter().collect::<Vec<_>>() == value.into_iter().collect::<Vec<_>>()
  }

  fn sequence_is_all_or_nothing(values: Vec<Option<u8>>) -> bool {
    let expected: Option<Vec<u8>> = values.iter().copied().collect();
    Optional::sequence(values.into_iter().map(Optional::of)) == Optional::of(expected)
  }

  fn pack_keeps_every_present_value(values: Vec<Option<u8>>) -> bool {
    let expected: Vec<u8> = values.iter().flatten().copied().collect();
    Optional::pack(values.into_iter().map(Optional::of)) == Optional::Present(expected)
  }

  fn collect_gathers_every_error(results: Vec<Result<u8, u8>>) -> bool {
    let errors: Vec<u8> = results.iter().copied().filter_map(Result::err).collect();
    let values: Vec<u8> = results.iter().copied().filter_map(Result::ok).collect();
    let expected = if errors.is_empty() { Outcome::Ok(values) } else { Outcome::Err(errors) };
    Outcome::collect(results.into_iter().map(Outcome::from)) == expected
  }
}
