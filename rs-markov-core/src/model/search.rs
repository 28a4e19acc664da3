use std::hash::Hash;

use super::chain::Chain;
use super::token::{State, Token};
use crate::error::{ChainError, Result};
use crate::random::RandomSource;

/// State-lookup heuristics used to seed or diversify walks.
///
/// Both searches relax their constraint step by step when a match is
/// missing or unique, preferring an ambiguous (branching) answer over a
/// precise one.
impl<T: Clone + Eq + Hash> Chain<T> {
	/// All trained states whose trailing tokens equal `suffix`.
	///
	/// While the match set holds at most one state and more than one
	/// suffix token remains, the first suffix token is dropped and the
	/// scan retried. The length-1 suffix is always scanned as a last
	/// resort, so the result is only empty when no trained state ends in
	/// the suffix's final token.
	pub fn states_with_suffix(&self, suffix: &[Token<T>]) -> Vec<State<T>> {
		let mut suffix = suffix;
		loop {
			let matches: Vec<State<T>> = self
				.states()
				.filter(|state| state.ends_with(suffix))
				.cloned()
				.collect();

			if matches.len() > 1 || suffix.len() <= 1 {
				return matches;
			}
			suffix = &suffix[1..];
		}
	}

	/// A trained state starting with the given domain values, chosen
	/// uniformly when several qualify.
	///
	/// The prefix is first padded on the left with `Begin` markers to a
	/// full window; if that exact state was trained it is returned
	/// directly. Otherwise every state is scanned for one starting with
	/// the prefix. With `strict` set, a miss is final; otherwise the last
	/// prefix value is dropped and the search retried until the prefix is
	/// exhausted. `None` is the not-found result, not an error.
	///
	/// # Errors
	/// Returns an error if `prefix` is longer than the chain's order,
	/// regardless of `strict`.
	pub fn state_with_beginning<R>(
		&self,
		prefix: &[T],
		strict: bool,
		rng: &mut R,
	) -> Result<Option<State<T>>>
	where
		R: RandomSource + ?Sized,
	{
		if prefix.len() > self.order() {
			return Err(ChainError::PrefixTooLong {
				len: prefix.len(),
				order: self.order(),
			});
		}

		let prefix: Vec<Token<T>> = prefix.iter().cloned().map(Token::Item).collect();
		let mut candidate: &[Token<T>] = &prefix;

		while !candidate.is_empty() {
			let mut padded: State<T> = vec![Token::Begin; self.order() - candidate.len()];
			padded.extend_from_slice(candidate);
			if self.contains(&padded) {
				return Ok(Some(padded));
			}

			let matches: Vec<&State<T>> = self
				.states()
				.filter(|state| state.starts_with(candidate))
				.collect();
			if !matches.is_empty() {
				return Ok(Some(matches[rng.pick(matches.len())].clone()));
			}

			if strict {
				return Ok(None);
			}
			candidate = &candidate[..candidate.len() - 1];
		}

		Ok(None)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::Scripted;

	fn item(value: &str) -> Token<&str> {
		Token::Item(value)
	}

	fn corpus_chain() -> Chain<&'static str> {
		Chain::build([["the", "cat", "sat"], ["the", "dog", "sat"]], 2).unwrap()
	}

	#[test]
	fn length_one_suffix_finds_every_matching_state() {
		let chain = corpus_chain();
		let matches = chain.states_with_suffix(&[item("sat")]);
		assert_eq!(matches.len(), 2);
		assert!(matches.contains(&vec![item("cat"), item("sat")]));
		assert!(matches.contains(&vec![item("dog"), item("sat")]));
	}

	#[test]
	fn unique_match_is_widened_by_dropping_the_leading_token() {
		let chain = corpus_chain();
		// Exactly one state ends in [cat, sat]; the search relaxes to
		// [sat] and returns both sitters.
		let matches = chain.states_with_suffix(&[item("cat"), item("sat")]);
		assert_eq!(matches.len(), 2);
	}

	#[test]
	fn unmatched_final_token_yields_an_empty_set() {
		let chain = corpus_chain();
		assert!(chain.states_with_suffix(&[item("flew")]).is_empty());
	}

	#[test]
	fn padded_exact_match_is_returned_directly() {
		let chain = corpus_chain();
		let mut rng = Scripted::new(&[0.0]);
		let state = chain.state_with_beginning(&["the"], false, &mut rng).unwrap();
		assert_eq!(state, Some(vec![Token::Begin, item("the")]));
	}

	#[test]
	fn prefix_scan_finds_states_past_the_padding() {
		let chain = corpus_chain();
		let mut rng = Scripted::new(&[0.0]);
		let state = chain.state_with_beginning(&["cat"], false, &mut rng).unwrap();
		assert_eq!(state, Some(vec![item("cat"), item("sat")]));
	}

	#[test]
	fn relaxation_drops_trailing_values_until_something_matches() {
		let chain = corpus_chain();
		let mut rng = Scripted::new(&[0.0]);
		let state = chain
			.state_with_beginning(&["cat", "flew"], false, &mut rng)
			.unwrap();
		assert_eq!(state, Some(vec![item("cat"), item("sat")]));
	}

	#[test]
	fn strict_mode_fails_without_relaxing() {
		let chain = corpus_chain();
		let mut rng = Scripted::new(&[0.0]);
		let state = chain
			.state_with_beginning(&["cat", "flew"], true, &mut rng)
			.unwrap();
		assert_eq!(state, None);
	}

	#[test]
	fn exhausted_relaxation_reports_not_found() {
		let chain = corpus_chain();
		let mut rng = Scripted::new(&[0.0]);
		let state = chain.state_with_beginning(&["flew"], false, &mut rng).unwrap();
		assert_eq!(state, None);
	}

	#[test]
	fn over_long_prefix_is_rejected_regardless_of_strictness() {
		let chain = corpus_chain();
		let mut rng = Scripted::new(&[0.0]);
		for strict in [false, true] {
			let error = chain
				.state_with_beginning(&["the", "cat", "sat"], strict, &mut rng)
				.unwrap_err();
			assert_eq!(error, ChainError::PrefixTooLong { len: 3, order: 2 });
		}
	}
}
