use std::hash::Hash;

use super::chain::Chain;
use super::token::{State, Token};
use crate::error::{ChainError, Result};
use crate::random::RandomSource;

/// State-advance rule applied after every non-terminal draw.
///
/// Captures `(current state, sampled token) -> next state`, so the plain
/// and suffix-generalized walks share a single driver loop instead of
/// duplicating it per flavor.
pub trait Transition<T: Eq + Hash> {
	/// The state the walk moves to after emitting `sampled` from `state`.
	fn advance<R>(
		&self,
		chain: &Chain<T>,
		state: State<T>,
		sampled: &Token<T>,
		rng: &mut R,
	) -> State<T>
	where
		R: RandomSource + ?Sized;
}

/// Fixed-order sliding window: drop the oldest token, append the draw.
pub struct PlainStep;

impl<T: Clone + Eq + Hash> Transition<T> for PlainStep {
	fn advance<R>(
		&self,
		_chain: &Chain<T>,
		mut state: State<T>,
		sampled: &Token<T>,
		_rng: &mut R,
	) -> State<T>
	where
		R: RandomSource + ?Sized,
	{
		state.remove(0);
		state.push(sampled.clone());
		state
	}
}

/// Sliding window relaxed through the suffix search.
///
/// The plain next state is replaced by a state chosen uniformly among
/// those sharing a (possibly shortened) suffix with it. A fixed-order
/// chain can collapse onto a state with a single observed continuation,
/// forcing a repetitive run of tokens; jumping to the shortest suffix
/// that still branches restores variety at the cost of strict
/// order-fidelity for that step.
pub struct GeneralizedStep;

impl<T: Clone + Eq + Hash> Transition<T> for GeneralizedStep {
	fn advance<R>(
		&self,
		chain: &Chain<T>,
		state: State<T>,
		sampled: &Token<T>,
		rng: &mut R,
	) -> State<T>
	where
		R: RandomSource + ?Sized,
	{
		let plain = PlainStep.advance(chain, state, sampled, rng);
		let mut candidates = chain.states_with_suffix(&plain);
		if candidates.is_empty() {
			// Nothing ends in the new window's final token; keep the
			// plain state and let the next lookup report it.
			return plain;
		}
		candidates.swap_remove(rng.pick(candidates.len()))
	}
}

/// Walks drive a sequence of draws and state transitions until `End`
/// is produced.
impl<T: Clone + Eq + Hash> Chain<T> {
	/// Generates a sequence with the fixed-order sliding window,
	/// starting from the all-`Begin` state.
	///
	/// Termination is guaranteed when the chain was trained with the
	/// default weights on finite sequences; no step limit is imposed
	/// here, so a custom weighting that starves `End` of mass along a
	/// cycle can walk forever.
	///
	/// # Errors
	/// Aborts with an error when a step reaches a state the chain does
	/// not contain, or one whose table has no weight to sample.
	pub fn walk<R>(&self, rng: &mut R) -> Result<Vec<Token<T>>>
	where
		R: RandomSource + ?Sized,
	{
		self.walk_with(&PlainStep, None, rng)
	}

	/// `walk` starting from a caller-chosen state.
	///
	/// The initial state is not validated for length or membership; an
	/// unknown state aborts on the first step.
	pub fn walk_from<R>(&self, init: &[Token<T>], rng: &mut R) -> Result<Vec<Token<T>>>
	where
		R: RandomSource + ?Sized,
	{
		self.walk_with(&PlainStep, Some(init), rng)
	}

	/// Generates a sequence with the suffix-generalized transition.
	pub fn walk2<R>(&self, rng: &mut R) -> Result<Vec<Token<T>>>
	where
		R: RandomSource + ?Sized,
	{
		self.walk_with(&GeneralizedStep, None, rng)
	}

	/// `walk2` starting from a caller-chosen state.
	pub fn walk2_from<R>(&self, init: &[Token<T>], rng: &mut R) -> Result<Vec<Token<T>>>
	where
		R: RandomSource + ?Sized,
	{
		self.walk_with(&GeneralizedStep, Some(init), rng)
	}

	/// Shared driver: sample, stop on `End`, append, advance.
	///
	/// A caller-supplied starting state is emitted as part of the output
	/// (markers included, exactly as given); the default all-`Begin`
	/// start is not, since `Begin` never belongs in generated output.
	/// The accumulator is returned verbatim once `End` is drawn.
	fn walk_with<S, R>(
		&self,
		step: &S,
		init: Option<&[Token<T>]>,
		rng: &mut R,
	) -> Result<Vec<Token<T>>>
	where
		S: Transition<T>,
		R: RandomSource + ?Sized,
	{
		let (mut state, mut emitted) = match init {
			Some(init) => (init.to_vec(), init.to_vec()),
			None => (vec![Token::Begin; self.order()], Vec::new()),
		};

		loop {
			let node = self.node(&state).ok_or(ChainError::UnknownState)?;
			let sampled = node.sample(rng).ok_or(ChainError::ZeroTotalWeight)?.clone();
			if matches!(sampled, Token::End) {
				return Ok(emitted);
			}
			emitted.push(sampled.clone());
			state = step.advance(self, state, &sampled, rng);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn item(value: &str) -> Token<&str> {
		Token::Item(value)
	}

	#[test]
	fn order_covering_the_sequence_reproduces_it() {
		// With order >= sequence length every state has exactly one
		// continuation, so any draw sequence replays the training data.
		let chain = Chain::build([["a", "b", "c"]], 3).unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		let walked = chain.walk(&mut rng).unwrap();
		assert_eq!(walked, vec![item("a"), item("b"), item("c")]);
	}

	#[test]
	fn default_walks_never_emit_markers() {
		let chain =
			Chain::build([["the", "cat", "sat"], ["the", "dog", "sat"], ["a", "dog", "ran"]], 2)
				.unwrap();
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..50 {
			for token in chain.walk(&mut rng).unwrap() {
				assert!(!token.is_marker());
			}
		}
	}

	#[test]
	fn supplied_initial_state_is_emitted_verbatim() {
		let chain = Chain::build([["a", "b", "c"]], 2).unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		// [b, c] only continues to End, so the output is the seed itself.
		let walked = chain.walk_from(&[item("b"), item("c")], &mut rng).unwrap();
		assert_eq!(walked, vec![item("b"), item("c")]);
	}

	#[test]
	fn supplied_initial_state_may_carry_markers_into_the_output() {
		let chain = Chain::build([["a", "b"]], 2).unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		let walked = chain.walk_from(&[Token::Begin, item("a")], &mut rng).unwrap();
		assert_eq!(walked, vec![Token::Begin, item("a"), item("b")]);
	}

	#[test]
	fn unknown_initial_state_aborts_the_walk() {
		let chain = Chain::build([["a", "b"]], 2).unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		let error = chain.walk_from(&[item("x"), item("y")], &mut rng).unwrap_err();
		assert_eq!(error, ChainError::UnknownState);
	}

	#[test]
	fn weightless_table_aborts_the_walk() {
		// Starve End of mass after "a": the walk reaches [a] and finds
		// nothing sampleable.
		let chain = Chain::build_weighted([["a"]], 1, |_, follower| {
			if matches!(follower, Token::End) { 0 } else { 1 }
		})
		.unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		assert_eq!(chain.walk(&mut rng).unwrap_err(), ChainError::ZeroTotalWeight);
	}

	#[test]
	fn generalized_walks_terminate_and_stay_in_vocabulary() {
		let corpus = [["the", "cat", "sat"], ["the", "dog", "sat"], ["the", "cat", "ran"]];
		let vocabulary = ["the", "cat", "dog", "sat", "ran"];
		let chain = Chain::build(corpus, 2).unwrap();
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..50 {
			for token in chain.walk2(&mut rng).unwrap() {
				let word = token.item().expect("markers never appear in default output");
				assert!(vocabulary.contains(word));
			}
		}
	}

	#[test]
	fn plain_step_slides_the_window() {
		let chain = Chain::build([["a", "b"]], 2).unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		let next = PlainStep.advance(
			&chain,
			vec![Token::Begin, item("a")],
			&item("b"),
			&mut rng,
		);
		assert_eq!(next, vec![item("a"), item("b")]);
	}

	#[test]
	fn generalized_step_lands_on_a_state_sharing_the_suffix() {
		let chain =
			Chain::build([["the", "cat", "sat"], ["the", "dog", "sat"]], 2).unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		// Plain next state would be [cat, sat]; the suffix search widens
		// to every state ending in "sat".
		let next = GeneralizedStep.advance(
			&chain,
			vec![item("the"), item("cat")],
			&item("sat"),
			&mut rng,
		);
		assert_eq!(next.last(), Some(&item("sat")));
		assert!(chain.contains(&next));
	}
}
