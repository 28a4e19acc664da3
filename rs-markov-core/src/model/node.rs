use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::token::Token;
use crate::random::RandomSource;

/// Occurrence table of a single chain state.
///
/// A `Node` stores every token observed to follow one state, together
/// with the accumulated weight of that observation. Conceptually this is
/// a node in a Markov chain whose outgoing edges are weighted by their
/// number (or weight) of observations.
///
/// ## Invariants
/// - Weights are non-negative by construction (`u64`); a zero weight is
///   accepted but leaves that entry with no probability mass.
/// - Iteration over the table is arbitrary but stable for an unmodified
///   instance, which is what the cumulative-sum sampling below relies on.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Node<T: Eq + Hash> {
	/// Outgoing transitions indexed by the next token.
	/// Example: { Item("fox") => 42, End => 3 }
	transitions: HashMap<Token<T>, u64>,
}

impl<T: Eq + Hash> Node<T> {
	/// Creates an empty table.
	pub(crate) fn new() -> Self {
		Self { transitions: HashMap::new() }
	}

	/// Records an observation of `token` with the given weight.
	///
	/// - If the transition already exists, the weight is added to it.
	/// - Otherwise a new transition is created with that weight.
	pub(crate) fn add(&mut self, token: Token<T>, weight: u64) {
		*self.transitions.entry(token).or_insert(0) += weight;
	}

	/// Accumulated weight of one transition; 0 if never observed.
	pub fn weight(&self, token: &Token<T>) -> u64 {
		self.transitions.get(token).copied().unwrap_or(0)
	}

	/// Sum of all transition weights.
	pub fn total(&self) -> u64 {
		self.transitions.values().sum()
	}

	/// Number of distinct observed successors.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	/// True when no successor has been observed.
	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Iterates over `(token, weight)` pairs in the table's own order.
	pub fn transitions(&self) -> impl Iterator<Item = (&Token<T>, u64)> {
		self.transitions.iter().map(|(token, weight)| (token, *weight))
	}

	/// Draws one token with probability proportional to its weight.
	///
	/// A single uniform draw is scaled to the total weight and matched
	/// against running prefix sums, scanning the table once in its own
	/// iteration order. Returns `None` if the table is empty or its total
	/// weight is zero; callers treat that as a precondition failure.
	pub fn sample<R>(&self, rng: &mut R) -> Option<&Token<T>>
	where
		R: RandomSource + ?Sized,
	{
		let total = self.total();
		if total == 0 {
			return None;
		}

		let target = rng.uniform01() * total as f64;

		let mut sum = 0u64;
		let mut last = None;
		for (token, weight) in &self.transitions {
			sum += weight;
			if sum as f64 >= target {
				return Some(token);
			}
			last = Some(token);
		}

		// Rounding pushed the draw past the final prefix sum.
		last
	}
}
