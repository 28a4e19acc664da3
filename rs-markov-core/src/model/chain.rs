use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::node::Node;
use super::token::{State, Token};
use crate::error::{ChainError, Result};

/// A trained fixed-order Markov chain over tokens of type `T`.
///
/// The chain maps every distinct window of `order` consecutive tokens
/// seen during training to the occurrence table of the tokens that
/// followed it.
///
/// # Responsibilities
/// - Build the chain from a corpus of independent token sequences
/// - Accumulate (optionally custom-weighted) transition counts per state
/// - Expose read-only access to states and their occurrence tables
/// - Combine with other chains of the same order
///
/// # Invariants
/// - `order` is always >= 1
/// - Every key in `nodes` has length exactly `order`
/// - Every stored occurrence table holds at least one entry once
///   training has touched its state
///
/// A chain is immutable after construction; `combine` produces a new
/// chain rather than mutating its inputs, so any number of concurrent
/// walks may read the same chain.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Chain<T: Eq + Hash> {
	/// Length of every state window.
	order: usize, // must be >= 1

	/// Mapping from a state window to its occurrence table.
	nodes: HashMap<State<T>, Node<T>>,
}

impl<T: Clone + Eq + Hash> Chain<T> {
	/// Trains a chain with plain frequency counting: every observed
	/// transition contributes 1.
	///
	/// # Errors
	/// Returns an error if `order` is 0.
	pub fn build<I, S>(sequences: I, order: usize) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<[T]>,
	{
		Self::build_weighted(sequences, order, |_, _| 1)
	}

	/// Trains a chain, letting `weight` choose the increment contributed
	/// by each `(state, successor)` observation.
	///
	/// Each input sequence is extended with `order` leading `Begin`
	/// markers and one trailing `End` marker, then a window of width
	/// `order` slides across it; the window is the state, the token just
	/// after it the successor. Because `End` is always appended, even an
	/// empty sequence yields one transition (all-`Begin` to `End`), so
	/// every trained path eventually offers a route to `End`.
	///
	/// Zero increments are accepted and recorded; an entry whose weight
	/// stays at zero carries no probability mass, and a state whose whole
	/// table stays at zero makes any walk through it abort.
	///
	/// # Errors
	/// Returns an error if `order` is 0.
	pub fn build_weighted<I, S, W>(sequences: I, order: usize, mut weight: W) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<[T]>,
		W: FnMut(&[Token<T>], &Token<T>) -> u64,
	{
		if order == 0 {
			return Err(ChainError::ZeroOrder);
		}

		let mut nodes: HashMap<State<T>, Node<T>> = HashMap::new();
		for sequence in sequences {
			let sequence = sequence.as_ref();

			let mut extended: Vec<Token<T>> = vec![Token::Begin; order];
			extended.reserve(sequence.len() + 1);
			extended.extend(sequence.iter().cloned().map(Token::Item));
			extended.push(Token::End);

			for at in 0..extended.len() - order {
				let window = &extended[at..at + order];
				let follower = &extended[at + order];
				let increment = weight(window, follower);
				nodes
					.entry(window.to_vec())
					.or_insert_with(Node::new)
					.add(follower.clone(), increment);
			}
		}

		Ok(Self { order, nodes })
	}

	/// The fixed length of every state window.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct trained states.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// True when no sequence has been trained.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The occurrence table of `state`, if that state was trained.
	pub fn node(&self, state: &[Token<T>]) -> Option<&Node<T>> {
		self.nodes.get(state)
	}

	/// True when `state` was trained.
	pub fn contains(&self, state: &[Token<T>]) -> bool {
		self.nodes.contains_key(state)
	}

	/// Iterates over all trained state windows.
	pub fn states(&self) -> impl Iterator<Item = &State<T>> {
		self.nodes.keys()
	}

	/// Produces a new chain holding the union of this chain's nodes and
	/// every other chain's nodes.
	///
	/// When two inputs define the same state, the later input's table
	/// replaces the earlier one wholesale; counts are never summed. Order
	/// agreement between the inputs is the caller's responsibility and is
	/// not checked; the result keeps this chain's order.
	pub fn combine(&self, others: &[Self]) -> Self {
		let mut nodes = self.nodes.clone();
		for other in others {
			for (state, node) in &other.nodes {
				nodes.insert(state.clone(), node.clone());
			}
		}
		Self { order: self.order, nodes }
	}
}
