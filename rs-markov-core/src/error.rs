//! Chain error types.

use thiserror::Error;

/// Failures surfaced by training, search, and walk operations.
///
/// "Not found" outcomes (a seed state that does not exist) are reported
/// as `Option::None` by the search API, never as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
	/// A chain cannot be trained with an order of zero.
	#[error("order must be at least 1")]
	ZeroOrder,

	/// A seed prefix cannot be longer than the chain's order.
	#[error("prefix of length {len} exceeds the chain order {order}")]
	PrefixTooLong {
		/// Length of the rejected prefix.
		len: usize,
		/// Order of the chain it was offered to.
		order: usize,
	},

	/// A walk stepped onto a state the chain was never trained on.
	#[error("current state is not present in the chain")]
	UnknownState,

	/// A walk reached a state whose transitions carry no weight at all.
	#[error("occurrence table has no weight to sample from")]
	ZeroTotalWeight,
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
