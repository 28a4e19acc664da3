use serde::{Deserialize, Serialize};

/// A single element of a trained or generated sequence.
///
/// Domain values are wrapped in `Item`. `Begin` and `End` are reserved
/// boundary markers: `Begin` pads the start of every trained sequence and
/// `End` terminates it. Callers must never place the markers inside input
/// sequences; the builder inserts them itself.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token<T> {
	/// Start-of-sequence padding. Never appears in default walk output.
	Begin,
	/// End-of-sequence marker. Drawing it terminates a walk.
	End,
	/// A caller-supplied domain value.
	Item(T),
}

/// A fixed-length window of consecutive tokens, used as a lookup key
/// into a chain. For every state stored in a chain, the window length
/// equals the chain's order.
pub type State<T> = Vec<Token<T>>;

impl<T> Token<T> {
	/// True for the two reserved boundary markers.
	pub fn is_marker(&self) -> bool {
		matches!(self, Token::Begin | Token::End)
	}

	/// The domain value, if this token carries one.
	pub fn item(&self) -> Option<&T> {
		match self {
			Token::Item(value) => Some(value),
			_ => None,
		}
	}

	/// Consumes the token and returns the domain value, if any.
	pub fn into_item(self) -> Option<T> {
		match self {
			Token::Item(value) => Some(value),
			_ => None,
		}
	}
}
