//! Markov-chain training and generation library.
//!
//! This crate trains a fixed-order Markov chain over sequences of
//! arbitrary tokens and generates new sequences by weighted random
//! walks, including:
//! - Frequency or custom-weighted transition counting
//! - Plain and suffix-generalized walk strategies
//! - Prefix/suffix state search for seeding walks
//! - Chain combination
//!
//! Randomness is always injected by the caller; the crate never draws
//! from a hidden global source, which keeps every walk replayable.

/// Core chain model, search, and generation logic.
pub mod model;

/// Error surface shared by training, search, and walks.
pub mod error;

/// Injected randomness capability.
///
/// Implemented by every `rand::Rng`.
pub mod random;
