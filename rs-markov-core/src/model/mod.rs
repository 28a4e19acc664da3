//! Top-level module for the Markov-chain system.
//!
//! This module provides a generic weighted Markov chain, including:
//! - Fixed-order chains over arbitrary token types (`Chain`)
//! - Per-state occurrence tables with weighted sampling (`Node`)
//! - The reserved boundary vocabulary (`Token`, `State`)
//! - Suffix/prefix state search for seeding and diversifying walks
//! - Plain and suffix-generalized walk drivers

/// The trained chain: order, state map, training, and combination.
pub mod chain;

/// Occurrence table of a single state and its weighted sampler.
pub mod node;

/// Tokens (domain values plus the `Begin`/`End` markers) and state windows.
pub mod token;

/// Walk driver and the pluggable transition strategies.
pub mod walker;

/// State-lookup heuristics (suffix and prefix search) on `Chain`.
///
/// Implementation only; the methods surface on `Chain` itself.
mod search;
