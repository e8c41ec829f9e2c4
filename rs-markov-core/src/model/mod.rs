//! Top-level module for the Markov chain generation system.
//!
//! This module provides a first-order character-level Markov chain, including:
//! - Transition endpoints and their ordering (`Element`)
//! - The ordered endpoint set with dense indexing (`Alphabet`)
//! - The square transition-count table (`TransitionMatrix`)
//! - The trainable model (`MarkovModel`)
//! - Generation settings (`GenerationInput`) and the random walk (`generator`)
//! - The structural encode/decode contract (`codec`)

/// Transition endpoints: the start marker, the end marker, or a character.
pub mod element;

/// Ordered set of all elements known to a model, with O(1) index lookup.
pub mod alphabet;

/// Square table of observed transition counts, row = from, column = to.
pub mod matrix;

/// The trainable Markov model: alphabet plus transition matrix.
///
/// Handles string ingestion, transition counting, model merging,
/// and chunked parallel training.
pub mod markov_model;

/// Validated generation settings.
pub mod generation_input;

/// Weighted random walk over the model, producing character sequences.
pub mod generator;

/// Structural serialization of a model to and from a JSON value.
pub mod codec;

/// Error types for structural failures and decode rejections.
pub mod error;
