//! Character-level Markov chain library.
//!
//! This crate provides a first-order, character-level Markov chain model
//! for procedural text and name generation, including:
//! - An alphabet of transition endpoints with dense integer indexing
//! - A square transition-count matrix populated by training on strings
//! - Weighted random generation with caller-supplied, seedable randomness
//! - A structural JSON encode/decode contract for persisting models
//!
//! The crate is an embeddable model component: it performs no file or
//! network I/O of its own. Hosts persist models by transporting the
//! structural value produced by the codec.

/// Core Markov model and generation logic.
pub mod model;
