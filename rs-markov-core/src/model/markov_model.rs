use std::sync::mpsc;
use std::thread;

use super::alphabet::Alphabet;
use super::element::Element;
use super::error::ModelError;
use super::matrix::TransitionMatrix;

/// A first-order, character-level Markov chain model.
///
/// The model pairs an [`Alphabet`] with a [`TransitionMatrix`] sized to it.
/// Training folds observed strings into matrix increments; generation and
/// serialization read the model without changing it.
///
/// # Responsibilities
/// - Accumulate transition counts from training strings
/// - Resolve element-addressed reads of individual counts
/// - Merge with another model built from the same alphabet
///
/// # Invariants
/// - The matrix dimension always equals the alphabet length
/// - Counts only ever increase; there is no deletion or reset
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovModel {
	alphabet: Alphabet,
	matrix: TransitionMatrix,
}

impl MarkovModel {
	/// Creates an empty model over the given character set.
	///
	/// The alphabet is the characters wrapped with the start and end
	/// markers; every transition count starts at zero.
	pub fn empty(characters: &[char]) -> Self {
		Self::with_alphabet(Alphabet::new(characters))
	}

	/// Creates an empty model over an existing alphabet.
	fn with_alphabet(alphabet: Alphabet) -> Self {
		let matrix = TransitionMatrix::new(alphabet.len());
		Self { alphabet, matrix }
	}

	/// Reassembles a model from its parts.
	///
	/// The decoder validates that the matrix dimension matches the alphabet
	/// length before calling this.
	pub(crate) fn from_parts(alphabet: Alphabet, matrix: TransitionMatrix) -> Self {
		Self { alphabet, matrix }
	}

	/// Returns the model's alphabet.
	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}

	/// Returns the model's transition matrix.
	pub fn matrix(&self) -> &TransitionMatrix {
		&self.matrix
	}

	/// Returns the observed count for the transition `from -> to`.
	///
	/// Returns 0 when either element is outside the alphabet.
	pub fn count(&self, from: Element, to: Element) -> u64 {
		let (Some(row), Some(col)) = (self.alphabet.index_of(from), self.alphabet.index_of(to))
		else {
			return 0;
		};
		// The matrix is sized to the alphabet, so indices taken from the
		// alphabet's own map are always in range.
		self.matrix.get(row, col).expect("matrix sized to alphabet")
	}

	/// Records one observation of the transition `from -> to`.
	///
	/// If either element is outside the alphabet the model is left
	/// unchanged. This is intentional: training data may mention characters
	/// the alphabet was never meant to carry, and those observations are
	/// simply dropped.
	pub fn add(&mut self, from: Element, to: Element) {
		let Some(row) = self.alphabet.index_of(from) else {
			return;
		};
		let Some(col) = self.alphabet.index_of(to) else {
			return;
		};
		// In range by the dimension invariant, same as in `count`.
		self.matrix
			.increment(row, col)
			.expect("matrix sized to alphabet");
	}

	/// Adds one training string to the model.
	///
	/// The string is wrapped with the start and end markers and every
	/// adjacent pair of the wrapped sequence is recorded. An empty string
	/// is skipped entirely; it contributes no transitions, not even
	/// start-to-end.
	pub fn add_string(&mut self, string: &str) {
		if string.is_empty() {
			return;
		}
		let mut previous = Element::Start;
		for c in string.chars() {
			let current = Element::Character(c);
			self.add(previous, current);
			previous = current;
		}
		self.add(previous, Element::End);
	}

	/// Adds a list of training strings to the model.
	///
	/// Strings are folded left to right, but counts accumulate additively
	/// per pair occurrence, so the order of the strings never affects the
	/// final matrix.
	pub fn add_list<S: AsRef<str>>(&mut self, strings: &[S]) {
		for string in strings {
			self.add_string(string.as_ref());
		}
	}

	/// Adds a list of training strings using one worker thread per chunk.
	///
	/// Splits the corpus into chunks (based on CPU cores * factor), trains
	/// an independent partial model per chunk, and merges the partial
	/// matrices into this model. Produces the same matrix as
	/// [`MarkovModel::add_list`] on the same corpus.
	pub fn add_list_parallel(&mut self, strings: &[String]) {
		if strings.is_empty() {
			return;
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = (strings.len() + chunks - 1) / chunks;

		let (tx, rx) = mpsc::channel();
		for chunk in strings.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();
			let mut partial = Self::with_alphabet(self.alphabet.clone());

			thread::spawn(move || {
				partial.add_list(&chunk);
				tx.send(partial).expect("Failed to send from thread");
			});
		}
		drop(tx);

		for partial in rx.iter() {
			// Partials are built over this model's own alphabet.
			self.merge(&partial).expect("partial models share the alphabet");
		}
	}

	/// Merges another model's counts into this one, cell by cell.
	///
	/// Both models must have been built from the same alphabet, in the
	/// same order.
	///
	/// # Errors
	/// Returns [`ModelError::AlphabetMismatch`] if the alphabets differ.
	pub fn merge(&mut self, other: &Self) -> Result<(), ModelError> {
		if self.alphabet != other.alphabet {
			return Err(ModelError::AlphabetMismatch);
		}
		self.matrix.merge(&other.matrix)
	}
}
