use std::collections::HashMap;

use super::element::Element;

/// The ordered set of all elements known to a model.
///
/// An alphabet is built once from a caller-supplied character set and is
/// never mutated afterwards. The position of an element in the sequence is
/// its canonical integer id; a precomputed map gives the inverse lookup.
///
/// # Responsibilities
/// - Hold the element sequence `[Start, c1, …, cn, End]`
/// - Resolve an element to its dense index in O(1)
///
/// # Invariants
/// - The sequence starts with `Start` and ends with `End` when built
///   through [`Alphabet::new`]
/// - For every position `i`, `elements[index_of(elements[i])] == elements[i]`
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet {
	elements: Vec<Element>,
	index: HashMap<Element, usize>,
}

impl Alphabet {
	/// Builds an alphabet from the wanted character set.
	///
	/// The characters are wrapped with the two sentinel markers:
	/// `['c', 'a', 't']` becomes `[Start, 'c', 'a', 't', End]`.
	///
	/// The caller supplies the character set as-is; no deduplication is
	/// performed.
	pub fn new(characters: &[char]) -> Self {
		let mut elements = Vec::with_capacity(characters.len() + 2);
		elements.push(Element::Start);
		elements.extend(characters.iter().map(|c| Element::Character(*c)));
		elements.push(Element::End);
		Self::from_elements(elements)
	}

	/// Builds an alphabet from an already-ordered element sequence.
	///
	/// Used when reconstructing a model from its serialized form, where the
	/// element order is part of the persisted data.
	pub(crate) fn from_elements(elements: Vec<Element>) -> Self {
		let mut index = HashMap::with_capacity(elements.len());
		for (i, element) in elements.iter().enumerate() {
			// First occurrence wins if the caller supplied duplicates.
			index.entry(*element).or_insert(i);
		}
		Self { elements, index }
	}

	/// Returns the dense index of an element.
	///
	/// Returns `None` for any element outside the alphabet. This is a
	/// normal outcome, not an error: training and generation treat unknown
	/// elements as no-ops and terminal conditions respectively.
	pub fn index_of(&self, element: Element) -> Option<usize> {
		self.index.get(&element).copied()
	}

	/// Returns the element sequence in index order.
	pub fn elements(&self) -> &[Element] {
		&self.elements
	}

	/// Returns the number of elements, sentinels included.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Returns true when the alphabet holds no elements.
	///
	/// Alphabets built through [`Alphabet::new`] always hold at least the
	/// two sentinels.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}
}
