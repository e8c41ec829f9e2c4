use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::alphabet::Alphabet;
use super::element::Element;
use super::error::DecodeError;
use super::markov_model::MarkovModel;
use super::matrix::TransitionMatrix;

/// Token persisted for the start marker.
const START_TOKEN: &str = "start";
/// Token persisted for the end marker.
const END_TOKEN: &str = "end";

/// The persisted shape of a model.
///
/// Three fields: the row-major count table, the alphabet as an ordered
/// token sequence, and the token-to-index lookup. The lookup is redundant
/// with the alphabet's positions but persisted explicitly so a decoder
/// need not recompute it.
#[derive(Serialize, Deserialize)]
struct SerializedModel {
	matrix: Vec<Vec<u64>>,
	alphabet: Vec<String>,
	#[serde(rename = "alphabetLookup")]
	alphabet_lookup: HashMap<String, usize>,
}

/// Encodes a model into its structural JSON value.
///
/// The inverse of [`decode`]: for every valid model `m`,
/// `decode(encode(&m))` reconstructs a model structurally equal to `m`.
pub fn encode(model: &MarkovModel) -> serde_json::Value {
	let size = model.alphabet().len();

	let mut rows = Vec::with_capacity(size);
	for index in 0..size {
		// The matrix is sized to the alphabet, so every row is present.
		let row = model.matrix().row(index).expect("matrix sized to alphabet");
		rows.push(row.to_vec());
	}

	let tokens: Vec<String> = model
		.alphabet()
		.elements()
		.iter()
		.map(|element| element_token(*element))
		.collect();
	let lookup: HashMap<String, usize> = tokens
		.iter()
		.enumerate()
		.map(|(index, token)| (token.clone(), index))
		.collect();

	serde_json::json!({
		"matrix": rows,
		"alphabet": tokens,
		"alphabetLookup": lookup,
	})
}

/// Decodes a structural JSON value back into a model.
///
/// # Errors
/// Returns a [`DecodeError`] when a field is missing or has the wrong
/// type, a matrix cell is not a non-negative integer, the matrix is not
/// square with the alphabet's dimension, an alphabet token is invalid, or
/// the lookup disagrees with the alphabet order. A rejected value never
/// produces a partially-constructed model.
pub fn decode(value: serde_json::Value) -> Result<MarkovModel, DecodeError> {
	let serialized: SerializedModel = serde_json::from_value(value)?;
	let expected = serialized.alphabet.len();

	if serialized.matrix.len() != expected {
		return Err(DecodeError::RowCountMismatch {
			rows: serialized.matrix.len(),
			expected,
		});
	}
	for (row, cells) in serialized.matrix.iter().enumerate() {
		if cells.len() != expected {
			return Err(DecodeError::RowLengthMismatch {
				row,
				len: cells.len(),
				expected,
			});
		}
	}
	if serialized.alphabet_lookup.len() != expected {
		return Err(DecodeError::LookupSizeMismatch {
			entries: serialized.alphabet_lookup.len(),
			expected,
		});
	}

	let mut elements = Vec::with_capacity(expected);
	for (position, token) in serialized.alphabet.iter().enumerate() {
		let found = serialized.alphabet_lookup.get(token).copied();
		if found != Some(position) {
			return Err(DecodeError::LookupMismatch {
				token: token.clone(),
				found,
				expected: position,
			});
		}
		elements.push(parse_token(token)?);
	}

	let alphabet = Alphabet::from_elements(elements);
	let matrix = TransitionMatrix::from_rows(&serialized.matrix);
	Ok(MarkovModel::from_parts(alphabet, matrix))
}

/// Renders an element as its persisted token.
fn element_token(element: Element) -> String {
	match element {
		Element::Start => START_TOKEN.to_owned(),
		Element::End => END_TOKEN.to_owned(),
		Element::Character(c) => c.to_string(),
	}
}

/// Parses a persisted token back into an element.
///
/// Only the two sentinel tokens and exactly-one-character strings are
/// valid; anything else is rejected rather than silently truncated.
fn parse_token(token: &str) -> Result<Element, DecodeError> {
	match token {
		START_TOKEN => Ok(Element::Start),
		END_TOKEN => Ok(Element::End),
		_ => {
			let mut chars = token.chars();
			match (chars.next(), chars.next()) {
				(Some(c), None) => Ok(Element::Character(c)),
				_ => Err(DecodeError::InvalidToken { token: token.to_owned() }),
			}
		}
	}
}
