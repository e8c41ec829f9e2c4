use rand::Rng;

use super::element::Element;
use super::generation_input::GenerationInput;
use super::markov_model::MarkovModel;

/// Generates a phrase by weighted random walk over the model.
///
/// The walk starts at the start marker and repeatedly samples the next
/// element from the current element's matrix row, with probability
/// proportional to each observed count. Characters are appended to the
/// output; drawing either sentinel ends the walk, and the sentinel never
/// lands in the output.
///
/// The walk also ends, returning the output produced so far, when:
/// - the output reaches `input.max_length()` characters, or
/// - the current element has no row to sample from, either because it is
///   outside the alphabet or because its row has no observed transitions.
///
/// Randomness comes entirely from `rng`, so a seeded generator reproduces
/// the same phrase from the same model.
pub fn phrase(input: &GenerationInput, model: &MarkovModel, rng: &mut impl Rng) -> String {
	let mut output = String::new();
	let mut current = Element::Start;
	let mut steps = 0;

	while steps < input.max_length() {
		match next_element(model, current, rng) {
			Element::Character(c) => {
				output.push(c);
				current = Element::Character(c);
				steps += 1;
			}
			// Sentinels end the walk and are discarded.
			Element::Start | Element::End => break,
		}
	}

	output
}

/// Samples the next element from the current element's row.
///
/// An element outside the alphabet has no row; the only candidate left is
/// the end marker. A row whose counts are all zero is treated the same
/// way: the walk has nowhere to go, so the end marker is returned.
fn next_element(model: &MarkovModel, current: Element, rng: &mut impl Rng) -> Element {
	let Some(row_index) = model.alphabet().index_of(current) else {
		return Element::End;
	};
	// The matrix is sized to the alphabet, so the row is always present.
	let row = model
		.matrix()
		.row(row_index)
		.expect("matrix sized to alphabet");

	let total: u64 = row.iter().sum();
	if total == 0 {
		return Element::End;
	}

	// Weighted random choice: walk the row, subtracting each weight from
	// the draw until it lands in a bucket.
	let mut draw = rng.random_range(0..total);
	for (element, weight) in model.alphabet().elements().iter().zip(row) {
		if draw < *weight {
			return *element;
		}
		draw -= *weight;
	}

	// The draw is strictly below the row total, so a bucket always matches.
	Element::End
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn settings(max_length: usize) -> GenerationInput {
		GenerationInput::new(max_length).unwrap()
	}

	#[test]
	fn untrained_model_generates_the_empty_phrase() {
		let model = MarkovModel::empty(&['a', 'b']);
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(phrase(&settings(10), &model, &mut rng), "");
	}

	#[test]
	fn output_never_exceeds_max_length() {
		// 'a' only ever transitions to itself, so every walk runs into the cap.
		let mut model = MarkovModel::empty(&['a']);
		model.add(Element::Start, Element::Character('a'));
		model.add(Element::Character('a'), Element::Character('a'));

		let mut rng = StdRng::seed_from_u64(7);
		for max_length in 1..=20 {
			let result = phrase(&settings(max_length), &model, &mut rng);
			assert_eq!(result.chars().count(), max_length);
		}
	}

	#[test]
	fn deterministic_with_seed() {
		let mut model = MarkovModel::empty(&['a', 'n', 'b', 'o', 'd']);
		model.add_list(&["anna", "bob", "ada", "band"]);

		let mut rng1 = StdRng::seed_from_u64(42);
		let result1 = phrase(&settings(16), &model, &mut rng1);

		let mut rng2 = StdRng::seed_from_u64(42);
		let result2 = phrase(&settings(16), &model, &mut rng2);

		assert_eq!(result1, result2);
	}

	#[test]
	fn all_zero_row_ends_the_walk_immediately() {
		// Start always moves to 'x', and 'x' was never observed leaving.
		let mut model = MarkovModel::empty(&['x']);
		model.add(Element::Start, Element::Character('x'));

		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			assert_eq!(phrase(&settings(10), &model, &mut rng), "x");
		}
	}

	#[test]
	fn unknown_element_falls_back_to_end() {
		let model = MarkovModel::empty(&['a']);
		let mut rng = StdRng::seed_from_u64(3);
		let next = next_element(&model, Element::Character('z'), &mut rng);
		assert_eq!(next, Element::End);
	}

	#[test]
	fn trained_walk_ends_at_the_end_marker() {
		// Single training string and no branching: the walk replays it.
		let mut model = MarkovModel::empty(&['c', 'a', 't']);
		model.add_list(&["cat"]);

		let mut rng = StdRng::seed_from_u64(0);
		assert_eq!(phrase(&settings(10), &model, &mut rng), "cat");
	}

	#[test]
	fn sampling_follows_row_weights() {
		// a's outgoing counts are (a: 1, b: 2, c: 1), so the second
		// character lands on a/b/c with probability 1/4, 1/2, 1/4.
		let mut model = MarkovModel::empty(&['a', 'b', 'c']);
		let a = Element::Character('a');
		model.add(Element::Start, a);
		model.add(a, Element::Character('a'));
		model.add(a, Element::Character('b'));
		model.add(a, Element::Character('b'));
		model.add(a, Element::Character('c'));

		let n = 10_000;
		let mut counts = [0usize; 3];
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..n {
			let result = phrase(&settings(2), &model, &mut rng);
			let mut chars = result.chars();
			assert_eq!(chars.next(), Some('a'));
			match chars.next() {
				Some('a') => counts[0] += 1,
				Some('b') => counts[1] += 1,
				Some('c') => counts[2] += 1,
				other => panic!("unexpected second character: {other:?}"),
			}
		}

		let f_a = counts[0] as f64 / n as f64;
		let f_b = counts[1] as f64 / n as f64;
		let f_c = counts[2] as f64 / n as f64;
		assert!((f_a - 0.25).abs() < 0.03, "a frequency: {f_a}, expected ~0.25");
		assert!((f_b - 0.50).abs() < 0.03, "b frequency: {f_b}, expected ~0.5");
		assert!((f_c - 0.25).abs() < 0.03, "c frequency: {f_c}, expected ~0.25");
	}
}
