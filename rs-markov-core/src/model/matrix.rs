use super::error::ModelError;

/// A square table of observed transition counts.
///
/// Row index is the "from" element, column index is the "to" element, and
/// cell `(r, c)` holds how many times the transition `r -> c` was observed.
/// Storage is a single row-major buffer.
///
/// # Responsibilities
/// - Bounds-checked cell and row access over a fixed N x N layout
/// - Count accumulation during training
/// - Element-wise merging with another matrix of the same dimension
///
/// # Invariants
/// - The dimension is fixed at construction; the matrix is never resized
/// - Counts only ever increase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionMatrix {
	size: usize,
	cells: Vec<u64>,
}

impl TransitionMatrix {
	/// Creates a zeroed matrix of the given dimension.
	pub(crate) fn new(size: usize) -> Self {
		Self { size, cells: vec![0; size * size] }
	}

	/// Creates a matrix from row-major nested rows.
	///
	/// The rows must form a square table; callers validate this before
	/// construction.
	pub(crate) fn from_rows(rows: &[Vec<u64>]) -> Self {
		let size = rows.len();
		let mut cells = Vec::with_capacity(size * size);
		for row in rows {
			cells.extend_from_slice(row);
		}
		Self { size, cells }
	}

	/// Returns the matrix dimension.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Resolves a cell position to its buffer offset, bounds-checked.
	fn offset(&self, row: usize, col: usize) -> Result<usize, ModelError> {
		if row >= self.size || col >= self.size {
			return Err(ModelError::IndexOutOfRange { row, col, size: self.size });
		}
		Ok(row * self.size + col)
	}

	/// Returns the count stored at `(row, col)`.
	///
	/// # Errors
	/// Returns [`ModelError::IndexOutOfRange`] if either index is outside
	/// the matrix.
	pub fn get(&self, row: usize, col: usize) -> Result<u64, ModelError> {
		Ok(self.cells[self.offset(row, col)?])
	}

	/// Stores a count at `(row, col)`.
	///
	/// # Errors
	/// Returns [`ModelError::IndexOutOfRange`] if either index is outside
	/// the matrix.
	pub fn set(&mut self, row: usize, col: usize, value: u64) -> Result<(), ModelError> {
		let offset = self.offset(row, col)?;
		self.cells[offset] = value;
		Ok(())
	}

	/// Increments the count at `(row, col)` by one.
	pub(crate) fn increment(&mut self, row: usize, col: usize) -> Result<(), ModelError> {
		let offset = self.offset(row, col)?;
		self.cells[offset] += 1;
		Ok(())
	}

	/// Returns one full row of counts.
	///
	/// # Errors
	/// Returns [`ModelError::RowOutOfRange`] if `row` is outside the matrix.
	pub fn row(&self, row: usize) -> Result<&[u64], ModelError> {
		if row >= self.size {
			return Err(ModelError::RowOutOfRange { row, size: self.size });
		}
		let start = row * self.size;
		Ok(&self.cells[start..start + self.size])
	}

	/// Adds another matrix's counts into this one, cell by cell.
	///
	/// # Errors
	/// Returns [`ModelError::DimensionMismatch`] if the dimensions differ.
	pub(crate) fn merge(&mut self, other: &Self) -> Result<(), ModelError> {
		if self.size != other.size {
			return Err(ModelError::DimensionMismatch { expected: self.size, got: other.size });
		}
		for (cell, other_cell) in self.cells.iter_mut().zip(&other.cells) {
			*cell += *other_cell;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_matrix_is_all_zero() {
		let matrix = TransitionMatrix::new(4);
		assert_eq!(matrix.size(), 4);
		for row in 0..4 {
			for col in 0..4 {
				assert_eq!(matrix.get(row, col).unwrap(), 0);
			}
		}
	}

	#[test]
	fn set_then_get() {
		let mut matrix = TransitionMatrix::new(3);
		matrix.set(1, 2, 42).unwrap();
		assert_eq!(matrix.get(1, 2).unwrap(), 42);
		// Transposed cell is untouched.
		assert_eq!(matrix.get(2, 1).unwrap(), 0);
	}

	#[test]
	fn increment_accumulates() {
		let mut matrix = TransitionMatrix::new(2);
		matrix.increment(0, 1).unwrap();
		matrix.increment(0, 1).unwrap();
		assert_eq!(matrix.get(0, 1).unwrap(), 2);
	}

	#[test]
	fn out_of_range_access_is_an_error() {
		let mut matrix = TransitionMatrix::new(2);
		assert!(matches!(
			matrix.get(2, 0),
			Err(ModelError::IndexOutOfRange { row: 2, col: 0, size: 2 })
		));
		assert!(matches!(
			matrix.set(0, 5, 1),
			Err(ModelError::IndexOutOfRange { row: 0, col: 5, size: 2 })
		));
		assert!(matches!(
			matrix.row(3),
			Err(ModelError::RowOutOfRange { row: 3, size: 2 })
		));
	}

	#[test]
	fn row_is_row_major() {
		let mut matrix = TransitionMatrix::new(3);
		matrix.set(1, 0, 3).unwrap();
		matrix.set(1, 1, 2).unwrap();
		matrix.set(1, 2, 5).unwrap();
		assert_eq!(matrix.row(1).unwrap(), &[3, 2, 5]);
		assert_eq!(matrix.row(0).unwrap(), &[0, 0, 0]);
	}

	#[test]
	fn merge_adds_cell_by_cell() {
		let mut a = TransitionMatrix::new(2);
		a.set(0, 0, 1).unwrap();
		a.set(1, 1, 2).unwrap();
		let mut b = TransitionMatrix::new(2);
		b.set(0, 0, 3).unwrap();
		b.set(0, 1, 4).unwrap();

		a.merge(&b).unwrap();
		assert_eq!(a.get(0, 0).unwrap(), 4);
		assert_eq!(a.get(0, 1).unwrap(), 4);
		assert_eq!(a.get(1, 1).unwrap(), 2);
	}

	#[test]
	fn merge_rejects_dimension_mismatch() {
		let mut a = TransitionMatrix::new(2);
		let b = TransitionMatrix::new(3);
		assert!(matches!(
			a.merge(&b),
			Err(ModelError::DimensionMismatch { expected: 2, got: 3 })
		));
	}
}
