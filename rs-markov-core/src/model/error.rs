//! Error types for the rs-markov-core crate.

/// Error type for structural failures and invalid inputs.
///
/// These are conditions a correct caller never triggers through the model's
/// own element-addressed operations; they surface on the index-addressed
/// matrix accessors, on merging incompatible models, and on invalid
/// generation settings.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
	/// Returned when a matrix cell access is out of range.
	#[error("matrix index ({row}, {col}) is out of range for size {size}")]
	IndexOutOfRange {
		/// Requested row.
		row: usize,
		/// Requested column.
		col: usize,
		/// Matrix dimension.
		size: usize,
	},

	/// Returned when a matrix row access is out of range.
	#[error("matrix row {row} is out of range for size {size}")]
	RowOutOfRange {
		/// Requested row.
		row: usize,
		/// Matrix dimension.
		size: usize,
	},

	/// Returned when merging matrices of different dimensions.
	#[error("matrix dimension mismatch: expected {expected}, got {got}")]
	DimensionMismatch {
		/// Dimension of the receiving matrix.
		expected: usize,
		/// Dimension of the other matrix.
		got: usize,
	},

	/// Returned when merging models built from different alphabets.
	#[error("models were built from different alphabets")]
	AlphabetMismatch,

	/// Returned when a generation length cap is zero.
	#[error("max length must be at least 1, got {got}")]
	InvalidMaxLength {
		/// The invalid value.
		got: usize,
	},
}

/// Error type for every way a serialized model value can be rejected.
///
/// Decoding either reconstructs a fully consistent model or fails with one
/// of these variants; it never returns a partially-constructed model.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	/// Returned when the value is missing a field or a field has the wrong
	/// type, including non-integer or negative matrix cells.
	#[error("malformed model value: {0}")]
	Malformed(#[from] serde_json::Error),

	/// Returned for an alphabet token that is not `"start"`, `"end"`, or a
	/// single character.
	#[error("invalid alphabet token {token:?}")]
	InvalidToken {
		/// The rejected token.
		token: String,
	},

	/// Returned when the matrix row count differs from the alphabet length.
	#[error("matrix has {rows} rows, alphabet has {expected} elements")]
	RowCountMismatch {
		/// Number of rows in the value.
		rows: usize,
		/// Alphabet length.
		expected: usize,
	},

	/// Returned when a matrix row differs in length from the alphabet.
	#[error("matrix row {row} has {len} columns, expected {expected}")]
	RowLengthMismatch {
		/// Index of the offending row.
		row: usize,
		/// Length of the offending row.
		len: usize,
		/// Alphabet length.
		expected: usize,
	},

	/// Returned when the lookup table has a different entry count than the
	/// alphabet.
	#[error("alphabet lookup has {entries} entries, alphabet has {expected} elements")]
	LookupSizeMismatch {
		/// Number of lookup entries.
		entries: usize,
		/// Alphabet length.
		expected: usize,
	},

	/// Returned when a lookup entry disagrees with the alphabet order.
	#[error("alphabet lookup maps {token:?} to {found:?}, expected {expected}")]
	LookupMismatch {
		/// The token whose entry disagrees.
		token: String,
		/// The index found in the lookup, if any.
		found: Option<usize>,
		/// The token's position in the alphabet sequence.
		expected: usize,
	},
}
