use std::collections::VecDeque;
use std::fmt;

use super::char_data::CharData;
use crate::error::ModelError;

/// Observation records for the characters seen after one fixed window.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges are
/// weighted by their number of observations, kept in a fixed enumeration
/// order.
///
/// ## Ordering
/// New characters are inserted at the front, so records enumerate
/// newest-first. Sampling walks the records in this order, which decides
/// which record wins at cumulative-probability boundaries.
///
/// ## Invariants
/// - At most one record per distinct character
/// - Every count is strictly positive
/// - After `finalize`, cumulative probabilities are non-decreasing and the
///   last one is 1.0 (within floating-point tolerance)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowStats {
	records: VecDeque<CharData>,
}

impl WindowStats {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self { records: VecDeque::new() }
	}

	/// Number of distinct characters recorded.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Returns the first record in enumeration order, if any.
	pub fn first(&self) -> Option<&CharData> {
		self.records.front()
	}

	/// Inserts a fresh record for `character` at the front.
	///
	/// Does not check for an existing record; use `update` to keep one
	/// record per character.
	pub fn add_first(&mut self, character: char) {
		self.records.push_front(CharData::new(character));
	}

	/// Records one occurrence of `character`.
	///
	/// - If a record exists, its count is incremented.
	/// - Otherwise a new record with a count of 1 is added at the front.
	pub fn update(&mut self, character: char) {
		match self.records.iter_mut().find(|data| data.is(character)) {
			Some(data) => data.increment(),
			None => self.add_first(character),
		}
	}

	/// Removes the record for `character`.
	///
	/// Returns `false` and leaves the set untouched if there is none.
	pub fn remove(&mut self, character: char) -> bool {
		match self.index_of(character) {
			Some(index) => self.records.remove(index).is_some(),
			None => false,
		}
	}

	/// Position of the record for `character` in enumeration order.
	pub fn index_of(&self, character: char) -> Option<usize> {
		self.records.iter().position(|data| data.is(character))
	}

	/// Record for `character`, if any.
	pub fn find(&self, character: char) -> Option<&CharData> {
		self.records.iter().find(|data| data.is(character))
	}

	/// Returns the record at `index`.
	///
	/// # Errors
	/// `ModelError::IndexOutOfBounds` if `index >= len()`.
	pub fn get(&self, index: usize) -> Result<&CharData, ModelError> {
		self.records.get(index).ok_or(ModelError::IndexOutOfBounds {
			index,
			len: self.records.len(),
		})
	}

	/// Iterates over the records in enumeration order.
	pub fn iter(&self) -> impl Iterator<Item = &CharData> {
		self.records.iter()
	}

	/// Iterates over the records starting at `index`.
	///
	/// Yields nothing if `index` is past the end.
	pub fn iter_from(&self, index: usize) -> impl Iterator<Item = &CharData> {
		self.records.iter().skip(index)
	}

	/// Copies the records into a plain vector, in enumeration order.
	pub fn to_vec(&self) -> Vec<CharData> {
		self.records.iter().cloned().collect()
	}

	/// Computes `probability` and `cumulative_probability` of every record.
	///
	/// - `probability = count / total`
	/// - `cumulative_probability` is the running sum in enumeration order
	///
	/// Recomputed from counts each time, so calling it again without an
	/// intervening `update` yields identical values. Does nothing on an
	/// empty set.
	pub fn finalize(&mut self) {
		let total: usize = self.records.iter().map(CharData::count).sum();
		if total == 0 {
			return;
		}

		let mut running = 0.0;
		for data in self.records.iter_mut() {
			let probability = data.count() as f64 / total as f64;
			running += probability;
			data.set_probabilities(probability, running);
		}
	}
}

impl<'a> IntoIterator for &'a WindowStats {
	type Item = &'a CharData;
	type IntoIter = std::collections::vec_deque::Iter<'a, CharData>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}

/// Renders as `(r1 r2 ...)` with each record as `(c count p cp)`.
impl fmt::Display for WindowStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, data) in self.records.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", data)?;
		}
		write!(f, ")")
	}
}
