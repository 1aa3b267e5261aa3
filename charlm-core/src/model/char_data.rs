use std::fmt;

/// Observation record for one character seen after a given window.
///
/// `probability` and `cumulative_probability` are only meaningful once
/// the owning `WindowStats` has been finalized; until then they are `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct CharData {
	character: char,
	count: usize,
	probability: f64,
	cumulative_probability: f64,
}

impl CharData {
	/// Creates a record for `character` with a count of 1.
	pub fn new(character: char) -> Self {
		Self {
			character,
			count: 1,
			probability: 0.0,
			cumulative_probability: 0.0,
		}
	}

	pub fn character(&self) -> char {
		self.character
	}

	/// Number of times the character followed the window.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn probability(&self) -> f64 {
		self.probability
	}

	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}

	/// Returns `true` if this record holds `character`.
	pub fn is(&self, character: char) -> bool {
		self.character == character
	}

	pub(crate) fn increment(&mut self) {
		self.count += 1;
	}

	pub(crate) fn set_probabilities(&mut self, probability: f64, cumulative_probability: f64) {
		self.probability = probability;
		self.cumulative_probability = cumulative_probability;
	}
}

/// Renders as `(c count p cp)`, e.g. `(a 1 0.5 0.5)`.
impl fmt::Display for CharData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({} {} {:?} {:?})",
			self.character, self.count, self.probability, self.cumulative_probability
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_record() {
		let data = CharData::new('x');
		assert_eq!(data.character(), 'x');
		assert_eq!(data.count(), 1);
		assert_eq!(data.probability(), 0.0);
		assert_eq!(data.cumulative_probability(), 0.0);
		assert!(data.is('x'));
		assert!(!data.is('y'));
	}

	#[test]
	fn test_display() {
		let mut data = CharData::new('a');
		assert_eq!(data.to_string(), "(a 1 0.0 0.0)");
		data.increment();
		data.set_probabilities(0.5, 1.0);
		assert_eq!(data.to_string(), "(a 2 0.5 1.0)");
	}
}
