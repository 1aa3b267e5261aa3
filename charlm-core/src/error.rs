use std::fmt;

/// Errors raised by the language model and its window statistics.
///
/// Stopping generation on an unseen window is not an error and has no
/// variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
	/// The window length must be at least 1.
	InvalidWindowLength(usize),

	/// Indexed access past the end of a `WindowStats`.
	IndexOutOfBounds { index: usize, len: usize },

	/// No record reached the drawn value while sampling.
	///
	/// Only possible if the cumulative probabilities of a window were
	/// never finalized or are corrupted.
	SamplingFailed { draw: f64 },
}

impl fmt::Display for ModelError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ModelError::InvalidWindowLength(n) => {
				write!(f, "window length must be >= 1, got {}", n)
			}
			ModelError::IndexOutOfBounds { index, len } => {
				write!(f, "index {} out of bounds for {} records", index, len)
			}
			ModelError::SamplingFailed { draw } => {
				write!(f, "no record with cumulative probability >= {}", draw)
			}
		}
	}
}

impl std::error::Error for ModelError {}
