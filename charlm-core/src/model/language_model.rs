use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::Path;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::char_data::CharData;
use super::window_stats::WindowStats;
use crate::error::ModelError;
use crate::io::{last_n_chars, read_chars};

/// Construction parameters for a `LanguageModel`.
///
/// - `window_length`: number of preceding characters used as context (>= 1)
/// - `seed`: `Some(seed)` for reproducible generation, `None` to seed
///   from the operating system
#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
	pub window_length: usize,
	pub seed: Option<u64>,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self { window_length: 1, seed: None }
	}
}

/// Character-level n-gram language model.
///
/// Maps every window of `window_length` characters seen during training
/// to the statistics of the character that followed it, and generates
/// text by walking those windows with weighted random sampling.
///
/// # Responsibilities
/// - Count next-character occurrences over a sliding window
/// - Turn counts into cumulative probabilities
/// - Sample characters and extend a text window by window
///
/// # Invariants
/// - `window_length >= 1`, fixed at construction
/// - Every key in `windows` is exactly `window_length` characters long
/// - Every `WindowStats` in `windows` holds at least one record
///
/// Windows are kept in a `BTreeMap` so the textual dump is stable.
#[derive(Debug)]
pub struct LanguageModel {
	window_length: usize,
	windows: BTreeMap<String, WindowStats>,
	rng: StdRng,
}

impl LanguageModel {
	/// Creates a model seeded from the operating system.
	///
	/// Generating multiple times produces different texts.
	///
	/// # Errors
	/// Returns an error if `window_length == 0`.
	pub fn new(window_length: usize) -> Result<Self, ModelError> {
		Self::from_config(&ModelConfig { window_length, seed: None })
	}

	/// Creates a model with a fixed seed.
	///
	/// Two models built with the same seed, trained on the same text and
	/// asked the same thing generate the same output.
	///
	/// # Errors
	/// Returns an error if `window_length == 0`.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self, ModelError> {
		Self::from_config(&ModelConfig { window_length, seed: Some(seed) })
	}

	/// Creates a model from a `ModelConfig`.
	///
	/// # Errors
	/// Returns an error if `config.window_length == 0`.
	pub fn from_config(config: &ModelConfig) -> Result<Self, ModelError> {
		if config.window_length == 0 {
			return Err(ModelError::InvalidWindowLength(config.window_length));
		}
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Ok(Self {
			window_length: config.window_length,
			windows: BTreeMap::new(),
			rng,
		})
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct windows learned.
	pub fn len(&self) -> usize {
		self.windows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	/// Statistics of the characters that followed `window`, if it was seen.
	pub fn window_stats(&self, window: &str) -> Option<&WindowStats> {
		self.windows.get(window)
	}

	/// Iterates over `(window, stats)` pairs in window order.
	pub fn windows(&self) -> impl Iterator<Item = (&str, &WindowStats)> {
		self.windows.iter().map(|(window, stats)| (window.as_str(), stats))
	}

	/// Builds the model from a character source.
	///
	/// # Behavior
	/// - The first `window_length` characters form the initial window.
	/// - Every following character is counted against the current window,
	///   then the window slides by one.
	/// - Probabilities of every window are computed once the source is
	///   exhausted.
	///
	/// # Notes
	/// - A source shorter than `window_length` adds nothing.
	/// - Training again adds to the existing counts; the window restarts
	///   at the beginning of the new source.
	pub fn train<I>(&mut self, source: I)
	where
		I: IntoIterator<Item = char>,
	{
		let mut source = source.into_iter();

		let mut window: String = source.by_ref().take(self.window_length).collect();
		if window.chars().count() < self.window_length {
			debug!("source shorter than window length {}, nothing to learn", self.window_length);
			return;
		}

		let mut observed = 0usize;
		for c in source {
			match self.windows.get_mut(&window) {
				Some(stats) => stats.update(c),
				None => {
					let mut stats = WindowStats::new();
					stats.update(c);
					self.windows.insert(window.clone(), stats);
				}
			}
			window.remove(0);
			window.push(c);
			observed += 1;
		}

		for stats in self.windows.values_mut() {
			Self::calculate_probabilities(stats);
		}

		debug!(
			"trained on {} transitions, {} distinct windows of length {}",
			observed,
			self.windows.len(),
			self.window_length
		);
	}

	/// Builds the model from the characters of a text file.
	///
	/// # Errors
	/// Returns an error if the file cannot be read.
	pub fn train_file<P: AsRef<Path>>(&mut self, filename: P) -> io::Result<()> {
		let chars = read_chars(&filename)?;
		debug!("read {} characters from {}", chars.len(), filename.as_ref().display());
		self.train(chars);
		Ok(())
	}

	/// Computes the probability and cumulative probability of every record
	/// of `probs`.
	pub fn calculate_probabilities(probs: &mut WindowStats) {
		probs.finalize();
	}

	/// Draws a character from `stats` using inverse-CDF sampling.
	///
	/// # Errors
	/// `ModelError::SamplingFailed` if no record reaches the drawn value,
	/// which means `stats` is empty or was never finalized.
	pub fn sample_character(&mut self, stats: &WindowStats) -> Result<char, ModelError> {
		Self::sample(&mut self.rng, stats)
	}

	/// Returns the first record, in enumeration order, whose cumulative
	/// probability reaches a uniform draw in `[0, 1)`.
	fn sample(rng: &mut StdRng, stats: &WindowStats) -> Result<char, ModelError> {
		let draw: f64 = rng.random();
		stats
			.iter()
			.find(|data| data.cumulative_probability() >= draw)
			.map(CharData::character)
			.ok_or(ModelError::SamplingFailed { draw })
	}

	/// Generates text from the learned probabilities.
	///
	/// # Parameters
	/// - `initial_text`: text to start from. Its last `window_length`
	///   characters form the first window.
	/// - `target_length`: maximum length of the result, in characters,
	///   `initial_text` included.
	///
	/// # Returns
	/// - `initial_text` unchanged if it is shorter than the window.
	/// - Otherwise, `initial_text` extended one sampled character at a time
	///   until `target_length` is reached or the current window was never
	///   seen during training.
	///
	/// # Errors
	/// `ModelError::SamplingFailed` if a window's probabilities are broken.
	pub fn generate(&mut self, initial_text: &str, target_length: usize) -> Result<String, ModelError> {
		let mut length = initial_text.chars().count();
		if length < self.window_length {
			return Ok(initial_text.to_owned());
		}

		let mut generated = initial_text.to_owned();
		let mut window = last_n_chars(initial_text, self.window_length).to_owned();

		while length < target_length {
			let Some(stats) = self.windows.get(&window) else {
				debug!("window {:?} never seen, stopping at {} characters", window, length);
				break;
			};

			let next_char = Self::sample(&mut self.rng, stats)?;
			trace!("{:?} -> {:?}", window, next_char);
			generated.push(next_char);
			length += 1;

			window.remove(0);
			window.push(next_char);
		}

		Ok(generated)
	}
}

/// One line per window: `window : (records)`.
impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, stats) in &self.windows {
			writeln!(f, "{} : {}", window, stats)?;
		}
		Ok(())
	}
}
