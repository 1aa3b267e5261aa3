use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use charlm_core::{LanguageModel, ModelConfig};

/// Seed used by `fixed` mode when `--seed` is not given.
const DEFAULT_SEED: u64 = 20;

/// How the model's random source is seeded.
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Mode {
	/// Seeded from the operating system, output changes on every run
	Random,
	/// Fixed seed, output is reproducible
	Fixed,
}

/// Train a character-level n-gram model on a text file, then generate text.
#[derive(Parser, Debug)]
#[command(name = "charlm", version)]
struct Cli {
	/// Number of preceding characters used as context
	#[arg(value_parser = clap::value_parser!(u64).range(1..))]
	window_length: u64,

	/// Text to start generating from
	initial_text: String,

	/// Maximum length of the generated text, initial text included
	target_length: usize,

	/// Seeding mode
	#[arg(value_enum)]
	mode: Mode,

	/// Training text file
	training_file: PathBuf,

	/// Seed used in `fixed` mode
	#[arg(long, default_value_t = DEFAULT_SEED)]
	seed: u64,
}

impl Cli {
	fn model_config(&self) -> ModelConfig {
		ModelConfig {
			window_length: self.window_length as usize,
			seed: match self.mode {
				Mode::Random => None,
				Mode::Fixed => Some(self.seed),
			},
		}
	}

	fn run(self) -> Result<String> {
		let mut model = LanguageModel::from_config(&self.model_config())?;

		model
			.train_file(&self.training_file)
			.with_context(|| format!("failed to read training file {}", self.training_file.display()))?;
		info!("learned {} windows from {}", model.len(), self.training_file.display());

		Ok(model.generate(&self.initial_text, self.target_length)?)
	}
}

fn main() -> Result<()> {
	env_logger::init();

	let text = Cli::parse().run()?;
	println!("{}", text);

	Ok(())
}
