//! Character-level n-gram language model.
//!
//! This crate provides:
//! - Per-window observation sets with newest-first ordering
//! - Sliding-window training over any character source
//! - Inverse-CDF sampling and seeded, reproducible text generation
//! - A small file-backed character source
//!
//! The model is single-threaded: one `LanguageModel` owns its random
//! source and is meant to be used by one caller at a time.

/// Language model, window statistics and observation records.
pub mod model;

/// Error type shared by the model components.
pub mod error;

/// I/O utilities (training source loading).
pub mod io;

pub use error::ModelError;
pub use model::char_data::CharData;
pub use model::language_model::{LanguageModel, ModelConfig};
pub use model::window_stats::WindowStats;
