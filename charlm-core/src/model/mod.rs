//! Top-level module for the character-level language model.
//!
//! This module provides:
//! - Observation records for one next character (`CharData`)
//! - Ordered, newest-first record sets for one window (`WindowStats`)
//! - Training and generation over all windows (`LanguageModel`)

/// A single observation record: character, count and probabilities.
pub mod char_data;

/// Ordered set of observation records for one fixed window.
///
/// Supports find-or-update, removal by character, indexed access
/// and probability finalization.
pub mod window_stats;

/// Window-to-statistics mapping with training, sampling and generation.
pub mod language_model;
