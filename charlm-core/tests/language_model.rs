use charlm_core::{CharData, LanguageModel, ModelConfig, ModelError};

const CORPUS: &str = "It was the best of times, it was the worst of times, \
	it was the age of wisdom, it was the age of foolishness, \
	it was the epoch of belief, it was the epoch of incredulity.";

fn temp_corpus(name: &str, contents: &str) -> std::path::PathBuf {
	let path = std::env::temp_dir().join(format!("charlm-{}-{}.txt", name, std::process::id()));
	std::fs::write(&path, contents).unwrap();
	path
}

#[test]
fn test_train_file_matches_train() {
	let path = temp_corpus("train-file", CORPUS);

	let mut from_file = LanguageModel::with_seed(3, 20).unwrap();
	from_file.train_file(&path).unwrap();
	std::fs::remove_file(&path).unwrap();

	let mut from_chars = LanguageModel::with_seed(3, 20).unwrap();
	from_chars.train(CORPUS.chars());

	assert_eq!(from_file.to_string(), from_chars.to_string());
	assert_eq!(
		from_file.generate("it was", 120).unwrap(),
		from_chars.generate("it was", 120).unwrap()
	);
}

#[test]
fn test_train_file_missing() {
	let mut model = LanguageModel::new(2).unwrap();
	assert!(model.train_file("/definitely/not/here.txt").is_err());
	assert!(model.is_empty());
}

#[test]
fn test_generated_windows_were_learned() {
	let mut model = LanguageModel::from_config(&ModelConfig { window_length: 4, seed: Some(9) }).unwrap();
	model.train(CORPUS.chars());

	let text = model.generate("it w", 200).unwrap();
	assert!(text.chars().count() <= 200);

	// Every generated character followed a window seen in training
	let chars: Vec<char> = text.chars().collect();
	for i in 4..chars.len() {
		let window: String = chars[i - 4..i].iter().collect();
		let stats = model.window_stats(&window).unwrap();
		assert!(stats.find(chars[i]).is_some());
	}
}

#[test]
fn test_same_seed_same_output() {
	let mut outputs = Vec::new();
	for _ in 0..2 {
		let mut model = LanguageModel::with_seed(2, 1234).unwrap();
		model.train(CORPUS.chars());
		outputs.push(model.generate("it", 150).unwrap());
	}
	assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_every_window_is_a_distribution() {
	let mut model = LanguageModel::with_seed(1, 5).unwrap();
	model.train(CORPUS.chars());

	for (_, stats) in model.windows() {
		let records = stats.to_vec();
		assert!(!records.is_empty());
		let sum: f64 = records.iter().map(CharData::probability).sum();
		assert!((sum - 1.0).abs() < 1e-9);
		for pair in records.windows(2) {
			assert!(pair[0].cumulative_probability() <= pair[1].cumulative_probability());
		}
		assert!((records[records.len() - 1].cumulative_probability() - 1.0).abs() < 1e-9);
	}
}

#[test]
fn test_index_out_of_bounds_is_reported() {
	let mut model = LanguageModel::with_seed(1, 5).unwrap();
	model.train("aabc".chars());
	let stats = model.window_stats("a").unwrap();
	assert!(matches!(stats.get(2), Err(ModelError::IndexOutOfBounds { index: 2, len: 2 })));
}
