use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a text file and returns all of its characters, in order.
///
/// - Reads the entire file into memory
/// - Line terminators are kept, they are part of the training text
pub fn read_chars<P: AsRef<Path>>(filename: P) -> io::Result<Vec<char>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.chars().collect())
}

/// Returns the last `n` characters of a string.
///
/// If `n` is greater than the number of characters in `s`, the entire
/// string is returned. UTF-8 safe.
pub(crate) fn last_n_chars(s: &str, n: usize) -> &str {
	let count = s.chars().count();
	if n >= count {
		return s;
	}
	match s.char_indices().nth(count - n) {
		Some((start, _)) => &s[start..],
		None => &s[s.len()..],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_last_n_chars() {
		assert_eq!(last_n_chars("hello", 2), "lo");
		assert_eq!(last_n_chars("hello", 5), "hello");
		assert_eq!(last_n_chars("hi", 7), "hi");
		assert_eq!(last_n_chars("héllo", 4), "éllo");
		assert_eq!(last_n_chars("abc", 0), "");
	}

	#[test]
	fn test_read_chars_keeps_newlines() {
		let path = std::env::temp_dir().join(format!("charlm-io-{}.txt", std::process::id()));
		std::fs::write(&path, "ab\ncd\r\n").unwrap();
		let chars = read_chars(&path).unwrap();
		std::fs::remove_file(&path).unwrap();
		assert_eq!(chars, vec!['a', 'b', '\n', 'c', 'd', '\r', '\n']);
	}

	#[test]
	fn test_read_chars_missing_file() {
		assert!(read_chars("/definitely/not/here.txt").is_err());
	}
}
