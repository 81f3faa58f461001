// Copyright 2025 Irreducible Inc.

use std::path::{Path, PathBuf};

use getset::{CopyGetters, Getters};
use t81_utils::env::parse_var;

/// Stores of at least this many bytes are memory-mapped instead of heap-allocated.
pub const DEFAULT_MMAP_THRESHOLD: usize = 500 * 1024;

const MMAP_THRESHOLD_VAR: &str = "T81_MMAP_THRESHOLD";
const TEMP_DIR_VAR: &str = "T81_TMPDIR";

/// Allocation policy for [`DigitAllocator`](crate::DigitAllocator).
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct StoreConfig {
	/// Byte size at which allocations switch from the heap to a mapped temporary file.
	#[getset(get_copy = "pub")]
	mmap_threshold: usize,
	/// Directory in which mapped allocations create their (immediately unlinked) files.
	#[getset(get = "pub")]
	temp_dir: PathBuf,
}

impl StoreConfig {
	/// Builds a configuration from the defaults, overridden by `T81_MMAP_THRESHOLD` and
	/// `T81_TMPDIR` when those are set.
	pub fn from_env() -> Self {
		let mut config = Self::default();
		if let Some(threshold) = parse_var::<usize>(MMAP_THRESHOLD_VAR) {
			config.mmap_threshold = threshold;
		}
		if let Some(dir) = parse_var::<PathBuf>(TEMP_DIR_VAR) {
			config.temp_dir = dir;
		}
		config
	}

	pub fn with_mmap_threshold(mut self, bytes: usize) -> Self {
		self.mmap_threshold = bytes;
		self
	}

	pub fn with_temp_dir(mut self, dir: impl AsRef<Path>) -> Self {
		self.temp_dir = dir.as_ref().to_path_buf();
		self
	}

	/// A configuration that never maps, whatever the requested size.
	pub fn heap_only() -> Self {
		Self::default().with_mmap_threshold(usize::MAX)
	}

	pub(crate) fn wants_mapping(&self, bytes: usize) -> bool {
		bytes >= self.mmap_threshold
	}
}

impl Default for StoreConfig {
	fn default() -> Self {
		Self {
			mmap_threshold: DEFAULT_MMAP_THRESHOLD,
			temp_dir: std::env::temp_dir(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_threshold() {
		let config = StoreConfig::default();
		assert_eq!(config.mmap_threshold(), 500 * 1024);
		assert!(!config.wants_mapping(500 * 1024 - 1));
		assert!(config.wants_mapping(500 * 1024));
	}

	#[test]
	fn test_heap_only_never_maps() {
		assert!(!StoreConfig::heap_only().wants_mapping(usize::MAX - 1));
	}

	#[test]
	fn test_builders() {
		let config = StoreConfig::default()
			.with_mmap_threshold(16)
			.with_temp_dir("/nonexistent");
		assert_eq!(config.mmap_threshold(), 16);
		assert_eq!(config.temp_dir(), Path::new("/nonexistent"));
	}
}
