// Copyright 2025 Irreducible Inc.

use getset::{CopyGetters, Getters};
use t81_store::StoreConfig;
use t81_utils::env::parse_var;

/// Operand length, in digits, from which [`MulStrategy::Auto`] switches to the spectral product.
pub const DEFAULT_SPECTRAL_THRESHOLD: usize = 256;
/// Divisor length, in digits, from which [`DivStrategy::Auto`] switches to reciprocal division.
pub const DEFAULT_RECIPROCAL_THRESHOLD: usize = 128;

const SPECTRAL_THRESHOLD_VAR: &str = "T81_SPECTRAL_THRESHOLD";
const RECIPROCAL_THRESHOLD_VAR: &str = "T81_RECIPROCAL_THRESHOLD";

/// Multiplication algorithm. Every choice yields the same product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MulStrategy {
	/// Spectral once the shorter operand reaches the spectral threshold, schoolbook below it.
	#[default]
	Auto,
	Schoolbook,
	/// Floating-point convolution. Falls back to schoolbook when its rounding bound fails.
	Spectral,
}

/// Division algorithm. Every choice yields the same quotient and remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DivStrategy {
	/// Reciprocal once the divisor reaches the reciprocal threshold, long division below it.
	#[default]
	Auto,
	Long,
	/// Newton reciprocal. Falls back to long division when its correction bound is exceeded.
	Reciprocal,
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct EngineConfig {
	#[getset(get = "pub")]
	store: StoreConfig,
	#[getset(get_copy = "pub")]
	mul_strategy: MulStrategy,
	#[getset(get_copy = "pub")]
	div_strategy: DivStrategy,
	#[getset(get_copy = "pub")]
	spectral_threshold: usize,
	#[getset(get_copy = "pub")]
	reciprocal_threshold: usize,
}

impl EngineConfig {
	/// The defaults, overridden by `T81_MMAP_THRESHOLD`, `T81_TMPDIR`, `T81_SPECTRAL_THRESHOLD`
	/// and `T81_RECIPROCAL_THRESHOLD` where set.
	pub fn from_env() -> Self {
		let mut config = Self {
			store: StoreConfig::from_env(),
			..Self::default()
		};
		if let Some(threshold) = parse_var(SPECTRAL_THRESHOLD_VAR) {
			config.spectral_threshold = threshold;
		}
		if let Some(threshold) = parse_var(RECIPROCAL_THRESHOLD_VAR) {
			config.reciprocal_threshold = threshold;
		}
		config
	}

	pub fn with_store(mut self, store: StoreConfig) -> Self {
		self.store = store;
		self
	}

	pub fn with_mul_strategy(mut self, strategy: MulStrategy) -> Self {
		self.mul_strategy = strategy;
		self
	}

	pub fn with_div_strategy(mut self, strategy: DivStrategy) -> Self {
		self.div_strategy = strategy;
		self
	}

	pub fn with_spectral_threshold(mut self, digits: usize) -> Self {
		self.spectral_threshold = digits;
		self
	}

	pub fn with_reciprocal_threshold(mut self, digits: usize) -> Self {
		self.reciprocal_threshold = digits;
		self
	}

	pub(crate) fn resolve_mul(
		&self,
		strategy: MulStrategy,
		lhs_len: usize,
		rhs_len: usize,
	) -> MulStrategy {
		match strategy {
			MulStrategy::Auto if lhs_len.min(rhs_len) >= self.spectral_threshold => {
				MulStrategy::Spectral
			}
			MulStrategy::Auto => MulStrategy::Schoolbook,
			strategy => strategy,
		}
	}

	pub(crate) fn resolve_div(&self, strategy: DivStrategy, divisor_len: usize) -> DivStrategy {
		match strategy {
			DivStrategy::Auto if divisor_len >= self.reciprocal_threshold => DivStrategy::Reciprocal,
			DivStrategy::Auto => DivStrategy::Long,
			strategy => strategy,
		}
	}
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			store: StoreConfig::default(),
			mul_strategy: MulStrategy::Auto,
			div_strategy: DivStrategy::Auto,
			spectral_threshold: DEFAULT_SPECTRAL_THRESHOLD,
			reciprocal_threshold: DEFAULT_RECIPROCAL_THRESHOLD,
		}
	}
}
