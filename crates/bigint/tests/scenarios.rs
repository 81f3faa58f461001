// Copyright 2025 Irreducible Inc.

use std::{cmp::Ordering, sync::Arc};

use t81_bigint::{
	DivStrategy, Engine, EngineConfig, Error, MulStrategy, Notation, ParseError, compare,
	compare_magnitude,
};
use t81_store::{BackingKind, StoreConfig, StoreStats};

#[test]
fn test_documented_scenarios() {
	let engine = Engine::default();

	let sum = engine
		.add(&engine.parse("102").unwrap(), &engine.parse("21").unwrap())
		.unwrap();
	assert_eq!(sum.to_string(), "123");

	let product = engine
		.mul(&engine.parse("12").unwrap(), &engine.parse("21").unwrap())
		.unwrap();
	assert_eq!(product, engine.from_i64(83 * 163).unwrap());

	// 3^4 is the radix itself: a one followed by a single zero digit.
	let power = engine.pow(&engine.parse("3").unwrap(), 4).unwrap();
	assert_eq!(power, engine.from_i64(81).unwrap());
	assert_eq!(power.to_string(), "10");

	let gcd = engine
		.gcd(&engine.from_i64(12).unwrap(), &engine.from_i64(18).unwrap())
		.unwrap();
	assert_eq!(gcd, engine.from_i64(6).unwrap());

	assert!(matches!(
		engine.parse_with("1X2", Notation::BalancedTernary),
		Err(Error::InvalidInput(ParseError::InvalidDigit { ch: 'X', .. }))
	));
}

#[test]
fn test_compare() {
	let engine = Engine::default();
	let a = engine.from_i64(-500).unwrap();
	let b = engine.from_i64(20).unwrap();
	assert_eq!(compare(&a, &b), Ordering::Less);
	assert_eq!(compare_magnitude(&a, &b), Ordering::Greater);
	assert_eq!(compare(&a, &engine.duplicate(&a).unwrap()), Ordering::Equal);
}

#[test]
fn test_large_operands_use_mapped_stores() {
	let dir = tempfile::tempdir().unwrap();
	let stats = Arc::new(StoreStats::new());
	let config = EngineConfig::default().with_store(
		StoreConfig::default()
			.with_mmap_threshold(512)
			.with_temp_dir(dir.path()),
	);
	let engine = Engine::new(config).with_observer(stats.clone());

	let a = engine.parse(&"z".repeat(400)).unwrap();
	let b = engine.parse(&"7".repeat(300)).unwrap();
	assert_eq!(a.backing(), BackingKind::Heap);

	let product = engine.mul(&a, &b).unwrap();
	assert_eq!(product.backing(), BackingKind::Mapped);
	assert!(stats.snapshot().mapped_allocations > 0);

	let (q, r) = engine.div_rem(&product, &b).unwrap();
	assert_eq!(q, a);
	assert!(r.is_zero());

	drop((a, b, product, q, r));
	let snapshot = stats.snapshot();
	assert_eq!(snapshot.live_heap_bytes, 0);
	assert_eq!(snapshot.live_mapped_bytes, 0);
}

#[test]
fn test_unwritable_temp_dir_falls_back_to_heap() {
	let stats = Arc::new(StoreStats::new());
	let config = EngineConfig::default().with_store(
		StoreConfig::default()
			.with_mmap_threshold(4)
			.with_temp_dir("/nonexistent/t81/bigint"),
	);
	let engine = Engine::new(config).with_observer(stats.clone());

	let value = engine.parse("123456789").unwrap();
	assert_eq!(value.backing(), BackingKind::Heap);
	assert_eq!(value.to_string(), "123456789");
	assert!(stats.snapshot().mapped_fallbacks > 0);
}

#[test]
fn test_forced_strategies_on_large_operands() {
	let engine = Engine::new(
		EngineConfig::default()
			.with_mul_strategy(MulStrategy::Spectral)
			.with_div_strategy(DivStrategy::Reciprocal),
	);
	let a = engine.factorial(300).unwrap();
	let b = engine.factorial(150).unwrap();

	let (q, r) = engine.div_rem(&a, &b).unwrap();
	assert!(r.is_zero());
	let expected = engine.mul(&q, &b).unwrap();
	assert_eq!(expected, a);

	let schoolbook = engine.mul_with(&q, &b, MulStrategy::Schoolbook).unwrap();
	assert_eq!(schoolbook, a);
	let (long_q, long_r) = engine.div_rem_with(&a, &b, DivStrategy::Long).unwrap();
	assert_eq!(long_q, q);
	assert!(long_r.is_zero());
}
