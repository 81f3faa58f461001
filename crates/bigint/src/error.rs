// Copyright 2025 Irreducible Inc.

use crate::Notation;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("memory error: {0}")]
	Memory(#[from] t81_store::Error),
	#[error("invalid input: {0}")]
	InvalidInput(#[from] ParseError),
	#[error("division by zero")]
	DivisionByZero,
	#[error("value does not fit in {target}")]
	Overflow { target: &'static str },
	#[error("argument {arg} does not have expected length {expected}")]
	IncorrectArgumentLength { arg: String, expected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	#[error("no digits to parse")]
	Empty,
	#[error("character {ch:?} at position {position} is not a {notation} digit")]
	InvalidDigit {
		ch: char,
		position: usize,
		notation: Notation,
	},
}
