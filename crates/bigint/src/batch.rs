// Copyright 2025 Irreducible Inc.

use rayon::prelude::*;

use crate::{Engine, Error, T81Int};

/// A binary operation applied element-wise by [`Engine::batch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchOp {
	Add,
	Sub,
	Mul,
	Div,
	Mod,
	Gcd,
}

impl Engine {
	pub fn apply(&self, op: BatchOp, a: &T81Int, b: &T81Int) -> Result<T81Int, Error> {
		match op {
			BatchOp::Add => self.add(a, b),
			BatchOp::Sub => self.sub(a, b),
			BatchOp::Mul => self.mul(a, b),
			BatchOp::Div => self.div(a, b),
			BatchOp::Mod => self.modulus(a, b),
			BatchOp::Gcd => self.gcd(a, b),
		}
	}

	/// Applies `op` to each pair `(lhs[i], rhs[i])` in parallel.
	///
	/// If any pair fails, one of the errors is returned and all computed results are dropped.
	///
	/// ## Preconditions
	///
	/// - `lhs.len() == rhs.len()`, otherwise [`Error::IncorrectArgumentLength`] is returned
	pub fn batch(
		&self,
		op: BatchOp,
		lhs: &[T81Int],
		rhs: &[T81Int],
	) -> Result<Vec<T81Int>, Error> {
		if lhs.len() != rhs.len() {
			return Err(Error::IncorrectArgumentLength {
				arg: "rhs".to_string(),
				expected: lhs.len(),
			});
		}
		let _span = tracing::trace_span!("batch", ?op, len = lhs.len()).entered();

		lhs.par_iter()
			.zip(rhs)
			.map(|(a, b)| self.apply(op, a, b))
			.collect()
	}
}
