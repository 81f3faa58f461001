// Copyright 2025 Irreducible Inc.

//! Arbitrary-precision signed integers in radix 81.
//!
//! Values are sign-magnitude: a [`Sign`] plus a normalized sequence of digits in `[0, 80]`,
//! least significant first, held in a [`t81_store::DigitStore`]. All arithmetic goes through an
//! [`Engine`], which owns the allocation policy and the algorithm selection:
//!
//! - addition and subtraction with carry and borrow propagation;
//! - multiplication by schoolbook convolution or by a floating-point FFT ([`MulStrategy`]);
//! - division by digit-wise long division or by a Newton reciprocal ([`DivStrategy`]);
//! - modulus, exponentiation, GCD, factorial and trit shifts built on the above;
//! - balanced-ternary logic ([`Engine::tand`], [`Engine::tor`], [`Engine::txor`]).
//!
//! Every strategy produces identical results; the choice only affects speed.

mod batch;
mod config;
mod derived;
mod div;
mod engine;
mod error;
mod int;
mod magnitude;
mod mul;
mod notation;
mod reciprocal;
mod sign;
mod spectral;
mod trits;

pub use batch::BatchOp;
pub use config::{
	DEFAULT_RECIPROCAL_THRESHOLD, DEFAULT_SPECTRAL_THRESHOLD, DivStrategy, EngineConfig,
	MulStrategy,
};
pub use engine::Engine;
pub use error::{Error, ParseError};
pub use int::{T81Int, compare, compare_magnitude};
pub use notation::Notation;
pub use sign::Sign;
