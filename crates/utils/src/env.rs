// Copyright 2025 Irreducible Inc.

//! Reading typed configuration overrides from environment variables.

use std::{env, fmt::Display, str::FromStr};

/// Reads and parses the environment variable `name`.
///
/// Returns `None` if the variable is unset. A value that is set but fails to parse is logged and
/// also treated as unset, so a typo in the environment never aborts the caller.
pub fn parse_var<T>(name: &str) -> Option<T>
where
	T: FromStr,
	T::Err: Display,
{
	let raw = env::var(name).ok()?;
	parse_value(name, &raw)
}

fn parse_value<T>(name: &str, raw: &str) -> Option<T>
where
	T: FromStr,
	T::Err: Display,
{
	match raw.trim().parse() {
		Ok(value) => Some(value),
		Err(err) => {
			tracing::warn!(var = name, value = raw, "ignoring malformed environment override: {err}");
			None
		}
	}
}
