// Copyright 2025 Irreducible Inc.

//! Utility modules shared by the radix-81 integer crates.

pub mod checked_arithmetics;
pub mod env;
