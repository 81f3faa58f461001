// Copyright 2025 Irreducible Inc.

//! Owned digit buffers for radix-81 integers.
//!
//! A [`DigitStore`] is a zero-initialised, contiguous run of digits. Small stores live on the
//! heap; stores at or above [`StoreConfig::mmap_threshold`] are backed by a memory mapping over an
//! unlinked temporary file. Both backings are hidden behind the same owned type, and the
//! resource is released exactly once when the store is dropped.

mod allocator;
mod backing;
mod config;
mod error;
mod observer;
mod store;

pub use allocator::DigitAllocator;
pub use backing::BackingKind;
pub use config::{DEFAULT_MMAP_THRESHOLD, StoreConfig};
pub use error::Error;
pub use observer::{StoreEvent, StoreObserver, StoreStats, StoreStatsSnapshot};
pub use store::DigitStore;

/// Number of distinct values a single digit can hold.
pub const RADIX: u8 = 81;
