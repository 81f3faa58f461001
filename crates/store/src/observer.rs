// Copyright 2025 Irreducible Inc.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::BackingKind;

/// A lifecycle event of a [`DigitStore`](crate::DigitStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
	Allocated { kind: BackingKind, bytes: usize },
	Released { kind: BackingKind, bytes: usize },
	/// A mapped allocation was requested but could not be set up; the heap was used instead.
	MappedFallback { bytes: usize },
}

/// Receives store lifecycle events.
///
/// Observers are shared between threads and are called synchronously from allocation and drop,
/// so implementations should be cheap and must not allocate digit stores themselves.
pub trait StoreObserver: Send + Sync {
	fn on_event(&self, event: StoreEvent);
}

/// An observer counting allocations and live bytes per backing kind.
#[derive(Debug, Default)]
pub struct StoreStats {
	heap_allocations: AtomicU64,
	mapped_allocations: AtomicU64,
	mapped_fallbacks: AtomicU64,
	live_heap_bytes: AtomicUsize,
	live_mapped_bytes: AtomicUsize,
}

/// A point-in-time copy of [`StoreStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStatsSnapshot {
	pub heap_allocations: u64,
	pub mapped_allocations: u64,
	pub mapped_fallbacks: u64,
	pub live_heap_bytes: usize,
	pub live_mapped_bytes: usize,
}

impl StoreStats {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn snapshot(&self) -> StoreStatsSnapshot {
		StoreStatsSnapshot {
			heap_allocations: self.heap_allocations.load(Ordering::Relaxed),
			mapped_allocations: self.mapped_allocations.load(Ordering::Relaxed),
			mapped_fallbacks: self.mapped_fallbacks.load(Ordering::Relaxed),
			live_heap_bytes: self.live_heap_bytes.load(Ordering::Relaxed),
			live_mapped_bytes: self.live_mapped_bytes.load(Ordering::Relaxed),
		}
	}

	fn live_bytes(&self, kind: BackingKind) -> &AtomicUsize {
		match kind {
			BackingKind::Heap => &self.live_heap_bytes,
			BackingKind::Mapped => &self.live_mapped_bytes,
		}
	}
}

impl StoreObserver for StoreStats {
	fn on_event(&self, event: StoreEvent) {
		match event {
			StoreEvent::Allocated { kind, bytes } => {
				let counter = match kind {
					BackingKind::Heap => &self.heap_allocations,
					BackingKind::Mapped => &self.mapped_allocations,
				};
				counter.fetch_add(1, Ordering::Relaxed);
				self.live_bytes(kind).fetch_add(bytes, Ordering::Relaxed);
			}
			StoreEvent::Released { kind, bytes } => {
				self.live_bytes(kind).fetch_sub(bytes, Ordering::Relaxed);
			}
			StoreEvent::MappedFallback { .. } => {
				self.mapped_fallbacks.fetch_add(1, Ordering::Relaxed);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_stats_track_live_bytes() {
		let stats = StoreStats::new();
		stats.on_event(StoreEvent::Allocated {
			kind: BackingKind::Heap,
			bytes: 10,
		});
		stats.on_event(StoreEvent::Allocated {
			kind: BackingKind::Mapped,
			bytes: 4096,
		});
		stats.on_event(StoreEvent::Released {
			kind: BackingKind::Heap,
			bytes: 10,
		});
		stats.on_event(StoreEvent::MappedFallback { bytes: 1 });

		let snapshot = stats.snapshot();
		assert_eq!(snapshot.heap_allocations, 1);
		assert_eq!(snapshot.mapped_allocations, 1);
		assert_eq!(snapshot.mapped_fallbacks, 1);
		assert_eq!(snapshot.live_heap_bytes, 0);
		assert_eq!(snapshot.live_mapped_bytes, 4096);
	}
}
