// Copyright 2025 Irreducible Inc.

use std::{fmt, sync::Arc};

use crate::{
	BackingKind, StoreEvent, StoreObserver,
	backing::{Backing, MappedRegion},
};

/// An owned, zero-initialised sequence of radix-81 digits, least significant first.
///
/// The logical length may be shorter than the capacity of the backing memory; only the first
/// [`len`](Self::len) digits are visible. Stores are move-only. Growing a store goes through
/// [`DigitAllocator::resize`](crate::DigitAllocator::resize), which always allocates a fresh store
/// and copies.
pub struct DigitStore {
	backing: Backing,
	len: usize,
	observer: Option<Arc<dyn StoreObserver>>,
}

impl DigitStore {
	pub(crate) fn new(
		backing: Backing,
		len: usize,
		observer: Option<Arc<dyn StoreObserver>>,
	) -> Self {
		debug_assert!(len <= backing.as_slice().len());
		if let Some(observer) = &observer {
			observer.on_event(StoreEvent::Allocated {
				kind: backing.kind(),
				bytes: backing.as_slice().len(),
			});
		}
		Self {
			backing,
			len,
			observer,
		}
	}

	pub(crate) fn heap(buf: Box<[u8]>, observer: Option<Arc<dyn StoreObserver>>) -> Self {
		let len = buf.len();
		Self::new(Backing::Heap(buf), len, observer)
	}

	pub(crate) fn mapped(
		region: MappedRegion,
		len: usize,
		observer: Option<Arc<dyn StoreObserver>>,
	) -> Self {
		Self::new(Backing::Mapped(region), len, observer)
	}

	/// Number of visible digits.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Number of digits the backing memory can hold.
	pub fn capacity(&self) -> usize {
		self.backing.as_slice().len()
	}

	pub fn kind(&self) -> BackingKind {
		self.backing.kind()
	}

	pub fn digits(&self) -> &[u8] {
		&self.backing.as_slice()[..self.len]
	}

	pub fn digits_mut(&mut self) -> &mut [u8] {
		let len = self.len;
		&mut self.backing.as_mut_slice()[..len]
	}

	/// Shortens the visible length to `len`. Has no effect if `len` is not shorter.
	///
	/// The backing memory is kept; digits beyond the new length are zeroed so that the store stays
	/// zero-initialised past its logical end.
	pub fn truncate(&mut self, len: usize) {
		if len >= self.len {
			return;
		}
		let old_len = self.len;
		self.backing.as_mut_slice()[len..old_len].fill(0);
		self.len = len;
	}

	/// Releases the backing memory.
	///
	/// Equivalent to dropping the store; provided to make the end of ownership explicit.
	pub fn release(self) {
		drop(self)
	}
}

impl Drop for DigitStore {
	fn drop(&mut self) {
		if let Some(observer) = &self.observer {
			observer.on_event(StoreEvent::Released {
				kind: self.backing.kind(),
				bytes: self.backing.as_slice().len(),
			});
		}
	}
}

impl fmt::Debug for DigitStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DigitStore")
			.field("kind", &self.kind())
			.field("len", &self.len)
			.field("capacity", &self.capacity())
			.field("digits", &self.digits())
			.finish()
	}
}
