// Copyright 2025 Irreducible Inc.

use std::{fmt, sync::Arc};

use crate::{
	DigitStore, Error, StoreConfig, StoreEvent, StoreObserver, backing::MappedRegion,
};

/// Hands out [`DigitStore`]s, choosing heap or mapped backing by size.
///
/// When a mapped allocation cannot be created (for example because the temporary directory is
/// not writable), the allocator logs a warning, reports [`StoreEvent::MappedFallback`] and serves
/// the request from the heap. Only a failed heap allocation is reported as an error.
#[derive(Clone, Default)]
pub struct DigitAllocator {
	config: StoreConfig,
	observer: Option<Arc<dyn StoreObserver>>,
}

impl DigitAllocator {
	pub fn new(config: StoreConfig) -> Self {
		Self {
			config,
			observer: None,
		}
	}

	/// Attaches an observer that receives the lifecycle events of every store from this allocator.
	pub fn with_observer(mut self, observer: Arc<dyn StoreObserver>) -> Self {
		self.observer = Some(observer);
		self
	}

	pub fn config(&self) -> &StoreConfig {
		&self.config
	}

	/// Allocates a zero-filled store of `len` digits, rounding `len` up to 1.
	pub fn allocate(&self, len: usize) -> Result<DigitStore, Error> {
		let len = len.max(1);
		if self.config.wants_mapping(len) {
			match MappedRegion::create(self.config.temp_dir(), len) {
				Ok(region) => {
					tracing::debug!(bytes = len, "mapped digit store");
					return Ok(DigitStore::mapped(region, len, self.observer.clone()));
				}
				Err(err) => {
					tracing::warn!(
						bytes = len,
						dir = %self.config.temp_dir().display(),
						"mapped allocation failed, falling back to heap: {err}"
					);
					self.notify(StoreEvent::MappedFallback { bytes: len });
				}
			}
		}
		self.allocate_heap(len)
	}

	/// Allocates a store holding a copy of `digits`.
	pub fn allocate_from(&self, digits: &[u8]) -> Result<DigitStore, Error> {
		let mut store = self.allocate(digits.len())?;
		store.digits_mut()[..digits.len()].copy_from_slice(digits);
		Ok(store)
	}

	/// Returns a fresh store of `len` digits holding the leading digits of `store`.
	///
	/// The source store is never resized in place, whatever its backing.
	pub fn resize(&self, store: &DigitStore, len: usize) -> Result<DigitStore, Error> {
		let mut resized = self.allocate(len)?;
		let keep = store.len().min(resized.len());
		resized.digits_mut()[..keep].copy_from_slice(&store.digits()[..keep]);
		Ok(resized)
	}

	fn allocate_heap(&self, len: usize) -> Result<DigitStore, Error> {
		let mut buf = Vec::new();
		buf.try_reserve_exact(len)
			.map_err(|_| Error::HeapExhausted { bytes: len })?;
		buf.resize(len, 0u8);
		Ok(DigitStore::heap(buf.into_boxed_slice(), self.observer.clone()))
	}

	fn notify(&self, event: StoreEvent) {
		if let Some(observer) = &self.observer {
			observer.on_event(event);
		}
	}
}

impl fmt::Debug for DigitAllocator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DigitAllocator")
			.field("config", &self.config)
			.field("observed", &self.observer.is_some())
			.finish()
	}
}
