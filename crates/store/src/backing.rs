// Copyright 2025 Irreducible Inc.

use std::{fs::File, io, path::Path};

use memmap2::MmapMut;

/// Which kind of memory backs a [`DigitStore`](crate::DigitStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackingKind {
	Heap,
	Mapped,
}

/// The owned memory behind a store.
///
/// Each variant owns everything needed to release it, so dropping the value frees the right
/// resource and nothing else.
pub(crate) enum Backing {
	Heap(Box<[u8]>),
	Mapped(MappedRegion),
}

/// A writable mapping over an unlinked temporary file.
///
/// Field order matters: the mapping is unmapped before the descriptor is closed.
pub(crate) struct MappedRegion {
	map: MmapMut,
	_file: File,
}

impl MappedRegion {
	/// Creates a zero-filled mapping of `bytes` bytes over a fresh temporary file in `dir`.
	///
	/// ## Preconditions
	///
	/// - `bytes > 0`
	pub(crate) fn create(dir: &Path, bytes: usize) -> io::Result<Self> {
		debug_assert!(bytes > 0);
		let file = tempfile::tempfile_in(dir)?;
		file.set_len(bytes as u64)?;
		// SAFETY: the file was created by us and is already unlinked, so no other process or
		// handle can truncate or modify it while the mapping is alive.
		let map = unsafe { MmapMut::map_mut(&file)? };
		Ok(Self { map, _file: file })
	}
}

impl Backing {
	pub(crate) fn kind(&self) -> BackingKind {
		match self {
			Self::Heap(_) => BackingKind::Heap,
			Self::Mapped(_) => BackingKind::Mapped,
		}
	}

	pub(crate) fn as_slice(&self) -> &[u8] {
		match self {
			Self::Heap(buf) => &buf[..],
			Self::Mapped(region) => &region.map[..],
		}
	}

	pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
		match self {
			Self::Heap(buf) => &mut buf[..],
			Self::Mapped(region) => &mut region.map[..],
		}
	}
}
