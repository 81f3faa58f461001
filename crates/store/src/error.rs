// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to allocate {bytes} bytes of digit storage on the heap")]
	HeapExhausted { bytes: usize },
}
