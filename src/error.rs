//! Errors reported by the fallible vector operations.

use core::alloc::Layout;
use std::error::Error;
use std::fmt;

/// The error type for `try_*` methods that may allocate.
///
/// When one of these is returned the vector (or buffer) is left exactly as it
/// was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TryReserveError {
	/// The requested capacity cannot be represented: it overflows `usize`,
	/// does not fit a [`Layout`], or exceeds `isize::MAX` bytes.
	CapacityOverflow,

	/// The memory allocator returned an error.
	AllocError {
		/// The layout of the allocation request that failed.
		layout: Layout
	}
}

impl fmt::Display for TryReserveError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("memory allocation failed")?;
		match self {
			Self::CapacityOverflow => f.write_str(" because the computed capacity exceeded the collection's maximum"),
			Self::AllocError { layout } => write!(f, " because the memory allocator returned an error ({} bytes, align {})", layout.size(), layout.align())
		}
	}
}

impl Error for TryReserveError {}

/// Returned by the checked accessors when an index is not in `0..len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexError {
	/// The requested index.
	pub index: usize,

	/// The length of the vector at the time of the access.
	pub len: usize
}

impl fmt::Display for IndexError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "index out of bounds: the len is {} but the index is {}", self.len, self.index)
	}
}

impl Error for IndexError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_capacity_overflow() {
		let msg = TryReserveError::CapacityOverflow.to_string();
		assert!(msg.starts_with("memory allocation failed"));
		assert!(msg.contains("maximum"));
	}

	#[test]
	fn display_alloc_error_names_the_layout() {
		let layout = Layout::from_size_align(32, 8).unwrap();
		let msg = TryReserveError::AllocError { layout }.to_string();
		assert!(msg.contains("32 bytes"));
		assert!(msg.contains("align 8"));
	}

	#[test]
	fn display_index_error() {
		let err = IndexError { index: 7, len: 3 };
		assert_eq!(err.to_string(), "index out of bounds: the len is 3 but the index is 7");
	}
}
