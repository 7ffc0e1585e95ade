//! Strategies used to carry the live elements of a [`Vector`](crate::Vector)
//! over to a new buffer when it reallocates.
//!
//! Moving a value in Rust is a bitwise copy that cannot fail, so [`ByMove`] is
//! the default and the only strategy available to types that are not
//! [`Clone`]. [`ByClone`] instead leaves every source element untouched until
//! the whole transfer has succeeded: if a clone panics, the new buffer is
//! discarded and the vector is left exactly as it was.
use core::{
	mem,
	ptr
};

/// Relocation strategy.
///
/// ## Safety
///
/// After a successful call to [`relocate`](Relocate::relocate), the `count`
/// slots at `dst` must hold initialized values. If [`INFALLIBLE`](Relocate::INFALLIBLE)
/// is `true`, the call must never unwind and the sources are considered moved-out:
/// the caller will not drop them. Otherwise the sources must still be live after
/// the call, and if it unwinds, every value already written at `dst` must have been
/// dropped.
pub unsafe trait Relocate<T> {
	/// Whether this strategy relocates without any possibility of failure.
	const INFALLIBLE: bool;

	/// Transfers `count` elements from `src` into the uninitialized slots at `dst`.
	///
	/// ## Safety
	///
	/// `src` must point to `count` live values, `dst` to `count` uninitialized slots,
	/// and the two ranges must not overlap.
	unsafe fn relocate(src: *const T, dst: *mut T, count: usize);
}

/// Relocates by moving: elements are copied bitwise and the sources are forgotten.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByMove;

unsafe impl<T> Relocate<T> for ByMove {
	const INFALLIBLE: bool = true;

	#[inline]
	unsafe fn relocate(src: *const T, dst: *mut T, count: usize) {
		ptr::copy_nonoverlapping(src, dst, count)
	}
}

/// Relocates by cloning, keeping the source elements alive until the caller
/// knows the whole transfer succeeded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByClone;

unsafe impl<T: Clone> Relocate<T> for ByClone {
	const INFALLIBLE: bool = false;

	unsafe fn relocate(src: *const T, dst: *mut T, count: usize) {
		let mut written = DropGuard::new(dst, 0);
		for i in 0..count {
			ptr::write(dst.add(i), (*src.add(i)).clone());
			// Account for it right away in case the next clone panics.
			written.len += 1;
		}
		written.disarm()
	}
}

/// Drops `len` values starting at `start` unless disarmed.
///
/// Used to clean up elements that were built in a buffer nobody owns yet
/// when a constructor or clone panics.
pub(crate) struct DropGuard<T> {
	start: *mut T,
	pub(crate) len: usize
}

impl<T> DropGuard<T> {
	#[inline]
	pub(crate) fn new(start: *mut T, len: usize) -> Self {
		DropGuard { start, len }
	}

	/// The guarded values now belong to someone else.
	#[inline]
	pub(crate) fn disarm(self) {
		mem::forget(self)
	}
}

impl<T> Drop for DropGuard<T> {
	fn drop(&mut self) {
		unsafe {
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.len))
		}
	}
}
