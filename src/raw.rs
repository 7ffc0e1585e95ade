use core::{
	alloc::Layout,
	fmt,
	marker::PhantomData,
	mem,
	ptr::NonNull
};
use std::alloc::{
	alloc,
	dealloc,
	handle_alloc_error
};
use log::trace;
use crate::error::TryReserveError;

/// A low-level utility for more ergonomically managing an untyped buffer.
///
/// A `RawMemory<T>` owns a block of memory large enough to hold `capacity` values of `T`.
/// This type does not in anyway inspect the memory that it manages. When dropped it *will*
/// free its memory, but it *won't* try to drop its contents. It is up to the user of
/// `RawMemory` to handle the actual things *stored* inside of it.
///
/// The buffer can be moved around or [`swap`](RawMemory::swap)ped, but never cloned:
/// cloning would duplicate the allocation without duplicating the values living in it.
///
/// Zero-sized types never allocate, but the requested capacity is still recorded.
pub struct RawMemory<T> {
	/// Start of the block (dangling if nothing is allocated).
	ptr: NonNull<T>,

	/// Number of `T` slots in the block.
	capacity: usize,

	/// The buffer logically owns values of type `T`.
	marker: PhantomData<T>
}

unsafe impl<T: Send> Send for RawMemory<T> {}
unsafe impl<T: Sync> Sync for RawMemory<T> {}

impl<T> Drop for RawMemory<T> {
	fn drop(&mut self) {
		if let Some((ptr, layout)) = self.current_memory() {
			trace!("releasing {} slots ({} bytes)", self.capacity, layout.size());
			unsafe {
				dealloc(ptr.as_ptr(), layout)
			}
		}
	}
}

impl<T> Default for RawMemory<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T> RawMemory<T> {
	/// Creates an empty buffer with no capacity.
	///
	/// This does not allocate.
	#[inline]
	pub const fn new() -> Self {
		RawMemory {
			ptr: NonNull::dangling(),
			capacity: 0,
			marker: PhantomData
		}
	}

	/// Creates a buffer with room for exactly `capacity` elements.
	///
	/// # Panics
	///
	/// Panics if the requested size overflows `isize::MAX` bytes.
	/// Aborts through [`handle_alloc_error`] if the allocation fails.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		handle_reserve(Self::try_with_capacity(capacity))
	}

	/// The same as `with_capacity`, but returns on errors instead of panicking or aborting.
	///
	/// Nothing is retained when an error is returned.
	pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
		if capacity == 0 {
			return Ok(Self::new())
		}

		let layout = Layout::array::<T>(capacity).map_err(|_| TryReserveError::CapacityOverflow)?;
		if layout.size() == 0 {
			return Ok(RawMemory {
				ptr: NonNull::dangling(),
				capacity,
				marker: PhantomData
			})
		}

		alloc_guard(layout.size())?;

		let ptr = unsafe { alloc(layout) };
		match NonNull::new(ptr) {
			Some(ptr) => {
				trace!("allocated {} slots ({} bytes)", capacity, layout.size());
				Ok(RawMemory {
					ptr: ptr.cast(),
					capacity,
					marker: PhantomData
				})
			},
			None => Err(TryReserveError::AllocError { layout })
		}
	}

	/// Returns the number of elements the buffer can hold.
	///
	/// This is not the number of initialized values, which is unknown to the buffer.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Returns a raw pointer to the start of the buffer.
	///
	/// The pointer is dangling (but well aligned) when nothing is allocated.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.ptr.as_ptr()
	}

	/// Returns an unsafe mutable pointer to the start of the buffer.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.ptr.as_ptr()
	}

	/// Address of the slot at `offset`.
	///
	/// `offset` may be equal to the capacity, in which case the returned
	/// pointer is one past the end of the buffer and must not be dereferenced.
	#[inline]
	pub fn slot(&self, offset: usize) -> *const T {
		debug_assert!(offset <= self.capacity);
		// SAFETY: `offset <= capacity`, so the result stays within (or one past) the allocation.
		unsafe { self.ptr.as_ptr().add(offset) }
	}

	/// Mutable address of the slot at `offset`.
	///
	/// Same contract as [`slot`](RawMemory::slot).
	#[inline]
	pub fn slot_mut(&mut self, offset: usize) -> *mut T {
		debug_assert!(offset <= self.capacity);
		unsafe { self.ptr.as_ptr().add(offset) }
	}

	/// Takes the block out of `self`, leaving it empty.
	#[inline]
	pub fn take(&mut self) -> Self {
		mem::replace(self, Self::new())
	}

	/// Exchanges the blocks of `self` and `other`.
	///
	/// Never allocates nor fails.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(self, other)
	}

	/// Returns the current allocated memory and layout.
	///
	/// Returns `None` if nothing is allocated, or if the size of `T` is 0.
	fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
		if self.capacity == 0 || mem::size_of::<T>() == 0 {
			None
		} else {
			// We have an allocated chunk of memory, so we can bypass runtime
			// checks to get our current layout.
			unsafe {
				let align = mem::align_of::<T>();
				let size = mem::size_of::<T>() * self.capacity;
				let layout = Layout::from_size_align_unchecked(size, align);
				Some((self.ptr.cast(), layout))
			}
		}
	}
}

impl<T> fmt::Debug for RawMemory<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RawMemory")
			.field("ptr", &self.ptr)
			.field("capacity", &self.capacity)
			.finish()
	}
}

// Central function for reserve error handling.
#[inline]
pub(crate) fn handle_reserve<T>(result: Result<T, TryReserveError>) -> T {
	match result {
		Err(TryReserveError::CapacityOverflow) => capacity_overflow(),
		Err(TryReserveError::AllocError { layout }) => handle_alloc_error(layout),
		Ok(t) => t
	}
}

// We need to guarantee the following:
// * We don't ever allocate `> isize::MAX` byte-size objects.
// * We don't overflow `usize::MAX` and actually allocate too little.
//
// On 64-bit we just need to check for overflow since trying to allocate
// `> isize::MAX` bytes will surely fail. On 32-bit and 16-bit we need to add
// an extra guard for this in case we're running on a platform which can use
// all 4GB in user-space, e.g., PAE or x32.
#[inline]
fn alloc_guard(alloc_size: usize) -> Result<(), TryReserveError> {
	if usize::BITS < 64 && alloc_size > isize::MAX as usize {
		Err(TryReserveError::CapacityOverflow)
	} else {
		Ok(())
	}
}

// One central function responsible for reporting capacity overflows. This'll
// ensure that the code generation related to these panics is minimal as there's
// only one location which panics rather than a bunch throughout the module.
fn capacity_overflow() -> ! {
	panic!("capacity overflow");
}
