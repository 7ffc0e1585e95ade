use core::{
	cmp,
	fmt,
	iter::FromIterator,
	marker::PhantomData,
	mem,
	ops::{
		Deref,
		DerefMut
	},
	ptr,
	slice
};
use log::debug;
use crate::{
	error::{
		IndexError,
		TryReserveError
	},
	raw::{
		handle_reserve,
		RawMemory
	},
	relocate::{
		ByMove,
		DropGuard,
		Relocate
	}
};

/// A contiguous growable array type built on top of [`RawMemory`].
///
/// The first `len` slots of the buffer hold live values, the rest is
/// uninitialized. Growth doubles the capacity (starting at 1), so appending is
/// amortized O(1).
///
/// The `R` parameter selects how existing elements are carried over to a new
/// buffer on reallocation (see the [`relocate`](crate::relocate) module).
/// With the default [`ByMove`] strategy relocation can never fail. With
/// [`ByClone`](crate::ByClone), elements are cloned and the originals are only
/// dropped once every clone succeeded, so a panicking `clone` leaves the vector
/// untouched.
///
/// # Example
/// ```
/// use advanced_vec::Vector;
///
/// let mut v = Vector::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
/// assert_eq!(v.capacity(), 4);
///
/// v.insert(1, 99);
/// assert_eq!(v.as_slice(), &[1, 99, 2, 3]);
///
/// v.remove(0);
/// assert_eq!(v.as_slice(), &[99, 2, 3]);
/// ```
pub struct Vector<T, R = ByMove> {
	/// Storage. Slots `0..len` are initialized.
	buf: RawMemory<T>,

	/// Number of live elements.
	len: usize,

	/// Relocation strategy.
	strategy: PhantomData<fn() -> R>
}

impl<T, R> Drop for Vector<T, R> {
	fn drop(&mut self) {
		unsafe {
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len))
		}
		// `buf` releases the memory.
	}
}

impl<T> Vector<T> {
	/// Creates a new empty `Vector`.
	///
	/// The vector will not allocate until elements are pushed onto it.
	#[inline]
	pub const fn new() -> Self {
		Vector {
			buf: RawMemory::new(),
			len: 0,
			strategy: PhantomData
		}
	}

	/// Creates a new empty `Vector` with room for exactly `capacity` elements.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		Self::with_capacity_in(capacity, ByMove)
	}

	/// The same as `with_capacity`, but returns on errors instead of panicking or aborting.
	#[inline]
	pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
		Self::try_with_capacity_in(capacity, ByMove)
	}

	/// Creates a `Vector` of `len` default values.
	///
	/// Exactly `len` slots are allocated. If a call to `T::default` panics, the
	/// values built so far are dropped and the buffer is released before the
	/// panic resumes.
	#[inline]
	pub fn with_len(len: usize) -> Self where T: Default {
		Self::with_len_in(len, ByMove)
	}

	/// The same as `with_len`, but returns on allocation errors instead of panicking or aborting.
	#[inline]
	pub fn try_with_len(len: usize) -> Result<Self, TryReserveError> where T: Default {
		Self::try_with_len_in(len, ByMove)
	}
}

impl<T, R> Vector<T, R> {
	/// Constructs a new, empty `Vector` using the given relocation strategy.
	///
	/// ```
	/// use advanced_vec::{Vector, ByClone};
	///
	/// let mut v = Vector::new_in(ByClone);
	/// v.push(String::from("kept until the copy is complete"));
	/// ```
	#[inline]
	pub fn new_in(_strategy: R) -> Self {
		Vector {
			buf: RawMemory::new(),
			len: 0,
			strategy: PhantomData
		}
	}

	/// Like `with_capacity`, but parameterized over the relocation strategy.
	#[inline]
	pub fn with_capacity_in(capacity: usize, strategy: R) -> Self {
		handle_reserve(Self::try_with_capacity_in(capacity, strategy))
	}

	/// Like `try_with_capacity`, but parameterized over the relocation strategy.
	pub fn try_with_capacity_in(capacity: usize, _strategy: R) -> Result<Self, TryReserveError> {
		Ok(Vector {
			buf: RawMemory::try_with_capacity(capacity)?,
			len: 0,
			strategy: PhantomData
		})
	}

	/// Returns the number of elements in the vector.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns `true` if the vector contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns the number of elements the vector can hold without reallocating.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Returns a raw pointer to the vector's buffer.
	///
	/// The caller must ensure that the vector outlives the pointer this
	/// function returns, or else it will end up pointing to garbage.
	/// Modifying the vector may cause its buffer to be reallocated,
	/// which would also make any pointers to it invalid.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.buf.as_ptr()
	}

	/// Returns an unsafe mutable pointer to the vector's buffer.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.buf.as_mut_ptr()
	}

	/// Extracts a slice containing the entire vector.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
	}

	/// Extracts a mutable slice of the entire vector.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
	}

	/// Checked access to the element at `index`.
	///
	/// Unlike indexing, an out-of-range index is reported as an [`IndexError`].
	#[inline]
	pub fn at(&self, index: usize) -> Result<&T, IndexError> {
		let len = self.len;
		self.as_slice().get(index).ok_or(IndexError { index, len })
	}

	/// Checked mutable access to the element at `index`.
	#[inline]
	pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
		let len = self.len;
		self.as_mut_slice().get_mut(index).ok_or(IndexError { index, len })
	}

	/// Shortens the vector, keeping the first `len` elements and dropping
	/// the rest.
	///
	/// If `len` is greater than the vector's current length, this has no
	/// effect.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the vector.
	#[inline]
	pub fn truncate(&mut self, len: usize) {
		if len > self.len {
			return;
		}

		unsafe {
			let remaining_len = self.len - len;
			let s = ptr::slice_from_raw_parts_mut(self.buf.slot_mut(len), remaining_len);
			self.len = len;
			ptr::drop_in_place(s);
		}
	}

	/// Clears the vector, removing all values.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the vector.
	#[inline]
	pub fn clear(&mut self) {
		self.truncate(0)
	}

	/// Removes the last element from a vector and returns it, or [`None`] if it
	/// is empty.
	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		if self.len == 0 {
			None
		} else {
			unsafe {
				self.len -= 1;
				Some(ptr::read(self.buf.slot(self.len)))
			}
		}
	}

	/// Removes and returns the element at position `index` within the vector,
	/// shifting all elements after it to the left.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	pub fn remove(&mut self, index: usize) -> T {
		let len = self.len;
		if index >= len {
			panic!("removal index (is {}) should be < len (is {})", index, len);
		}

		unsafe {
			let ret;
			{
				// the place we are taking from.
				let ptr = self.buf.slot_mut(index);
				// copy it out, unsafely having a copy of the value on
				// the stack and in the vector at the same time.
				ret = ptr::read(ptr);

				// Shift everything down to fill in that spot.
				ptr::copy(ptr.add(1), ptr, len - index - 1);
			}
			self.len = len - 1;
			ret
		}
	}

	/// Exchanges the contents of two vectors without moving any element.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		self.buf.swap(&mut other.buf);
		mem::swap(&mut self.len, &mut other.len)
	}

	/// Takes the contents out of `self`, leaving an empty vector with no
	/// capacity behind.
	#[inline]
	pub fn take(&mut self) -> Self {
		let len = mem::replace(&mut self.len, 0);
		Vector {
			buf: self.buf.take(),
			len,
			strategy: PhantomData
		}
	}
}

impl<T, R: Relocate<T>> Vector<T, R> {
	/// Like `with_len`, but parameterized over the relocation strategy.
	#[inline]
	pub fn with_len_in(len: usize, strategy: R) -> Self where T: Default {
		handle_reserve(Self::try_with_len_in(len, strategy))
	}

	/// Like `try_with_len`, but parameterized over the relocation strategy.
	pub fn try_with_len_in(len: usize, strategy: R) -> Result<Self, TryReserveError> where T: Default {
		let mut vec = Self::try_with_capacity_in(len, strategy)?;
		vec.extend_with(len, |_| T::default());
		Ok(vec)
	}

	/// Ensures the vector can hold at least `new_capacity` elements.
	///
	/// Unlike `Vec::reserve`, the argument is the total capacity, not an additional
	/// amount. Does nothing if the capacity is already sufficient. Otherwise exactly
	/// `new_capacity` slots are allocated and the elements are relocated with `R`.
	///
	/// # Panics
	///
	/// Panics if the new capacity overflows `isize::MAX` bytes.
	#[inline]
	pub fn reserve(&mut self, new_capacity: usize) {
		handle_reserve(self.try_reserve(new_capacity))
	}

	/// The same as `reserve`, but returns on errors instead of panicking or aborting.
	///
	/// On error, or if relocation panics, the vector is left unchanged.
	pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
		if new_capacity <= self.capacity() {
			return Ok(())
		}

		self.try_relocate(new_capacity)
	}

	/// Shrinks the capacity of the vector to its length.
	pub fn shrink_to_fit(&mut self) {
		if self.capacity() > self.len {
			handle_reserve(self.try_relocate(self.len))
		}
	}

	/// Resizes the `Vector` in-place so that `len` is equal to `new_len`.
	///
	/// If `new_len` is greater than `len`, the `Vector` is extended by the
	/// difference, with each additional slot filled with `T::default()`.
	/// If `new_len` is less than `len`, the `Vector` is simply truncated
	/// and keeps its capacity.
	///
	/// If a default constructor panics, the values added so far are dropped
	/// and the length is left as it was.
	#[inline]
	pub fn resize(&mut self, new_len: usize) where T: Default {
		self.resize_with(new_len, T::default)
	}

	/// Resizes the `Vector` in-place so that `len` is equal to `new_len`,
	/// calling `f` to build each additional element.
	pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) where F: FnMut() -> T {
		let len = self.len;

		if new_len > len {
			self.reserve(new_len);
			self.extend_with(new_len - len, |_| f())
		} else {
			self.truncate(new_len);
		}
	}

	/// Appends an element to the back of a collection.
	///
	/// # Panics
	///
	/// Panics if the new capacity exceeds `isize::MAX` bytes.
	#[inline]
	pub fn push(&mut self, value: T) {
		self.emplace_back(move || value);
	}

	/// The same as `push`, but returns on allocation errors instead of panicking or aborting.
	///
	/// `value` is dropped if an error is returned.
	#[inline]
	pub fn try_push(&mut self, value: T) -> Result<(), TryReserveError> {
		self.try_emplace_back(move || value).map(|_| ())
	}

	/// Appends the value built by `f` to the back of the vector and returns a
	/// reference to it.
	///
	/// When the vector is full, a buffer twice as large (or of capacity 1) is
	/// allocated and the new element is built there before the existing ones
	/// are relocated. If `f` panics, the vector is left untouched.
	#[inline]
	pub fn emplace_back<F>(&mut self, f: F) -> &mut T where F: FnOnce() -> T {
		handle_reserve(self.try_emplace_back(f))
	}

	/// The same as `emplace_back`, but returns on allocation errors instead of panicking or aborting.
	///
	/// `f` is not called if an error is returned.
	pub fn try_emplace_back<F>(&mut self, f: F) -> Result<&mut T, TryReserveError> where F: FnOnce() -> T {
		let len = self.len;
		if len == self.capacity() {
			let capacity = grown_capacity(self.capacity())?;
			self.try_relocate_with(capacity, len, f)
		} else {
			unsafe {
				let end = self.buf.slot_mut(len);
				ptr::write(end, f());
				self.len = len + 1;
				Ok(&mut *end)
			}
		}
	}

	/// Inserts an element at position `index` within the vector, shifting all
	/// elements after it to the right.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	#[inline]
	pub fn insert(&mut self, index: usize, element: T) {
		self.emplace(index, move || element);
	}

	/// The same as `insert`, but returns on allocation errors instead of panicking or aborting.
	///
	/// `element` is dropped if an error is returned.
	#[inline]
	pub fn try_insert(&mut self, index: usize, element: T) -> Result<(), TryReserveError> {
		self.try_emplace(index, move || element).map(|_| ())
	}

	/// Inserts the value built by `f` at position `index`, shifting all
	/// elements after it to the right, and returns a reference to it.
	///
	/// The value is built before any element is touched, so a panicking `f`
	/// leaves the vector unchanged.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	#[inline]
	pub fn emplace<F>(&mut self, index: usize, f: F) -> &mut T where F: FnOnce() -> T {
		handle_reserve(self.try_emplace(index, f))
	}

	/// The same as `emplace`, but returns on allocation errors instead of panicking or aborting.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn try_emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T, TryReserveError> where F: FnOnce() -> T {
		let len = self.len;
		if index > len {
			panic!("insertion index (is {}) should be <= len (which is {})", index, len);
		}

		if index == len {
			return self.try_emplace_back(f)
		}

		if len == self.capacity() {
			let capacity = grown_capacity(self.capacity())?;
			self.try_relocate_with(capacity, index, f)
		} else {
			let element = f();
			unsafe {
				let p = self.buf.slot_mut(index);
				// Shift everything over to make space. (Duplicating the
				// `index`th element into two consecutive places.)
				ptr::copy(p, p.add(1), len - index);
				// Write it in, overwriting the first copy of the `index`th
				// element.
				ptr::write(p, element);
				self.len = len + 1;
				Ok(&mut *p)
			}
		}
	}

	/// Clones and appends all elements in a slice to the `Vector`.
	///
	/// If the capacity is insufficient it grows to the larger of the required
	/// length and twice the current capacity. If a clone panics, the elements
	/// appended so far are dropped and the length is left as it was.
	pub fn extend_from_slice(&mut self, other: &[T]) where T: Clone {
		let required = match self.len.checked_add(other.len()) {
			Some(required) => required,
			None => handle_reserve(Err(TryReserveError::CapacityOverflow))
		};

		if required > self.capacity() {
			let amortized = self.capacity().checked_mul(2).unwrap_or(required);
			self.reserve(cmp::max(required, amortized));
		}

		self.extend_with(other.len(), |i| other[i].clone())
	}

	/// Relocates every element into a new buffer of exactly `capacity` slots.
	fn try_relocate(&mut self, capacity: usize) -> Result<(), TryReserveError> {
		debug_assert!(capacity >= self.len);
		let len = self.len;
		let mut new_buf: RawMemory<T> = RawMemory::try_with_capacity(capacity)?;

		unsafe {
			R::relocate(self.buf.as_ptr(), new_buf.as_mut_ptr(), len);
			self.adopt(new_buf, len);
		}

		Ok(())
	}

	/// Relocates every element into a new buffer of `capacity` slots, leaving
	/// room at `index` for the element built by `f`.
	///
	/// The new element is built first, directly in the new buffer, so that a
	/// panicking `f` costs nothing but the new allocation. Elements before
	/// `index` are then relocated to the front and the others after the new element.
	fn try_relocate_with<F>(&mut self, capacity: usize, index: usize, f: F) -> Result<&mut T, TryReserveError> where F: FnOnce() -> T {
		let len = self.len;
		debug_assert!(index <= len && len < capacity);
		let mut new_buf: RawMemory<T> = RawMemory::try_with_capacity(capacity)?;

		unsafe {
			let src = self.buf.as_ptr();
			let dst = new_buf.as_mut_ptr();

			ptr::write(dst.add(index), f());
			let element = DropGuard::new(dst.add(index), 1);

			R::relocate(src, dst, index);
			let prefix = DropGuard::new(dst, index);

			R::relocate(src.add(index), dst.add(index + 1), len - index);

			prefix.disarm();
			element.disarm();
			self.adopt(new_buf, len + 1);
			Ok(&mut *self.buf.slot_mut(index))
		}
	}

	/// Installs `new_buf`, holding `new_len` live elements, in place of the
	/// current buffer and releases the latter.
	///
	/// ## Safety
	///
	/// The current elements must have been relocated into `new_buf` with `R`.
	unsafe fn adopt(&mut self, mut new_buf: RawMemory<T>, new_len: usize) {
		debug!(
			"relocated {} elements by {}: capacity {} -> {}",
			self.len,
			if R::INFALLIBLE { "move" } else { "clone" },
			self.capacity(),
			new_buf.capacity()
		);

		let old_len = self.len;
		self.buf.swap(&mut new_buf);
		self.len = new_len;

		// `new_buf` now holds the previous storage.
		if !R::INFALLIBLE {
			// The originals were cloned, not moved out.
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(new_buf.as_mut_ptr(), old_len))
		}
	}

	/// Appends `n` values in the spare capacity, the `i`th one being built by `f(i)`.
	///
	/// The capacity must already be sufficient. If `f` panics, the values built
	/// so far are dropped and the length is not updated.
	fn extend_with<F>(&mut self, n: usize, mut f: F) where F: FnMut(usize) -> T {
		debug_assert!(self.len + n <= self.capacity());
		let len = self.len;

		unsafe {
			let tail = self.buf.slot_mut(len);
			let mut built = DropGuard::new(tail, 0);
			for i in 0..n {
				ptr::write(tail.add(i), f(i));
				// Increment the count in every step in case `f` panics.
				built.len += 1;
			}
			built.disarm();
		}

		self.len = len + n;
	}
}

/// Capacity after a growth event: `max(1, 2 * capacity)`.
#[inline]
fn grown_capacity(capacity: usize) -> Result<usize, TryReserveError> {
	let doubled = capacity.checked_mul(2).ok_or(TryReserveError::CapacityOverflow)?;
	Ok(cmp::max(1, doubled))
}

impl<T, R> Default for Vector<T, R> {
	#[inline]
	fn default() -> Self {
		Vector {
			buf: RawMemory::new(),
			len: 0,
			strategy: PhantomData
		}
	}
}

impl<T: Clone, R: Relocate<T>> Clone for Vector<T, R> {
	/// Copies every element into a buffer of exactly `len` slots.
	fn clone(&self) -> Self {
		let mut vec = Vector {
			buf: RawMemory::with_capacity(self.len),
			len: 0,
			strategy: PhantomData
		};
		vec.extend_from_slice(self);
		vec
	}

	/// Reuses the existing buffer when it is large enough.
	///
	/// Otherwise a full copy of `source` is built first and swapped in, so a
	/// panicking clone leaves `self` untouched. When the buffer is reused, the
	/// common prefix is assigned element-wise before the tail is appended or
	/// dropped; a panic during that assignment leaves the prefix partially
	/// overwritten.
	fn clone_from(&mut self, source: &Self) {
		if source.len > self.capacity() {
			let mut copy = source.clone();
			self.swap(&mut copy);
		} else {
			let common = cmp::min(self.len, source.len);
			self.as_mut_slice()[..common].clone_from_slice(&source[..common]);
			if source.len < self.len {
				self.truncate(source.len)
			} else {
				self.extend_from_slice(&source[common..])
			}
		}
	}
}

impl<T, R> Deref for Vector<T, R> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T, R> DerefMut for Vector<T, R> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<T, R> AsRef<[T]> for Vector<T, R> {
	#[inline]
	fn as_ref(&self) -> &[T] {
		self
	}
}

impl<T, R> AsMut<[T]> for Vector<T, R> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] {
		self
	}
}

impl<T: fmt::Debug, R> fmt::Debug for Vector<T, R> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&**self, f)
	}
}

impl<'v, T, R> IntoIterator for &'v Vector<T, R> {
	type Item = &'v T;
	type IntoIter = slice::Iter<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_slice().iter()
	}
}

impl<'v, T, R> IntoIterator for &'v mut Vector<T, R> {
	type Item = &'v mut T;
	type IntoIter = slice::IterMut<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.as_mut_slice().iter_mut()
	}
}

/// An iterator that moves out of a vector.
///
/// Elements that are not consumed are dropped with the iterator.
pub struct IntoIter<T> {
	buf: RawMemory<T>,

	/// Index of the next element yielded from the front.
	offset: usize,

	/// One past the index of the next element yielded from the back.
	end: usize
}

impl<T> IntoIter<T> {
	/// Returns the remaining items of this iterator as a slice.
	pub fn as_slice(&self) -> &[T] {
		unsafe { slice::from_raw_parts(self.buf.slot(self.offset), self.end - self.offset) }
	}
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		if self.offset < self.end {
			let i = self.offset;
			self.offset += 1;
			Some(unsafe { ptr::read(self.buf.slot(i)) })
		} else {
			None
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.end - self.offset;
		(remaining, Some(remaining))
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	fn next_back(&mut self) -> Option<T> {
		if self.offset < self.end {
			self.end -= 1;
			Some(unsafe { ptr::read(self.buf.slot(self.end)) })
		} else {
			None
		}
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
	fn drop(&mut self) {
		unsafe {
			// only drop remaining elements.
			let remaining = self.end - self.offset;
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.slot_mut(self.offset), remaining))
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
	}
}

impl<T, R> IntoIterator for Vector<T, R> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(mut self) -> Self::IntoIter {
		let end = mem::replace(&mut self.len, 0);
		IntoIter {
			buf: self.buf.take(),
			offset: 0,
			end
		}
	}
}

impl<T, R: Relocate<T>> Extend<T> for Vector<T, R> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
		let iterator = iterator.into_iter();
		let (lower, _) = iterator.size_hint();
		let required = self.len.saturating_add(lower);
		if required > self.capacity() {
			let grown = handle_reserve(grown_capacity(self.capacity()));
			self.reserve(cmp::max(required, grown));
		}

		for element in iterator {
			self.push(element)
		}
	}
}

impl<T, R: Relocate<T>> FromIterator<T> for Vector<T, R> {
	fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
		let mut vec = Self::default();
		vec.extend(iterator);
		vec
	}
}

impl<T, R: Relocate<T>> From<Vec<T>> for Vector<T, R> {
	fn from(vec: Vec<T>) -> Self {
		vec.into_iter().collect()
	}
}

impl<'a, T: Clone, R: Relocate<T>> From<&'a [T]> for Vector<T, R> {
	fn from(slice: &'a [T]) -> Self {
		let mut vec = Vector {
			buf: RawMemory::with_capacity(slice.len()),
			len: 0,
			strategy: PhantomData
		};
		vec.extend_from_slice(slice);
		vec
	}
}
