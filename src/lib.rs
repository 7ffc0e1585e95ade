//! This crate provides the [`Vector`] data structure, a growable contiguous
//! array built directly on top of an untyped buffer, [`RawMemory`].
//!
//! The two layers are strictly separated.
//! A `RawMemory<T>` only owns memory for a given number of `T` values: it never
//! builds nor drops any of them.
//! A `Vector<T>` owns exactly one `RawMemory<T>` and a length, and is
//! responsible for every value living in it.
//!
//! ## Basic usage
//!
//! ```rust
//! use advanced_vec::Vector;
//!
//! let mut v = Vector::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! assert_eq!((v.len(), v.capacity()), (3, 4)); // the capacity doubles: 1, 2, 4.
//!
//! v.insert(1, 99);
//! assert_eq!(v.as_slice(), &[1, 99, 2, 3]);
//!
//! v.remove(0);
//! assert_eq!(v.as_slice(), &[99, 2, 3]);
//! ```
//!
//! ## Panic safety
//!
//! Building an element is allowed to panic. Every operation that builds
//! elements (`with_len`, `clone`, `push`, `emplace_back`, `insert`, `emplace`,
//! `resize`, `reserve`) keeps the length and elements the vector had before
//! the call when that happens, and no element is leaked or dropped twice.
//! Only `resize` may have grown the capacity by then.
//!
//! When the vector reallocates, the existing elements are carried over
//! according to a [`Relocate`] strategy chosen as a type parameter.
//! The default, [`ByMove`], moves them (which cannot fail in Rust).
//! [`ByClone`] clones them instead and only drops the originals once every
//! clone succeeded:
//! ```rust
//! use advanced_vec::{Vector, ByClone};
//!
//! let mut v = Vector::new_in(ByClone);
//! v.push(String::from("a"));
//! v.push(String::from("b")); // "a" is cloned into the new buffer.
//! ```
//!
//! ## Allocation failures
//!
//! Allocating methods come in two flavors. `reserve`, `push`, `insert`, etc.
//! panic on capacity overflow and abort through
//! [`handle_alloc_error`](std::alloc::handle_alloc_error) when the allocator
//! fails. `try_reserve`, `try_push`, `try_insert`, etc. return a
//! [`TryReserveError`] instead, leaving the vector untouched.
pub mod error;
pub mod raw;
pub mod relocate;
pub mod vec;

pub use error::{
	IndexError,
	TryReserveError
};
pub use raw::RawMemory;
pub use relocate::{
	ByClone,
	ByMove,
	Relocate
};
pub use vec::{
	IntoIter,
	Vector
};
