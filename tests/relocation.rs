//! Which relocation is used on reallocation, and how much of it.
mod common;

use advanced_vec::{
	ByClone,
	ByMove,
	Relocate,
	Vector
};
use common::{
	reset,
	stats,
	values,
	Tracked
};

#[test]
fn capability_query() {
	assert!(<ByMove as Relocate<Tracked>>::INFALLIBLE);
	assert!(!<ByClone as Relocate<Tracked>>::INFALLIBLE);
}

#[test]
fn reserve_by_clone_copies_then_drops_originals() {
	let mut v = Vector::with_capacity_in(3, ByClone);
	for i in 1..=3 {
		v.push(Tracked::new(i));
	}

	reset();
	v.reserve(8);
	let s = stats();
	assert_eq!(s.clones, 3);
	assert_eq!(s.drops, 3);
	assert_eq!(s.live, 3);
	assert_eq!(v.capacity(), 8);
	assert_eq!(values(&v), [1, 2, 3]);
}

#[test]
fn reserve_by_move_never_clones() {
	let mut v = Vector::with_capacity(3);
	for i in 1..=3 {
		v.push(Tracked::new(i));
	}

	reset();
	v.reserve(8);
	let s = stats();
	assert_eq!(s.clones, 0);
	assert_eq!(s.drops, 0);
	assert_eq!(v.capacity(), 8);
	assert_eq!(values(&v), [1, 2, 3]);
}

#[test]
fn reserve_within_capacity_relocates_nothing() {
	let mut v = Vector::with_capacity_in(4, ByClone);
	v.push(Tracked::new(1));
	let ptr = v.as_ptr();

	reset();
	v.reserve(2);
	v.reserve(4);
	assert_eq!(stats().clones, 0);
	assert_eq!(v.capacity(), 4);
	assert_eq!(v.as_ptr(), ptr);
}

#[test]
fn growth_doubles_capacity() {
	let mut v: Vector<u64> = Vector::new();
	let mut capacities = vec![v.capacity()];
	for i in 0..100 {
		let before = v.capacity();
		v.push(i);
		if v.capacity() != before {
			assert_eq!(v.capacity(), std::cmp::max(1, 2 * before));
			capacities.push(v.capacity());
		}
	}
	assert_eq!(capacities, [0, 1, 2, 4, 8, 16, 32, 64, 128]);
}

#[test]
fn appends_relocate_a_linear_number_of_elements() {
	const N: u32 = 1000;

	let mut v = Vector::new_in(ByClone);
	reset();
	for i in 0..N {
		v.push(Tracked::new(i));
	}

	// 1 + 2 + 4 + ... + 512
	assert_eq!(stats().clones, 1023);
	assert!(stats().clones < 2 * N as usize);
	assert_eq!(v.len(), N as usize);
	assert_eq!(v[N as usize - 1].0, N - 1);
}

#[test]
fn repeated_extends_relocate_a_linear_number_of_elements() {
	const N: u32 = 1000;

	let mut v = Vector::new_in(ByClone);
	reset();
	for i in 0..N {
		v.extend(Some(Tracked::new(i)));
	}

	// 1 + 2 + 4 + ... + 512
	assert_eq!(stats().clones, 1023);
	assert_eq!(v.capacity(), 1024);
	assert_eq!(values(&v[..3]), [0, 1, 2]);
}

#[test]
fn insert_growth_keeps_order_with_both_strategies() {
	let mut moved: Vector<String> = Vector::new();
	let mut cloned = Vector::new_in(ByClone);
	for s in &["a", "b", "d", "e"] {
		moved.push(s.to_string());
		cloned.push(s.to_string());
	}

	moved.insert(2, "c".to_string());
	cloned.insert(2, "c".to_string());
	assert_eq!(moved.as_slice(), &["a", "b", "c", "d", "e"]);
	assert_eq!(moved.as_slice(), cloned.as_slice());
	assert_eq!(moved.capacity(), cloned.capacity());
}

#[test]
fn shrink_to_fit_uses_the_strategy() {
	let mut v = Vector::with_capacity_in(10, ByClone);
	for i in 0..4 {
		v.push(Tracked::new(i));
	}

	reset();
	v.shrink_to_fit();
	assert_eq!(v.capacity(), 4);
	assert_eq!(stats().clones, 4);
	assert_eq!(stats().drops, 4);
}

#[test]
fn non_clone_types_are_moved() {
	struct Unique(Box<u8>);

	let mut v = Vector::new();
	for i in 0..10 {
		v.push(Unique(Box::new(i)));
	}
	v.insert(0, Unique(Box::new(42)));
	assert_eq!(*v[0].0, 42);
	assert_eq!(*v[10].0, 9);
}

#[test]
fn drop_releases_every_element() {
	{
		let mut v = Vector::new_in(ByClone);
		for i in 0..37 {
			v.push(Tracked::new(i));
		}
		v.insert(5, Tracked::new(100));
		v.remove(0);
		let _ = v.pop();
		let mut it = v.clone().into_iter();
		it.next();
		it.next_back();
	}
	assert_eq!(stats().live, 0);
}
