//! Instrumented element type shared by the integration tests.
#![allow(dead_code)]

use std::cell::Cell;

thread_local! {
	static LIVE: Cell<isize> = Cell::new(0);
	static DEFAULTS: Cell<usize> = Cell::new(0);
	static CLONES: Cell<usize> = Cell::new(0);
	static DROPS: Cell<usize> = Cell::new(0);
	static FUSE: Cell<Option<usize>> = Cell::new(None);
}

/// Snapshot of the counters of the current thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
	pub live: isize,
	pub defaults: usize,
	pub clones: usize,
	pub drops: usize
}

pub fn stats() -> Stats {
	Stats {
		live: LIVE.with(Cell::get),
		defaults: DEFAULTS.with(Cell::get),
		clones: CLONES.with(Cell::get),
		drops: DROPS.with(Cell::get)
	}
}

/// Resets every counter but `live`, and disarms the fuse.
pub fn reset() {
	DEFAULTS.with(|c| c.set(0));
	CLONES.with(|c| c.set(0));
	DROPS.with(|c| c.set(0));
	FUSE.with(|c| c.set(None));
}

/// The `k`th construction from now on (1 is the next one) panics.
pub fn arm(k: usize) {
	assert!(k > 0);
	FUSE.with(|c| c.set(Some(k)));
}

fn tick() {
	FUSE.with(|fuse| {
		if let Some(n) = fuse.get() {
			if n <= 1 {
				fuse.set(None);
				panic!("armed construction");
			}
			fuse.set(Some(n - 1));
		}
	})
}

/// A value whose constructions, clones and drops are counted per thread.
#[derive(Debug, PartialEq, Eq)]
pub struct Tracked(pub u32);

impl Tracked {
	pub fn new(value: u32) -> Self {
		tick();
		LIVE.with(|c| c.set(c.get() + 1));
		Tracked(value)
	}
}

impl Default for Tracked {
	fn default() -> Self {
		tick();
		DEFAULTS.with(|c| c.set(c.get() + 1));
		LIVE.with(|c| c.set(c.get() + 1));
		Tracked(0)
	}
}

impl Clone for Tracked {
	fn clone(&self) -> Self {
		tick();
		CLONES.with(|c| c.set(c.get() + 1));
		LIVE.with(|c| c.set(c.get() + 1));
		Tracked(self.0)
	}
}

impl Drop for Tracked {
	fn drop(&mut self) {
		DROPS.with(|c| c.set(c.get() + 1));
		LIVE.with(|c| c.set(c.get() - 1));
	}
}

/// Values of a sequence of `Tracked`.
pub fn values(items: &[Tracked]) -> Vec<u32> {
	items.iter().map(|t| t.0).collect()
}
