//! Fowler–Noll–Vo hash functions.
//!
//! Both the FNV-1 (multiply, then xor) and FNV-1a (xor, then multiply) orderings
//! are provided in 64-bit and 32-bit widths. Every function is a `const fn` so
//! digests can be computed at compile time.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hasher};

/// 64-bit offset basis.
pub const OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;
/// 64-bit FNV prime.
pub const PRIME_64: u64 = 0x0000_0100_0000_01b3;
/// 32-bit offset basis.
pub const OFFSET_BASIS_32: u32 = 0x811c_9dc5;
/// 32-bit FNV prime.
pub const PRIME_32: u32 = 0x0100_0193;

/// Compute the 64-bit FNV-1a digest of `bytes`.
///
/// This is the digest printed by the `fnvsum` binary. An empty slice yields
/// [`OFFSET_BASIS_64`].
#[inline]
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
	let mut acc = OFFSET_BASIS_64;
	let mut i = 0;
	while i < bytes.len() {
		acc = (acc ^ bytes[i] as u64).wrapping_mul(PRIME_64);
		i += 1;
	}
	acc
}

/// Compute the 64-bit FNV-1 digest of `bytes`.
#[inline]
pub const fn fnv1_64(bytes: &[u8]) -> u64 {
	let mut acc = OFFSET_BASIS_64;
	let mut i = 0;
	while i < bytes.len() {
		acc = acc.wrapping_mul(PRIME_64) ^ bytes[i] as u64;
		i += 1;
	}
	acc
}

/// Compute the 32-bit FNV-1a digest of `bytes`.
#[inline]
pub const fn fnv1a_32(bytes: &[u8]) -> u32 {
	let mut acc = OFFSET_BASIS_32;
	let mut i = 0;
	while i < bytes.len() {
		acc = (acc ^ bytes[i] as u32).wrapping_mul(PRIME_32);
		i += 1;
	}
	acc
}

/// Compute the 32-bit FNV-1 digest of `bytes`.
#[inline]
pub const fn fnv1_32(bytes: &[u8]) -> u32 {
	let mut acc = OFFSET_BASIS_32;
	let mut i = 0;
	while i < bytes.len() {
		acc = acc.wrapping_mul(PRIME_32) ^ bytes[i] as u32;
		i += 1;
	}
	acc
}

/// The default digest: 64-bit FNV-1a.
#[inline]
pub const fn digest(input: &[u8]) -> u64 {
	fnv1a_64(input)
}

/// Streaming 64-bit FNV-1a state implementing [`Hasher`].
///
/// Feeding bytes through any number of [`Hasher::write`] calls produces the
/// same value as a single [`fnv1a_64`] over their concatenation. Note that the
/// integer `write_*` helpers from [`Hasher`] feed native-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1aHasher {
	state: u64,
}

impl Fnv1aHasher {
	/// Start a fresh hasher at the offset basis.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			state: OFFSET_BASIS_64,
		}
	}

	/// Resume hashing from a previously observed state.
	#[must_use]
	pub const fn with_state(state: u64) -> Self {
		Self { state }
	}
}

impl Default for Fnv1aHasher {
	fn default() -> Self {
		Self::new()
	}
}

impl Hasher for Fnv1aHasher {
	#[inline]
	fn write(&mut self, bytes: &[u8]) {
		let mut acc = self.state;
		for &byte in bytes {
			acc = (acc ^ u64::from(byte)).wrapping_mul(PRIME_64);
		}
		self.state = acc;
	}

	#[inline]
	fn finish(&self) -> u64 {
		self.state
	}
}

/// [`BuildHasher`](std::hash::BuildHasher) for [`Fnv1aHasher`].
pub type BuildFnv1aHasher = BuildHasherDefault<Fnv1aHasher>;

/// `HashMap` keyed with FNV-1a.
pub type FnvHashMap<K, V> = HashMap<K, V, BuildFnv1aHasher>;

/// `HashSet` keyed with FNV-1a.
pub type FnvHashSet<T> = HashSet<T, BuildFnv1aHasher>;
