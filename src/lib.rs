//! Non-cryptographic FNV hashing with a small command-line front end.
//!
//! [`digest`] computes the 64-bit FNV-1a digest of a byte slice. The
//! [`fnv`] module holds the individual variants and a streaming
//! [`Hasher`](std::hash::Hasher) implementation, while [`Algorithm`] selects a
//! variant at runtime.

pub mod algorithm;
pub mod app_dirs;
pub mod fnv;
pub mod logging;
pub mod render;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use fnv::{BuildFnv1aHasher, Fnv1aHasher, FnvHashMap, FnvHashSet, digest};
pub use render::{Digest, Radix, UnknownRadix};
