//! Unified hashing utilities using FxHash.
//!
//! Uses `rustc_hash::FxHasher` for:
//! - Fast, deterministic hashing (optimized for small data)
//! - Unseeded state, so the same input hashes identically on every run
//!   and every platform
//!
//! The constant-name suffix scheme depends on both properties: generated
//! files must be byte-identical across regenerations, and the suffix for an
//! empty input must be `0`.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let h = hash::compute("assets/logo.png"); // -> u64
//! ```

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
///
/// The result is unsigned, so the absolute-value step of the name-suffix
/// derivation is inherent. Hashing an empty input yields `0`.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}
