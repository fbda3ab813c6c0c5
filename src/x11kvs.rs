//! Core X11KVS implementation
//!
//! Two layers, composed top-down:
//!
//! - `x11kv` (leaf): chains the 80-byte header through a pseudo-randomly
//!   selected sequence of 2-6 of the eleven 512-bit primitives. The
//!   round count and every primitive choice are read back out of the
//!   running digest, so no round can be precomputed.
//! - `x11kvs` (tree): computes the node's own leaf digest, perturbs the
//!   header nonce with two drift values taken from that digest to build
//!   two sibling headers, recurses on both at `level - 1`, and folds the
//!   three digests with a double SHA-256. A full-depth call evaluates
//!   exactly `2^7 - 1 = 127` leaves - the work-amplification factor of
//!   the construction.
//!
//! Every buffer is a uniquely-owned stack array; sibling subtrees share
//! no state and run in parallel under the `parallel` feature.

use thiserror::Error;

use crate::params::{
    DIGEST_SIZE, HEADER_SIZE, MAX_DRIFT, MAX_ITERATIONS, MAX_LEVEL, MIN_ITERATIONS, MIN_LEVEL,
    NONCE_OFFSET, WIDE_DIGEST_SIZE,
};
use crate::primitives::{compress256_double, primitive512};

/// A 32-byte proof-of-work digest.
pub type Digest = [u8; DIGEST_SIZE];

/// An 80-byte block header. Bytes `[0, 76)` are an opaque prefix; bytes
/// `[76, 80)` hold the little-endian u32 nonce.
pub type Header = [u8; HEADER_SIZE];

/// Input validation failures at the public API boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum X11kvsError {
    /// The header was not exactly 80 bytes.
    #[error("header must be exactly {HEADER_SIZE} bytes, got {0}")]
    InvalidHeaderLength(usize),
    /// The requested recursion level lies outside `[1, 7]`.
    #[error("recursion level must be within [{MIN_LEVEL}, {MAX_LEVEL}], got {0}")]
    InvalidLevel(u32),
}

/// Compute the X11KVS proof-of-work digest of an 80-byte block header.
///
/// Equivalent to [`x11kvs`] at the full recursion depth of 7. Pure and
/// deterministic; the only failure mode is a malformed header length.
pub fn pow_hash(header: &[u8]) -> Result<Digest, X11kvsError> {
    Ok(kvs(check_header(header)?, MAX_LEVEL))
}

/// Compute the drifting recursive tree hash of `header` at `level`.
///
/// `level == 1` is the terminal case and equals [`x11kv`]; each level
/// above doubles the number of leaf evaluations.
pub fn x11kvs(header: &[u8], level: u32) -> Result<Digest, X11kvsError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(X11kvsError::InvalidLevel(level));
    }
    Ok(kvs(check_header(header)?, level))
}

/// Compute the chained multi-primitive leaf hash of `header`.
pub fn x11kv(header: &[u8]) -> Result<Digest, X11kvsError> {
    Ok(kv(check_header(header)?))
}

#[inline]
fn check_header(header: &[u8]) -> Result<&Header, X11kvsError> {
    header
        .try_into()
        .map_err(|_| X11kvsError::InvalidHeaderLength(header.len()))
}

/// Leaf hash: primitive 0 opens the chain, then the running digest
/// selects both the round count and each following primitive.
fn kv(header: &Header) -> Digest {
    let mut wide = primitive512(0, header);

    // Round count in [2, 6], taken from the last byte of round 0.
    let rounds =
        MIN_ITERATIONS + u32::from(wide[WIDE_DIGEST_SIZE - 1]) % (MAX_ITERATIONS - MIN_ITERATIONS + 1);

    for i in 1..rounds as usize {
        // The `i % 64` index is consensus-exact, as is the mod-11
        // reduction applied inside the dispatch.
        let index = wide[i % WIDE_DIGEST_SIZE];
        wide = primitive512(index, &wide);
    }

    let mut out = [0u8; DIGEST_SIZE];
    out.copy_from_slice(&wide[..DIGEST_SIZE]);
    out
}

/// Tree hash over a validated header. Recursion depth is bounded by the
/// public API, so `level` is trusted here.
fn kvs(header: &Header, level: u32) -> Digest {
    let own = kv(header);

    if level == MIN_LEVEL {
        return own;
    }

    let nonce = read_le32(header, NONCE_OFFSET);

    // Drift values reuse digest bytes [24, 28) and [28, 32) as control
    // data. The modulus is 0xFFFF itself (not 0x10000) and the addition
    // wraps; both are required consensus semantics.
    let drift_a = read_le32(&own, 24);
    let drift_b = read_le32(&own, 28);

    let child1 = child_header(header, nonce.wrapping_add(drift_a % MAX_DRIFT));
    let child2 = child_header(header, nonce.wrapping_add(drift_b % MAX_DRIFT));

    let (left, right) = recurse(&child1, &child2, level - 1);

    let mut combined = [0u8; 3 * DIGEST_SIZE];
    combined[..DIGEST_SIZE].copy_from_slice(&own);
    combined[DIGEST_SIZE..2 * DIGEST_SIZE].copy_from_slice(&left);
    combined[2 * DIGEST_SIZE..].copy_from_slice(&right);

    compress256_double(&combined)
}

/// Subtrees below this level stay sequential; near the bottom of the
/// tree a join costs more than the leaves it would split off.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_LEVEL: u32 = 3;

#[inline]
fn recurse(child1: &Header, child2: &Header, level: u32) -> (Digest, Digest) {
    #[cfg(feature = "parallel")]
    if level >= PARALLEL_MIN_LEVEL {
        return rayon::join(|| kvs(child1, level), || kvs(child2, level));
    }

    (kvs(child1, level), kvs(child2, level))
}

#[inline(always)]
fn child_header(header: &Header, nonce: u32) -> Header {
    let mut child = *header;
    child[NONCE_OFFSET..].copy_from_slice(&nonce.to_le_bytes());
    child
}

#[inline(always)]
fn read_le32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}
