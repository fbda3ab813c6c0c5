//! # X11KVS proof-of-work hash
//!
//! X11KVS validates mining work over a fixed 80-byte block header by
//! composing two layers:
//!
//! - **X11KV** - a chained multi-primitive hash. The header is fed
//!   through 2-6 rounds of eleven 512-bit primitives, where both the
//!   round count and each primitive selection are derived from the
//!   running digest itself. No round can be evaluated without executing
//!   the previous one.
//! - **X11KVS** - a drifting recursive binary tree of depth 7. Each
//!   node hashes its header, derives two sibling headers by adding
//!   digest-derived drifts to the nonce, recurses on both, and folds
//!   the three digests with a double SHA-256. A single top-level call
//!   costs `2^7 - 1 = 127` leaf evaluations.
//!
//! The lineage is the Sapphire 2.0 family: X11 for the multi-primitive
//! chain, K from Kyanite, V for the variable iteration count, S from
//! Sapphire.
//!
//! ## Example
//!
//! ```rust
//! use x11kvs::{pow_hash, x11kv};
//!
//! let mut header = [0u8; 80];
//! header[76..].copy_from_slice(&42u32.to_le_bytes()); // nonce
//!
//! let digest = pow_hash(&header)?;
//! assert_eq!(digest.len(), 32);
//!
//! // The terminal leaf hash is also exposed for verification tooling.
//! let leaf = x11kv(&header)?;
//! assert_ne!(digest, leaf);
//! # Ok::<(), x11kvs::X11kvsError>(())
//! ```
//!
//! ## Parallelism
//!
//! Sibling subtrees are independent; with the default `parallel`
//! feature the upper tree levels are evaluated via `rayon::join`.
//! Output is bit-identical with or without the feature.

mod params;
mod primitives;
mod x11kvs;

mod ffi;

pub use params::*;
pub use x11kvs::{Digest, Header, X11kvsError, pow_hash, x11kv, x11kvs};
