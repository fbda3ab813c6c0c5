//! X11KVS algorithm parameters
//!
//! These constants are consensus-critical: changing any of them changes
//! every digest the crate produces.

/// Block header size in bytes
pub const HEADER_SIZE: usize = 80;

/// Byte offset of the little-endian u32 nonce inside the header
pub const NONCE_OFFSET: usize = 76;

/// Output digest size in bytes
pub const DIGEST_SIZE: usize = 32;

/// Size of the 512-bit working digest chained through the leaf rounds
pub const WIDE_DIGEST_SIZE: usize = 64;

/// Minimum number of primitive rounds in the leaf chain
pub const MIN_ITERATIONS: u32 = 2;

/// Maximum number of primitive rounds in the leaf chain
pub const MAX_ITERATIONS: u32 = 6;

/// Number of 512-bit primitives the leaf chain selects from
pub const PRIMITIVE_COUNT: u8 = 11;

/// Terminal recursion level (a leaf computation)
pub const MIN_LEVEL: u32 = 1;

/// Recursion level used by the public entry point
pub const MAX_LEVEL: u32 = 7;

/// Modulus bounding the nonce drift applied to child headers
pub const MAX_DRIFT: u32 = 0xFFFF;
