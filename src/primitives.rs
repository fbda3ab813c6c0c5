//! The hash primitives the X11KVS construction chains over
//!
//! Eleven independent 512-bit digests, invoked by index 0-10, plus the
//! double-round 256-bit finalizer used at internal tree nodes. The
//! construction only requires that each primitive is a pure
//! `bytes -> 64 bytes` function and that the same index always maps to
//! the same primitive; the table below is this crate's reference suite,
//! built from RustCrypto digest implementations. Index 0 additionally
//! serves as the fixed opener of every leaf chain.

use digest::Digest;
use digest::consts::U64;

use crate::params::{DIGEST_SIZE, PRIMITIVE_COUNT, WIDE_DIGEST_SIZE};

type Skein512 = skein::Skein512<U64>;

#[inline(always)]
fn wide_digest<D: Digest>(input: &[u8]) -> [u8; WIDE_DIGEST_SIZE] {
    let mut out = [0u8; WIDE_DIGEST_SIZE];
    out.copy_from_slice(D::digest(input).as_slice());
    out
}

/// Apply the 512-bit primitive at `index` (taken mod 11) to `input`.
#[inline]
pub(crate) fn primitive512(index: u8, input: &[u8]) -> [u8; WIDE_DIGEST_SIZE] {
    match index % PRIMITIVE_COUNT {
        0 => wide_digest::<blake2::Blake2b512>(input),
        1 => wide_digest::<sha2::Sha512>(input),
        2 => wide_digest::<groestl::Groestl512>(input),
        3 => wide_digest::<Skein512>(input),
        4 => wide_digest::<jh::Jh512>(input),
        5 => wide_digest::<sha3::Keccak512>(input),
        6 => wide_digest::<sha3::Sha3_512>(input),
        7 => wide_digest::<whirlpool::Whirlpool>(input),
        8 => wide_digest::<streebog::Streebog512>(input),
        9 => wide_digest::<shabal::Shabal512>(input),
        _ => wide_digest::<fsb::Fsb512>(input),
    }
}

/// Double-round 256-bit finalizer: SHA-256 of the SHA-256 of `input`.
#[inline]
pub(crate) fn compress256_double(input: &[u8]) -> [u8; DIGEST_SIZE] {
    let first = sha2::Sha256::digest(input);
    sha2::Sha256::digest(first.as_slice()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive512_deterministic() {
        let input = [0x5Au8; 80];
        for index in 0..PRIMITIVE_COUNT {
            assert_eq!(primitive512(index, &input), primitive512(index, &input));
        }
    }

    #[test]
    fn test_primitives_are_distinct() {
        // Every index must map to a different function, otherwise the
        // chain selection loses entropy.
        let input = [0u8; 80];
        let digests: Vec<_> = (0..PRIMITIVE_COUNT)
            .map(|index| primitive512(index, &input))
            .collect();
        for i in 0..digests.len() {
            for j in (i + 1)..digests.len() {
                assert_ne!(digests[i], digests[j], "primitives {i} and {j} collide");
            }
        }
    }

    #[test]
    fn test_primitive_index_wraps_mod_11() {
        let input = [7u8; 64];
        assert_eq!(primitive512(11, &input), primitive512(0, &input));
        assert_eq!(primitive512(255, &input), primitive512(255 % 11, &input));
    }

    #[test]
    fn test_compress256_is_double_sha256() {
        let input = [0xABu8; 96];
        let single: [u8; 32] = sha2::Sha256::digest(input).into();
        let double = compress256_double(&input);
        assert_eq!(
            double,
            <[u8; 32]>::from(sha2::Sha256::digest(single))
        );
        assert_ne!(double, single);
    }
}
