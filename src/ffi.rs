//! C FFI bindings for pool software
//!
//! Mirrors the `libmultihash` export surface: one call that maps an
//! 80-byte header to a 32-byte digest. Unlike the historical C export,
//! the length argument is actually checked instead of trusted.

use core::slice;

use crate::params::{DIGEST_SIZE, HEADER_SIZE};

/// Compute the X11KVS proof-of-work digest of an 80-byte header.
///
/// - `input`: pointer to the header bytes
/// - `output`: pointer to a 32-byte buffer receiving the digest
/// - `len`: header length; must be 80
///
/// Returns 0 on success, -1 on a null pointer or wrong length.
#[unsafe(no_mangle)]
pub extern "C" fn x11kvs_hash(input: *const u8, output: *mut u8, len: u32) -> i32 {
    if input.is_null() || output.is_null() || len as usize != HEADER_SIZE {
        return -1;
    }

    unsafe {
        let header = slice::from_raw_parts(input, HEADER_SIZE);
        let Ok(digest) = crate::pow_hash(header) else {
            return -1;
        };
        slice::from_raw_parts_mut(output, DIGEST_SIZE).copy_from_slice(&digest);
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_matches_library_call() {
        let header = [0x11u8; HEADER_SIZE];
        let mut out = [0u8; DIGEST_SIZE];

        let status = x11kvs_hash(header.as_ptr(), out.as_mut_ptr(), HEADER_SIZE as u32);

        assert_eq!(status, 0);
        assert_eq!(out, crate::pow_hash(&header).unwrap());
    }

    #[test]
    fn test_ffi_rejects_bad_arguments() {
        let header = [0u8; HEADER_SIZE];
        let mut out = [0u8; DIGEST_SIZE];

        assert_eq!(x11kvs_hash(core::ptr::null(), out.as_mut_ptr(), 80), -1);
        assert_eq!(x11kvs_hash(header.as_ptr(), core::ptr::null_mut(), 80), -1);
        assert_eq!(x11kvs_hash(header.as_ptr(), out.as_mut_ptr(), 79), -1);
    }
}
