//! Property tests for the engine's contractual laws.
//!
//! These exercise the laws the unit tests only spot-check: copy behaves as
//! if the source were fully materialized first, comparison is antisymmetric
//! in its sign, independent fills produce equal regions, and scans agree
//! with a straightforward reference search.

use muon_mem::{
    Guid, compare_mem, copy_mem, scan_mem8, scan_mem32, set_mem32, zero_mem,
};
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    #[test]
    fn copy_is_equivalent_to_copying_through_a_temporary(
        mut arena in vec(any::<u8>(), 64..=64),
        src_off in 0_usize..32,
        dst_off in 0_usize..32,
        len in 0_usize..=32,
    ) {
        let mut expected = arena.clone();
        let tmp = expected[src_off..src_off + len].to_vec();
        expected[dst_off..dst_off + len].copy_from_slice(&tmp);

        unsafe {
            copy_mem(
                arena.as_mut_ptr().add(dst_off),
                arena.as_ptr().add(src_off),
                len,
            );
        }
        prop_assert_eq!(arena, expected);
    }

    #[test]
    fn compare_is_antisymmetric(pairs in vec(any::<(u8, u8)>(), 0..64)) {
        let (a, b): (Vec<u8>, Vec<u8>) = pairs.into_iter().unzip();
        let forward = unsafe { compare_mem(a.as_ptr(), b.as_ptr(), a.len()) };
        let backward = unsafe { compare_mem(b.as_ptr(), a.as_ptr(), b.len()) };
        prop_assert_eq!(forward, -backward);
    }

    #[test]
    fn independent_fills_compare_equal(value in any::<u32>(), count in 0_usize..16) {
        let mut a = vec![0xffff_ffff_u32; count];
        let mut b = vec![0_u32; count];
        let length = count * 4;
        unsafe {
            set_mem32(a.as_mut_ptr().cast(), length, value);
            set_mem32(b.as_mut_ptr().cast(), length, value);
        }
        let difference = unsafe { compare_mem(a.as_ptr().cast(), b.as_ptr().cast(), length) };
        prop_assert_eq!(difference, 0);
    }

    #[test]
    fn zero_fill_then_scan_finds_the_first_byte(len in 1_usize..64) {
        let mut buf = vec![0xaa_u8; len];
        unsafe {
            zero_mem(buf.as_mut_ptr(), len);
        }
        let hit = unsafe { scan_mem8(buf.as_ptr(), len, 0) };
        prop_assert_eq!(hit, buf.as_ptr());
    }

    #[test]
    fn byte_scan_agrees_with_reference_search(
        haystack in vec(any::<u8>(), 0..64),
        needle in any::<u8>(),
    ) {
        let hit = unsafe { scan_mem8(haystack.as_ptr(), haystack.len(), needle) };
        match haystack.iter().position(|&b| b == needle) {
            Some(idx) => prop_assert_eq!(hit, unsafe { haystack.as_ptr().add(idx) }),
            None => prop_assert!(hit.is_null()),
        }
    }

    #[test]
    fn guid_byte_roundtrip(bytes in any::<[u8; 16]>()) {
        prop_assert_eq!(Guid::from_bytes(bytes).to_bytes(), bytes);
    }
}

#[test]
fn filled_buffer_compares_and_scans_consistently() {
    // 8 bytes of 0xff, zeroed through the 32-bit fill.
    let mut buf = [0xffff_ffff_u32; 2];
    let mut other = [0xffff_ffff_u32; 2];
    unsafe {
        set_mem32(buf.as_mut_ptr().cast(), 8, 0);
        set_mem32(other.as_mut_ptr().cast(), 8, 0);
    }
    assert_eq!(buf, [0; 2]);

    let difference = unsafe { compare_mem(buf.as_ptr().cast(), other.as_ptr().cast(), 8) };
    assert_eq!(difference, 0);

    let hit = unsafe { scan_mem32(buf.as_ptr().cast(), 8, 0) };
    assert_eq!(hit, buf.as_ptr().cast());
}
