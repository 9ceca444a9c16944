//! Byte-wise comparison of memory regions.

use crate::assert_unsafe_precondition;
use crate::safety::range_wraps;

/// Compares `length` bytes of `dest` against `src`, low address to high.
///
/// Returns 0 if every byte matches. At the first mismatch, returns the
/// destination byte minus the source byte as a signed value; callers may
/// rely on the sign for ordering, not just on it being nonzero. A `length`
/// of 0 always compares equal.
///
/// # Safety
///
/// - Both pointers must be valid for reads of `length` bytes.
/// - Neither range may wrap past the maximum representable address.
/// - Null pointers are only permitted when `length` is 0.
#[must_use]
pub unsafe fn compare_mem(dest: *const u8, src: *const u8, length: usize) -> isize {
    assert_unsafe_precondition!(
        length == 0 || (!dest.is_null() && !src.is_null()),
        "compare_mem: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(dest as usize, length) && !range_wraps(src as usize, length),
        "compare_mem: range wraps the address space"
    );

    for i in 0..length {
        let d = unsafe { dest.add(i).read() };
        let s = unsafe { src.add(i).read() };
        if d != s {
            return isize::from(d) - isize::from(s);
        }
    }
    0
}

/// Returns `true` if every byte of the range is zero.
///
/// A `length` of 0 is vacuously zero and permits a null pointer.
///
/// # Safety
///
/// - `buffer` must be valid for reads of `length` bytes.
/// - The range may not wrap past the maximum representable address.
/// - A null `buffer` is only permitted when `length` is 0.
#[must_use]
pub unsafe fn is_zero_buffer(buffer: *const u8, length: usize) -> bool {
    assert_unsafe_precondition!(
        length == 0 || !buffer.is_null(),
        "is_zero_buffer: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(buffer as usize, length),
        "is_zero_buffer: range wraps the address space"
    );

    for i in 0..length {
        if unsafe { buffer.add(i).read() } != 0 {
            return false;
        }
    }
    true
}
