//! Overlap-safe region copy.

use crate::assert_unsafe_precondition;
use crate::safety::range_wraps;

/// Copies `length` bytes from `src` to `dest` and returns `dest`.
///
/// The two regions may overlap arbitrarily: the result is always identical
/// to reading all of `src` before writing any byte of `dest` (`memmove`
/// semantics). The copy direction is chosen by address order so that
/// overlapping ranges read each byte before it is overwritten.
///
/// A `length` of 0 is a no-op and permits null pointers.
///
/// # Safety
///
/// - `src` must be valid for reads of `length` bytes and `dest` valid for
///   writes of `length` bytes.
/// - Neither range may wrap past the maximum representable address.
/// - Null pointers are only permitted when `length` is 0.
pub unsafe fn copy_mem(dest: *mut u8, src: *const u8, length: usize) -> *mut u8 {
    assert_unsafe_precondition!(
        length == 0 || (!dest.is_null() && !src.is_null()),
        "copy_mem: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(dest as usize, length),
        "copy_mem: destination range wraps the address space"
    );
    assert_unsafe_precondition!(
        !range_wraps(src as usize, length),
        "copy_mem: source range wraps the address space"
    );

    if length == 0 || core::ptr::eq(dest.cast_const(), src) {
        return dest;
    }

    if (dest as usize) < (src as usize) {
        // Destination below source: an ascending pass reads every source
        // byte before the copy can overwrite it.
        for i in 0..length {
            unsafe { dest.add(i).write(src.add(i).read()) };
        }
    } else {
        // Destination above source: descend instead.
        for i in (0..length).rev() {
            unsafe { dest.add(i).write(src.add(i).read()) };
        }
    }

    dest
}
