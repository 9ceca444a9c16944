//! Pattern fill at 8/16/32/64-bit granularity.

use core::mem::size_of;

use crate::assert_unsafe_precondition;
use crate::safety::{is_aligned, range_wraps};

/// Writes `value` to every `size_of::<T>()`-byte slot of the range.
///
/// Callers have already checked the alignment and wrap contracts.
unsafe fn fill_pattern<T: Copy>(buffer: *mut u8, length: usize, value: T) {
    let ptr = buffer.cast::<T>();
    for i in 0..length / size_of::<T>() {
        unsafe { ptr.add(i).write(value) };
    }
}

/// Fills `length` bytes of `buffer` with the byte `value` and returns
/// `buffer`.
///
/// A `length` of 0 is a no-op and permits a null pointer.
///
/// # Safety
///
/// - `buffer` must be valid for writes of `length` bytes.
/// - The range may not wrap past the maximum representable address.
/// - A null `buffer` is only permitted when `length` is 0.
pub unsafe fn set_mem(buffer: *mut u8, length: usize, value: u8) -> *mut u8 {
    assert_unsafe_precondition!(
        length == 0 || !buffer.is_null(),
        "set_mem: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(buffer as usize, length),
        "set_mem: range wraps the address space"
    );

    unsafe { fill_pattern(buffer, length, value) };
    buffer
}

/// Fills `length` bytes of `buffer` with the 16-bit `value`, repeated every
/// two bytes, and returns `buffer`.
///
/// # Safety
///
/// - `buffer` must be valid for writes of `length` bytes.
/// - `buffer` and `length` must both be multiples of 2.
/// - The range may not wrap past the maximum representable address.
/// - A null `buffer` is only permitted when `length` is 0.
pub unsafe fn set_mem16(buffer: *mut u8, length: usize, value: u16) -> *mut u8 {
    assert_unsafe_precondition!(
        length == 0 || !buffer.is_null(),
        "set_mem16: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(buffer as usize, length),
        "set_mem16: range wraps the address space"
    );
    assert_unsafe_precondition!(
        is_aligned(buffer as usize, 2) && is_aligned(length, 2),
        "set_mem16: buffer or length not 16-bit aligned"
    );

    unsafe { fill_pattern(buffer, length, value) };
    buffer
}

/// Fills `length` bytes of `buffer` with the 32-bit `value`, repeated every
/// four bytes, and returns `buffer`.
///
/// # Safety
///
/// - `buffer` must be valid for writes of `length` bytes.
/// - `buffer` and `length` must both be multiples of 4.
/// - The range may not wrap past the maximum representable address.
/// - A null `buffer` is only permitted when `length` is 0.
pub unsafe fn set_mem32(buffer: *mut u8, length: usize, value: u32) -> *mut u8 {
    assert_unsafe_precondition!(
        length == 0 || !buffer.is_null(),
        "set_mem32: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(buffer as usize, length),
        "set_mem32: range wraps the address space"
    );
    assert_unsafe_precondition!(
        is_aligned(buffer as usize, 4) && is_aligned(length, 4),
        "set_mem32: buffer or length not 32-bit aligned"
    );

    unsafe { fill_pattern(buffer, length, value) };
    buffer
}

/// Fills `length` bytes of `buffer` with the 64-bit `value`, repeated every
/// eight bytes, and returns `buffer`.
///
/// # Safety
///
/// - `buffer` must be valid for writes of `length` bytes.
/// - `buffer` and `length` must both be multiples of 8.
/// - The range may not wrap past the maximum representable address.
/// - A null `buffer` is only permitted when `length` is 0.
pub unsafe fn set_mem64(buffer: *mut u8, length: usize, value: u64) -> *mut u8 {
    assert_unsafe_precondition!(
        length == 0 || !buffer.is_null(),
        "set_mem64: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(buffer as usize, length),
        "set_mem64: range wraps the address space"
    );
    assert_unsafe_precondition!(
        is_aligned(buffer as usize, 8) && is_aligned(length, 8),
        "set_mem64: buffer or length not 64-bit aligned"
    );

    unsafe { fill_pattern(buffer, length, value) };
    buffer
}

/// Fills `length` bytes of `buffer` with zeros and returns `buffer`.
///
/// This is the all-zero specialization of [`set_mem`]; it carries no
/// alignment requirement.
///
/// # Safety
///
/// Same contract as [`set_mem`].
pub unsafe fn zero_mem(buffer: *mut u8, length: usize) -> *mut u8 {
    assert_unsafe_precondition!(
        length == 0 || !buffer.is_null(),
        "zero_mem: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(buffer as usize, length),
        "zero_mem: range wraps the address space"
    );

    unsafe { fill_pattern(buffer, length, 0_u8) };
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_fill_covers_whole_range() {
        let mut buf = [0_u8; 5];
        let ret = unsafe { set_mem(buf.as_mut_ptr(), 5, 0xa5) };
        assert_eq!(buf, [0xa5; 5]);
        assert_eq!(ret, buf.as_mut_ptr());
    }

    #[test]
    fn byte_fill_respects_length() {
        let mut buf = [0_u8; 5];
        unsafe { set_mem(buf.as_mut_ptr(), 3, 0xff) };
        assert_eq!(buf, [0xff, 0xff, 0xff, 0, 0]);
    }

    #[test]
    fn wide_fills_replicate_the_pattern() {
        let mut buf16 = [0_u16; 4];
        unsafe { set_mem16(buf16.as_mut_ptr().cast(), 8, 0xbeef) };
        assert_eq!(buf16, [0xbeef; 4]);

        let mut buf32 = [0_u32; 2];
        unsafe { set_mem32(buf32.as_mut_ptr().cast(), 8, 0xdead_beef) };
        assert_eq!(buf32, [0xdead_beef; 2]);

        let mut buf64 = [0_u64; 2];
        unsafe { set_mem64(buf64.as_mut_ptr().cast(), 16, 0x0123_4567_89ab_cdef) };
        assert_eq!(buf64, [0x0123_4567_89ab_cdef; 2]);
    }

    #[test]
    fn zero_fill_clears_the_range() {
        let mut buf = [0xff_u8; 8];
        unsafe { zero_mem(buf.as_mut_ptr(), 8) };
        assert_eq!(buf, [0; 8]);
    }

    #[test]
    fn zero_length_fill_ignores_null() {
        let ret = unsafe { set_mem(core::ptr::null_mut(), 0, 0x42) };
        assert!(ret.is_null());
        let ret = unsafe { zero_mem(core::ptr::null_mut(), 0) };
        assert!(ret.is_null());
    }

    #[test]
    #[should_panic(expected = "set_mem16: buffer or length not 16-bit aligned")]
    fn misaligned_wide_fill_panics() {
        let mut buf = [0_u16; 4];
        // Offset by one byte to guarantee a misaligned start.
        unsafe { set_mem16(buf.as_mut_ptr().cast::<u8>().add(1), 2, 0) };
    }

    #[test]
    #[should_panic(expected = "set_mem32: buffer or length not 32-bit aligned")]
    fn odd_length_wide_fill_panics() {
        let mut buf = [0_u32; 2];
        unsafe { set_mem32(buf.as_mut_ptr().cast(), 6, 0) };
    }

    #[test]
    #[should_panic(expected = "zero_mem: null buffer with nonzero length")]
    fn null_zero_fill_with_nonzero_length_panics() {
        unsafe { zero_mem(core::ptr::null_mut(), 1) };
    }
}
