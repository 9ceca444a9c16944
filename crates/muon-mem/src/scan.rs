//! Forward linear scan for a fixed-width value.
//!
//! Scans walk a buffer from its lowest to its highest address at the
//! stride of the searched width and return the address of the first
//! matching slot, or null when nothing matches. They are single-pass and
//! read-only; there is no assumption of sortedness and no auxiliary index.
//! The intended use is small fixed-size metadata lookups, not large-buffer
//! search.

use core::mem::size_of;

use crate::assert_unsafe_precondition;
use crate::safety::{is_aligned, range_wraps};

/// Returns the address of the first `size_of::<T>()`-wide slot equal to
/// `value`, or null.
///
/// Callers have already checked the alignment and wrap contracts.
unsafe fn scan_pattern<T: Copy + PartialEq>(buffer: *const u8, length: usize, value: T) -> *const u8 {
    let ptr = buffer.cast::<T>();
    for i in 0..length / size_of::<T>() {
        if unsafe { ptr.add(i).read() } == value {
            return unsafe { buffer.add(i * size_of::<T>()) };
        }
    }
    core::ptr::null()
}

/// Scans `length` bytes of `buffer` for the first byte equal to `value`.
///
/// Returns the address of the match, or null if there is none or `length`
/// is 0.
///
/// # Safety
///
/// - `buffer` must be valid for reads of `length` bytes.
/// - The range may not wrap past the maximum representable address.
/// - A null `buffer` is only permitted when `length` is 0.
#[must_use]
pub unsafe fn scan_mem8(buffer: *const u8, length: usize, value: u8) -> *const u8 {
    assert_unsafe_precondition!(
        length == 0 || !buffer.is_null(),
        "scan_mem8: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(buffer as usize, length),
        "scan_mem8: range wraps the address space"
    );

    unsafe { scan_pattern(buffer, length, value) }
}

/// Scans `length` bytes of `buffer` at 16-bit stride for the first slot
/// equal to `value`.
///
/// Returns the address of the match, or null if there is none or `length`
/// is 0.
///
/// # Safety
///
/// - `buffer` must be valid for reads of `length` bytes.
/// - `buffer` and `length` must both be multiples of 2.
/// - The range may not wrap past the maximum representable address.
/// - A null `buffer` is only permitted when `length` is 0.
#[must_use]
pub unsafe fn scan_mem16(buffer: *const u8, length: usize, value: u16) -> *const u8 {
    assert_unsafe_precondition!(
        length == 0 || !buffer.is_null(),
        "scan_mem16: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(buffer as usize, length),
        "scan_mem16: range wraps the address space"
    );
    assert_unsafe_precondition!(
        is_aligned(buffer as usize, 2) && is_aligned(length, 2),
        "scan_mem16: buffer or length not 16-bit aligned"
    );

    unsafe { scan_pattern(buffer, length, value) }
}

/// Scans `length` bytes of `buffer` at 32-bit stride for the first slot
/// equal to `value`.
///
/// Returns the address of the match, or null if there is none or `length`
/// is 0.
///
/// # Safety
///
/// - `buffer` must be valid for reads of `length` bytes.
/// - `buffer` and `length` must both be multiples of 4.
/// - The range may not wrap past the maximum representable address.
/// - A null `buffer` is only permitted when `length` is 0.
#[must_use]
pub unsafe fn scan_mem32(buffer: *const u8, length: usize, value: u32) -> *const u8 {
    assert_unsafe_precondition!(
        length == 0 || !buffer.is_null(),
        "scan_mem32: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(buffer as usize, length),
        "scan_mem32: range wraps the address space"
    );
    assert_unsafe_precondition!(
        is_aligned(buffer as usize, 4) && is_aligned(length, 4),
        "scan_mem32: buffer or length not 32-bit aligned"
    );

    unsafe { scan_pattern(buffer, length, value) }
}

/// Scans `length` bytes of `buffer` at 64-bit stride for the first slot
/// equal to `value`.
///
/// Returns the address of the match, or null if there is none or `length`
/// is 0.
///
/// # Safety
///
/// - `buffer` must be valid for reads of `length` bytes.
/// - `buffer` and `length` must both be multiples of 8.
/// - The range may not wrap past the maximum representable address.
/// - A null `buffer` is only permitted when `length` is 0.
#[must_use]
pub unsafe fn scan_mem64(buffer: *const u8, length: usize, value: u64) -> *const u8 {
    assert_unsafe_precondition!(
        length == 0 || !buffer.is_null(),
        "scan_mem64: null buffer with nonzero length"
    );
    assert_unsafe_precondition!(
        !range_wraps(buffer as usize, length),
        "scan_mem64: range wraps the address space"
    );
    assert_unsafe_precondition!(
        is_aligned(buffer as usize, 8) && is_aligned(length, 8),
        "scan_mem64: buffer or length not 64-bit aligned"
    );

    unsafe { scan_pattern(buffer, length, value) }
}
