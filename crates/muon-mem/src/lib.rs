//! Freestanding memory primitives for firmware and early boot.
//!
//! This crate provides the byte- and word-oriented operations that the rest
//! of a firmware stack is built on: overlap-safe copy, pattern fill at
//! 8/16/32/64-bit granularity, byte-wise comparison, forward linear scan,
//! and 128-bit GUID operations. It is usable before any OS services or heap
//! exist: no allocation, no internal state, no blocking.
//!
//! # Overview
//!
//! All operations are call-scoped transformations over caller-owned memory,
//! expressed as raw address in, raw address out. The crate never takes
//! ownership of a buffer, and every function is reentrant and safe to call
//! from interrupt-like contexts as long as the per-operation aliasing
//! contract is respected (only [`copy_mem`] tolerates overlap).
//!
//! # Architecture
//!
//! - [`copy`] - overlap-safe region copy with `memmove` semantics
//! - [`fill`] - pattern fill at fixed widths, plus the zero-fill special case
//! - [`compare`] - byte-wise equality and ordering of two regions
//! - [`scan`] - forward linear search for a fixed-width value
//! - [`guid`] - the [`Guid`] type and its copy/equality/scan operations
//! - [`safety`] - the precondition assertion facility shared by all of the above
//!
//! # Contract model
//!
//! There is no recoverable-error taxonomy at this layer. Scans report "not
//! found" through a null return, comparison reports equality through zero;
//! everything else that can go wrong is a caller contract violation
//! (null pointer with nonzero length, address-space wraparound, misaligned
//! wide access). Violations are caught by the `assert_unsafe_precondition!`
//! macro in debug and `muon_hardened` builds and are undefined behavior in
//! default release builds; see [`safety`] for the build-configuration table.

#![cfg_attr(not(test), no_std)]

pub mod compare;
pub mod copy;
pub mod fill;
pub mod guid;
pub mod safety;
pub mod scan;

pub use compare::{compare_mem, is_zero_buffer};
pub use copy::copy_mem;
pub use fill::{set_mem, set_mem16, set_mem32, set_mem64, zero_mem};
pub use guid::{Guid, compare_guid, copy_guid, is_zero_guid, scan_guid};
pub use scan::{scan_mem8, scan_mem16, scan_mem32, scan_mem64};
