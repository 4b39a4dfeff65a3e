// Copyright 2025 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

//! Skein hash functions, Skein-MAC, and the Threefish tweakable block cipher.
//!
//! Skein is built from three parts:
//!
//! * `threefish`: a tweakable block cipher with 256-, 512-, and 1024-bit
//!   blocks.
//! * Unique Block Iteration (UBI), which chains Threefish into a compression
//!   function with domain separation through the tweak.
//! * A sequence of UBI passes over the key (for MACs), the configuration,
//!   the message, and an output counter.
//!
//! `digest` is the simplest interface, for the fixed-length algorithms.
//! `mac` provides keyed hashing. `skein` exposes the full incremental
//! interface with any output length and bit-granular input.
//!
//! # Feature Flags
//!
//! <table>
//! <tr><th>Feature
//!     <th>Description
//! <tr><td><code>alloc (default)</code>
//!     <td>Enable features that require use of the heap. Currently this is
//!         only the test framework in the (hidden) <code>test</code> module.
//! <tr><td><code>std</code>
//!     <td>Enable features that use libstd, in particular
//!         <code>std::error::Error</code> integration. Implies `alloc`.
//! <tr><td><code>test_logging</code>
//!     <td>Print every line of a test vector file, and the attributes of
//!         failing test cases, as they are consumed.
//! <tr><td><code>wasm32_unknown_unknown_js</code>
//!     <td>When this feature is enabled, for the wasm32-unknown-unknown target,
//!         Web APIs will be used to implement features like `skein::rand` that
//!         require an operating environment of some kind. This has no effect
//!         for any other target.
//! </table>

#![allow(missing_copy_implementations, missing_debug_implementations)]
#![deny(missing_docs, unsafe_code, unused_qualifications)]
#![forbid(
    anonymous_parameters,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_extern_crates,
    unused_import_braces,
    unused_results
)]
#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

mod endian;
mod polyfill;

pub mod constant_time;
pub mod digest;
pub mod error;
pub mod mac;
pub mod rand;
pub mod skein;
pub mod threefish;

#[cfg(feature = "alloc")]
#[doc(hidden)]
pub mod test;
