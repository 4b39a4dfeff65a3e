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

#[cfg(feature = "std")]
extern crate std;

/// A buffer couldn't be allocated.
///
/// The hashing code never allocates; only the test vector scanner in
/// `test::kat` reports this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationFailure {
    requested: usize,
}

impl AllocationFailure {
    #[cold]
    #[inline(never)]
    #[cfg_attr(not(feature = "alloc"), allow(dead_code))]
    pub(crate) fn new(requested: usize) -> Self {
        Self { requested }
    }

    /// The number of elements whose allocation failed.
    pub fn requested(&self) -> usize {
        self.requested
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AllocationFailure {}

impl core::fmt::Display for AllocationFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "AllocationFailure({})", self.requested)
    }
}
