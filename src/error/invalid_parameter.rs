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

/// A parameter was rejected.
///
/// The `Display` implementation names the parameter. Reasons include:
///
/// * The state size isn't one of 256, 512, or 1024 bits.
///
/// * The requested output length is zero.
///
/// * A bit count is larger than the input it describes.
///
/// * The output buffer is too small for the requested output length.
///
/// * A Threefish block isn't exactly one block long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidParameter(&'static str);

impl InvalidParameter {
    #[cold]
    #[inline(never)]
    pub(crate) fn state_size() -> Self {
        Self("StateSize")
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn hash_bit_len() -> Self {
        Self("HashBitLen")
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn bit_count() -> Self {
        Self("BitCount")
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn output_too_small() -> Self {
        Self("OutputTooSmall")
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn block_len() -> Self {
        Self("BlockLen")
    }

    #[doc(hidden)]
    pub fn description_(&self) -> &'static str {
        self.0
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidParameter {}

impl core::fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.0)
    }
}
