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

/// An operation was called in an order the context's lifecycle doesn't
/// allow.
///
/// A context goes through `prepare`, `init`, zero or more updates, and
/// exactly one `finish` before it must be initialized again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceError(&'static str);

impl SequenceError {
    /// `update` or `finish` before any `init`.
    #[cold]
    #[inline(never)]
    pub(crate) fn not_initialized() -> Self {
        Self("NotInitialized")
    }

    /// `update` or `finish` after `finish`, without a new `init`.
    #[cold]
    #[inline(never)]
    pub(crate) fn already_finalized() -> Self {
        Self("AlreadyFinalized")
    }

    /// Reuse of the saved keyed state was requested but no keyed
    /// initialization has happened on this context.
    #[cold]
    #[inline(never)]
    pub(crate) fn no_saved_key_state() -> Self {
        Self("NoSavedKeyState")
    }

    /// More input after a partial final byte.
    #[cold]
    #[inline(never)]
    pub(crate) fn partial_byte_not_last() -> Self {
        Self("PartialByteNotLast")
    }

    #[doc(hidden)]
    pub fn description_(&self) -> &'static str {
        self.0
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.0)
    }
}
