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

//! Error reporting.
//!
//! Most operations fail for one of a few reasons: a parameter is out of
//! range (`InvalidParameter`), or an operation was called in the wrong
//! order (`SequenceError`). Operations that can fail for more than one
//! reason return the umbrella `Error`. Every error can be converted into
//! `Unspecified` for callers that don't care about the details.

pub use self::{
    allocation_failure::AllocationFailure, invalid_parameter::InvalidParameter,
    sequence_error::SequenceError, unspecified::Unspecified,
};

mod allocation_failure;
mod invalid_parameter;
mod sequence_error;
mod unspecified;

#[cfg(feature = "std")]
extern crate std;

/// Any error reported by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A parameter was out of range.
    InvalidParameter(InvalidParameter),

    /// An operation was called out of order.
    Sequence(SequenceError),

    /// A buffer needed by a test collaborator couldn't be allocated.
    AllocationFailure(AllocationFailure),
}

impl From<InvalidParameter> for Error {
    #[inline]
    fn from(e: InvalidParameter) -> Self {
        Self::InvalidParameter(e)
    }
}

impl From<SequenceError> for Error {
    #[inline]
    fn from(e: SequenceError) -> Self {
        Self::Sequence(e)
    }
}

impl From<AllocationFailure> for Error {
    #[inline]
    fn from(e: AllocationFailure) -> Self {
        Self::AllocationFailure(e)
    }
}

impl From<Error> for Unspecified {
    #[inline]
    fn from(_: Error) -> Self {
        Unspecified
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::InvalidParameter(e) => core::fmt::Display::fmt(e, f),
            Self::Sequence(e) => core::fmt::Display::fmt(e, f),
            Self::AllocationFailure(e) => core::fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
