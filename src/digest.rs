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

//! Skein with fixed output lengths.
//!
//! If all the data is available in a single contiguous slice then the `digest`
//! function should be used. Otherwise, the digest can be calculated in
//! multiple steps using `Context`.

use crate::{
    polyfill,
    skein::{DynState, StateSize},
};
use core::num::NonZeroUsize;

/// A context for multi-step (Init-Update-Finish) digest calculations.
///
/// # Examples
///
/// ```
/// use skein::digest;
///
/// let one_shot = digest::digest(&digest::SKEIN_512_256, b"hello, world");
///
/// let mut ctx = digest::Context::new(&digest::SKEIN_512_256);
/// ctx.update(b"hello");
/// ctx.update(b", ");
/// ctx.update(b"world");
/// let multi_part = ctx.finish();
///
/// assert_eq!(&one_shot.as_ref(), &multi_part.as_ref());
/// ```
#[derive(Clone)]
pub struct Context {
    state: DynState,
    algorithm: &'static Algorithm,
}

impl Context {
    /// Constructs a new context.
    pub fn new(algorithm: &'static Algorithm) -> Self {
        Self::with_key(algorithm, &[])
    }

    // An empty `key` is the same as no key.
    pub(crate) fn with_key(algorithm: &'static Algorithm, key: &[u8]) -> Self {
        let mut state = DynState::new(algorithm.state_size);
        state.init(key, algorithm.output_bits);
        Self { state, algorithm }
    }

    /// Updates the digest with all the data in `data`.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes the digest calculation and returns the digest value.
    ///
    /// `finish` consumes the context so it cannot be (mis-)used after `finish`
    /// has been called.
    pub fn finish(mut self) -> Digest {
        let mut value = [0u8; MAX_OUTPUT_LEN];
        let output_len = self.algorithm.output_len();
        self.state
            .finish(&mut value[..output_len], self.algorithm.output_bits);
        Digest {
            value,
            algorithm: self.algorithm,
        }
    }

    /// The algorithm that this context is using.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.algorithm
    }
}

impl core::fmt::Debug for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("algorithm", self.algorithm)
            .finish_non_exhaustive()
    }
}

/// Returns the digest of `data` using the given digest algorithm.
///
/// # Examples:
///
/// ```
/// # #[cfg(feature = "alloc")]
/// # {
/// use skein::{digest, test};
/// let expected_hex = "b3250457e05d3060b1a4bbc1428bc75a3f525ca389aeab96cfa34638d96e492a";
/// let expected: Vec<u8> = test::from_hex(expected_hex).unwrap();
/// let actual = digest::digest(
///     &digest::SKEIN_512_256,
///     b"The quick brown fox jumps over the lazy dog",
/// );
///
/// assert_eq!(&expected, &actual.as_ref());
/// # }
/// ```
pub fn digest(algorithm: &'static Algorithm, data: &[u8]) -> Digest {
    let mut ctx = Context::new(algorithm);
    ctx.update(data);
    ctx.finish()
}

/// A calculated digest value.
///
/// Use [`Self::as_ref`] to get the value as a `&[u8]`.
#[derive(Clone, Copy)]
pub struct Digest {
    value: [u8; MAX_OUTPUT_LEN],
    algorithm: &'static Algorithm,
}

impl Digest {
    /// The algorithm that was used to calculate the digest value.
    #[inline(always)]
    pub fn algorithm(&self) -> &'static Algorithm {
        self.algorithm
    }
}

impl AsRef<[u8]> for Digest {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.value[..self.algorithm.output_len()]
    }
}

impl core::fmt::Debug for Digest {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(fmt, "{:?}:", self.algorithm)?;
        self.as_ref().iter().try_for_each(|b| write!(fmt, "{:02x}", b))
    }
}

/// A Skein digest algorithm: a state size and an output length.
#[derive(PartialEq, Eq)]
pub struct Algorithm {
    state_size: StateSize,
    output_bits: NonZeroUsize,
}

impl Algorithm {
    const fn new(state_size: StateSize, output_bits: usize) -> Self {
        let output_bits = match NonZeroUsize::new(output_bits) {
            Some(output_bits) if output_bits.get() <= MAX_OUTPUT_LEN * 8 => output_bits,
            _ => panic!("output length out of range"),
        };
        Self {
            state_size,
            output_bits,
        }
    }

    /// The internal state size.
    #[inline(always)]
    pub fn state_size(&self) -> StateSize {
        self.state_size
    }

    /// The block length in bytes, which is also the chaining value length.
    #[inline(always)]
    pub fn block_len(&self) -> usize {
        self.state_size.block_len()
    }

    /// The length of a finalized digest in bytes.
    #[inline(always)]
    pub fn output_len(&self) -> usize {
        polyfill::bytes_from_bits_rounded_up(self.output_bits.get())
    }
}

impl core::fmt::Debug for Algorithm {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            fmt,
            "Skein-{}-{}",
            self.state_size.bits(),
            self.output_bits.get()
        )
    }
}

/// Skein-256-128.
pub static SKEIN_256_128: Algorithm = Algorithm::new(StateSize::Skein256, 128);

/// Skein-256-160.
pub static SKEIN_256_160: Algorithm = Algorithm::new(StateSize::Skein256, 160);

/// Skein-256-224.
pub static SKEIN_256_224: Algorithm = Algorithm::new(StateSize::Skein256, 224);

/// Skein-256-256.
pub static SKEIN_256_256: Algorithm = Algorithm::new(StateSize::Skein256, 256);

/// Skein-512-128.
pub static SKEIN_512_128: Algorithm = Algorithm::new(StateSize::Skein512, 128);

/// Skein-512-160.
pub static SKEIN_512_160: Algorithm = Algorithm::new(StateSize::Skein512, 160);

/// Skein-512-224.
pub static SKEIN_512_224: Algorithm = Algorithm::new(StateSize::Skein512, 224);

/// Skein-512-256.
pub static SKEIN_512_256: Algorithm = Algorithm::new(StateSize::Skein512, 256);

/// Skein-512-384.
pub static SKEIN_512_384: Algorithm = Algorithm::new(StateSize::Skein512, 384);

/// Skein-512-512, the primary Skein algorithm.
pub static SKEIN_512_512: Algorithm = Algorithm::new(StateSize::Skein512, 512);

/// Skein-1024-384.
pub static SKEIN_1024_384: Algorithm = Algorithm::new(StateSize::Skein1024, 384);

/// Skein-1024-512.
pub static SKEIN_1024_512: Algorithm = Algorithm::new(StateSize::Skein1024, 512);

/// Skein-1024-1024.
pub static SKEIN_1024_1024: Algorithm = Algorithm::new(StateSize::Skein1024, 1024);

/// The maximum output length (`Algorithm::output_len`) of all the algorithms
/// in this module.
pub const MAX_OUTPUT_LEN: usize = 1024 / 8;
