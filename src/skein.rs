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

//! Skein hashing with an arbitrary output length, and the building blocks
//! underneath it.
//!
//! `Context` follows the lifecycle prepare, init, zero or more updates,
//! finish. Calls out of order fail with `SequenceError` instead of
//! producing a wrong result. A context can be initialized again after
//! `finish`.
//!
//! Most applications want the fixed-length algorithms in `digest` or the
//! MAC in `mac` instead.
//!
//! # Examples
//!
//! ```
//! use skein::skein::{Context, StateSize};
//!
//! let mut ctx = Context::new(StateSize::Skein512);
//! ctx.init(384).unwrap();
//! ctx.update(b"hello, ").unwrap();
//! ctx.update(b"world").unwrap();
//!
//! let mut out = [0u8; 384 / 8];
//! ctx.finish(&mut out).unwrap();
//! ```

use crate::{
    error::{self, InvalidParameter, SequenceError},
    polyfill,
};
use core::num::NonZeroUsize;

pub use self::tweak::{BlockType, Tweak};
pub(crate) use self::dynstate::DynState;

mod config;
mod dynstate;
mod tweak;
mod ubi;

/// The size of the internal state, which is also the block size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateSize {
    /// 256 bits, for low-memory implementations.
    Skein256,

    /// 512 bits, the primary size.
    Skein512,

    /// 1024 bits, for a very conservative security margin.
    Skein1024,
}

impl StateSize {
    /// The state size in bits.
    pub const fn bits(self) -> usize {
        match self {
            Self::Skein256 => 256,
            Self::Skein512 => 512,
            Self::Skein1024 => 1024,
        }
    }

    /// The block length in bytes.
    pub const fn block_len(self) -> usize {
        self.bits() / 8
    }
}

impl TryFrom<usize> for StateSize {
    type Error = InvalidParameter;

    /// Accepts 256, 512, or 1024.
    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        match bits {
            256 => Ok(Self::Skein256),
            512 => Ok(Self::Skein512),
            1024 => Ok(Self::Skein1024),
            _ => Err(InvalidParameter::state_size()),
        }
    }
}

/// The largest block length of all the state sizes.
pub const MAX_BLOCK_LEN: usize = StateSize::Skein1024.block_len();

/// Runs one complete UBI pass of `N` words over the first `bit_count` bits
/// of `input`, starting from `chaining`, and returns the new chaining value.
///
/// A `bit_count` that isn't a multiple of 8 pads the last byte and sets the
/// bit-pad flag, as `Context::update_bits` does.
pub fn ubi<const N: usize>(
    chaining: &[u64; N],
    block_type: BlockType,
    input: &[u8],
    bit_count: usize,
) -> Result<[u64; N], InvalidParameter> {
    let input = bit_prefix(input, bit_count)?;
    let mut ubi = ubi::Ubi::from_chaining(*chaining);
    ubi.start(block_type);
    ubi.update(input);
    if bit_count % 8 != 0 {
        ubi.pad_partial_byte(bit_count % 8);
    }
    ubi.finish_pass();
    Ok(*ubi.chaining_value())
}

// The bytes holding the first `bit_count` bits of `data`.
fn bit_prefix(data: &[u8], bit_count: usize) -> Result<&[u8], InvalidParameter> {
    data.get(..polyfill::bytes_from_bits_rounded_up(bit_count))
        .ok_or_else(InvalidParameter::bit_count)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Prepared,
    // Initialized, possibly with some input.
    Absorbing,
    Finalized,
}

/// A context for incremental Skein hashing and MAC calculation.
#[derive(Clone)]
pub struct Context {
    state: DynState,
    phase: Phase,

    // `Some` once `init` has succeeded.
    hash_bit_len: Option<NonZeroUsize>,

    // `Some` once `init_with_key` has succeeded; the chaining value is saved
    // in `state`.
    saved_hash_bit_len: Option<NonZeroUsize>,
}

impl Context {
    /// Constructs a context that must be initialized before use.
    pub fn new(state_size: StateSize) -> Self {
        Self {
            state: DynState::new(state_size),
            phase: Phase::Prepared,
            hash_bit_len: None,
            saved_hash_bit_len: None,
        }
    }

    /// Like `new`, with the state size given in bits.
    pub fn prepare(state_size_bits: usize) -> Result<Self, InvalidParameter> {
        StateSize::try_from(state_size_bits).map(Self::new)
    }

    /// The internal state size.
    pub fn state_size(&self) -> StateSize {
        self.state.state_size()
    }

    /// The output length in bits, or zero before `init`.
    pub fn hash_bit_len(&self) -> usize {
        self.hash_bit_len.map_or(0, NonZeroUsize::get)
    }

    /// The number of bytes `finish` writes.
    pub fn output_len(&self) -> usize {
        polyfill::bytes_from_bits_rounded_up(self.hash_bit_len())
    }

    /// Starts hashing with an output of `hash_bit_len` bits, which may be
    /// any non-zero length. Any previous input is discarded.
    pub fn init(&mut self, hash_bit_len: usize) -> Result<(), InvalidParameter> {
        self.init_keyed(&[], hash_bit_len)
    }

    /// Starts a MAC calculation under `key` with an output of
    /// `hash_bit_len` bits.
    ///
    /// The keyed state is saved so that `init_from_saved` can start another
    /// message under the same key without processing the key again. An
    /// empty key is equivalent to `init`.
    ///
    /// An empty key with a `hash_bit_len` of zero is rejected like any other
    /// zero length; it does not reuse the saved state. Use
    /// `init_from_saved` for that.
    pub fn init_with_key(
        &mut self,
        key: &[u8],
        hash_bit_len: usize,
    ) -> Result<(), InvalidParameter> {
        self.init_keyed(key, hash_bit_len)?;
        self.state.save();
        self.saved_hash_bit_len = self.hash_bit_len;
        Ok(())
    }

    /// Starts a new message from the state saved by the last
    /// `init_with_key`, with the same output length.
    pub fn init_from_saved(&mut self) -> Result<(), SequenceError> {
        let hash_bit_len = self
            .saved_hash_bit_len
            .ok_or_else(SequenceError::no_saved_key_state)?;
        self.state.restore();
        self.hash_bit_len = Some(hash_bit_len);
        self.phase = Phase::Absorbing;
        Ok(())
    }

    fn init_keyed(&mut self, key: &[u8], hash_bit_len: usize) -> Result<(), InvalidParameter> {
        let hash_bit_len =
            NonZeroUsize::new(hash_bit_len).ok_or_else(InvalidParameter::hash_bit_len)?;
        self.state.init(key, hash_bit_len);
        self.hash_bit_len = Some(hash_bit_len);
        self.phase = Phase::Absorbing;
        Ok(())
    }

    /// Adds `data` to the message.
    pub fn update(&mut self, data: &[u8]) -> Result<(), SequenceError> {
        self.check_updatable()?;
        self.state.update(data);
        Ok(())
    }

    /// Adds the first `bit_count` bits of `data` to the message.
    ///
    /// Bits are taken from the most significant bit of each byte first.
    /// When `bit_count` isn't a multiple of 8 the message ends with a
    /// partial byte, and no further input is accepted before `finish`.
    pub fn update_bits(&mut self, data: &[u8], bit_count: usize) -> Result<(), error::Error> {
        self.check_updatable()?;
        let data = bit_prefix(data, bit_count)?;
        self.state.update(data);
        if bit_count % 8 != 0 {
            self.state.pad_partial_byte(bit_count % 8);
        }
        Ok(())
    }

    /// Writes the `output_len()` output bytes to the start of `out`.
    ///
    /// When the output length isn't a multiple of 8 bits, the unused
    /// low-order bits of the last byte are zero. If `out` is too short,
    /// nothing is written and the context is unchanged.
    pub fn finish(&mut self, out: &mut [u8]) -> Result<(), error::Error> {
        let hash_bit_len = self.check_absorbing()?;
        let out = out
            .get_mut(..polyfill::bytes_from_bits_rounded_up(hash_bit_len.get()))
            .ok_or_else(InvalidParameter::output_too_small)?;
        self.state.finish(out, hash_bit_len);
        self.phase = Phase::Finalized;
        Ok(())
    }

    fn check_absorbing(&self) -> Result<NonZeroUsize, SequenceError> {
        match (self.phase, self.hash_bit_len) {
            (Phase::Absorbing, Some(hash_bit_len)) => Ok(hash_bit_len),
            (Phase::Finalized, _) => Err(SequenceError::already_finalized()),
            _ => Err(SequenceError::not_initialized()),
        }
    }

    fn check_updatable(&self) -> Result<(), SequenceError> {
        let _: NonZeroUsize = self.check_absorbing()?;
        if self.state.is_bit_padded() {
            return Err(SequenceError::partial_byte_not_last());
        }
        Ok(())
    }
}

impl core::fmt::Debug for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("state_size", &self.state_size())
            .field("hash_bit_len", &self.hash_bit_len())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
