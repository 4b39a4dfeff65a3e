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

use crate::polyfill;

/// The type of a UBI pass, encoded in bits 120..126 of the tweak.
///
/// Every kind of input (key, configuration, message, output counter) is
/// processed in a pass of its own type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum BlockType {
    Key = 0,
    Config = 4,
    Personalization = 8,
    PublicKey = 12,
    KeyIdentifier = 16,
    Nonce = 20,
    Message = 48,
    Output = 63,
}

impl BlockType {
    fn from_tag(tag: u8) -> Option<Self> {
        Some(match tag {
            0 => Self::Key,
            4 => Self::Config,
            8 => Self::Personalization,
            12 => Self::PublicKey,
            16 => Self::KeyIdentifier,
            20 => Self::Nonce,
            48 => Self::Message,
            63 => Self::Output,
            _ => return None,
        })
    }
}

const TYPE_SHIFT: u32 = 56;
const TYPE_MASK: u64 = 0x3f << TYPE_SHIFT;
const FLAG_BIT_PAD: u64 = 1 << 55;
const FLAG_FIRST: u64 = 1 << 62;
const FLAG_FINAL: u64 = 1 << 63;

// The low 32 bits of the high word extend the position to 96 bits.
const POSITION_HIGH_MASK: u64 = 0xffff_ffff;
const POSITION_MAX: u128 = (1 << 96) - 1;

/// The two tweak words of a UBI block.
///
/// The low 96 bits hold the number of bytes processed in the current pass,
/// including the block being processed. The high word also holds the block
/// type and the first, final, and bit-pad flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tweak([u64; 2]);

impl Tweak {
    /// The tweak of the first block of a new pass of the given type.
    pub fn new(block_type: BlockType) -> Self {
        Self([0, (u64::from(block_type as u8) << TYPE_SHIFT) | FLAG_FIRST])
    }

    /// The tweak words, ready to key Threefish.
    #[inline]
    pub fn words(&self) -> [u64; 2] {
        self.0
    }

    /// The block type, or `None` if the type bits don't name one.
    pub fn block_type(&self) -> Option<BlockType> {
        #[allow(clippy::cast_possible_truncation)]
        let tag = ((self.0[1] & TYPE_MASK) >> TYPE_SHIFT) as u8;
        BlockType::from_tag(tag)
    }

    /// The number of bytes processed in this pass.
    pub fn position(&self) -> u128 {
        (u128::from(self.0[1] & POSITION_HIGH_MASK) << 64) | u128::from(self.0[0])
    }

    /// Advances the position by `len` bytes. The position wraps at 2^96.
    pub fn add_position(&mut self, len: usize) {
        let len = u128::from(polyfill::u64_from_usize(len));
        let position = self.position().wrapping_add(len) & POSITION_MAX;
        #[allow(clippy::cast_possible_truncation)]
        {
            self.0[0] = position as u64;
            self.0[1] = (self.0[1] & !POSITION_HIGH_MASK) | ((position >> 64) as u64);
        }
    }

    /// Whether this is the first block of the pass.
    pub fn is_first(&self) -> bool {
        self.0[1] & FLAG_FIRST != 0
    }

    /// Whether this is the last block of the pass.
    pub fn is_final(&self) -> bool {
        self.0[1] & FLAG_FINAL != 0
    }

    /// Whether the input of the pass ended with a partial byte.
    pub fn is_bit_pad(&self) -> bool {
        self.0[1] & FLAG_BIT_PAD != 0
    }

    pub(super) fn clear_first(&mut self) {
        self.0[1] &= !FLAG_FIRST;
    }

    pub(super) fn set_final(&mut self) {
        self.0[1] |= FLAG_FINAL;
    }

    pub(super) fn set_bit_pad(&mut self) {
        self.0[1] |= FLAG_BIT_PAD;
    }
}
