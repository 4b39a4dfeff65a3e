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

//! The Threefish tweakable block cipher.
//!
//! Threefish is the block cipher underneath Skein. It is exposed on its own
//! because it is useful for testing and for constructions that need a wide
//! tweakable block cipher. Blocks, keys, and the 128-bit tweak are sequences
//! of little-endian 64-bit words.
//!
//! # Examples
//!
//! ```
//! use skein::threefish::Threefish512;
//!
//! let key = [0u8; Threefish512::BLOCK_LEN];
//! let cipher = Threefish512::from_le_bytes(&key, &[0u8; 16]).unwrap();
//!
//! let mut block = *b"sixty-four bytes of plaintext, exactly enough for one 512 block!";
//! let original = block;
//! cipher.encrypt_in_place(&mut block).unwrap();
//! assert_ne!(block, original);
//! cipher.decrypt_in_place(&mut block).unwrap();
//! assert_eq!(block, original);
//! ```

use crate::{endian, error, polyfill};

mod tables;

/// The constant that is XORed with all the key words to form the extra key
/// word of the key schedule.
pub const KEY_SCHEDULE_PARITY: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Threefish with a 256-bit block.
pub type Threefish256 = Threefish<4>;

/// Threefish with a 512-bit block.
pub type Threefish512 = Threefish<8>;

/// Threefish with a 1024-bit block.
pub type Threefish1024 = Threefish<16>;

/// One MIX step: `a += b; b = (b <<< r) ^ a`.
#[inline(always)]
pub fn mix(a: u64, b: u64, r: u32) -> (u64, u64) {
    let a = a.wrapping_add(b);
    (a, b.rotate_left(r) ^ a)
}

/// The inverse of `mix`.
#[inline(always)]
pub fn unmix(a: u64, b: u64, r: u32) -> (u64, u64) {
    let b = (b ^ a).rotate_right(r);
    (a.wrapping_sub(b), b)
}

/// A Threefish key and tweak, ready to encrypt or decrypt blocks of `N`
/// 64-bit words.
///
/// Only `N` of 4, 8, and 16 are supported; any other `N` fails to compile
/// when the cipher is used.
#[derive(Clone)]
pub struct Threefish<const N: usize> {
    key: [u64; N],
    parity: u64,

    // The third word is the XOR of the first two.
    tweak: [u64; 3],
}

impl<const N: usize> Threefish<N> {
    const PARAMS: tables::Params = tables::params(N);

    /// The block length, in bytes. The key is the same length.
    pub const BLOCK_LEN: usize = N * 8;

    /// Constructs a cipher from key words and the two tweak words.
    pub fn new(key: &[u64; N], tweak: &[u64; 2]) -> Self {
        let mut cipher = Self {
            key: [0; N],
            parity: 0,
            tweak: [0; 3],
        };
        cipher.set_key(key);
        cipher.set_tweak(tweak);
        cipher
    }

    /// Constructs a cipher from a `BLOCK_LEN`-byte key and a 16-byte tweak.
    pub fn from_le_bytes(
        key: &[u8],
        tweak: &[u8; 16],
    ) -> Result<Self, error::InvalidParameter> {
        let key: [u64; N] =
            endian::le_words_from_bytes(key).ok_or_else(error::InvalidParameter::block_len)?;
        let tweak: [u64; 2] =
            endian::le_words_from_bytes(tweak).ok_or_else(error::InvalidParameter::block_len)?;
        Ok(Self::new(&key, &tweak))
    }

    /// Replaces the key, keeping the tweak.
    pub fn set_key(&mut self, key: &[u64; N]) {
        self.key = *key;
        self.parity = key.iter().fold(KEY_SCHEDULE_PARITY, |acc, k| acc ^ k);
    }

    /// Replaces the tweak, keeping the key.
    pub fn set_tweak(&mut self, tweak: &[u64; 2]) {
        self.tweak = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &[u64; N]) -> [u64; N] {
        let params = &Self::PARAMS;
        let mut x = *block;
        self.add_subkey(&mut x, 0);
        for round in 0..params.rounds {
            let pairs = &params.pairs[round % 4];
            let rotations = &params.rotations[round % 8];
            for (&(a, b), &r) in pairs.iter().zip(rotations).take(N / 2) {
                (x[a], x[b]) = mix(x[a], x[b], r);
            }
            if round % 4 == 3 {
                self.add_subkey(&mut x, round / 4 + 1);
            }
        }
        x
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &[u64; N]) -> [u64; N] {
        let params = &Self::PARAMS;
        let mut x = *block;
        for round in (0..params.rounds).rev() {
            if round % 4 == 3 {
                self.sub_subkey(&mut x, round / 4 + 1);
            }
            let pairs = &params.pairs[round % 4];
            let rotations = &params.rotations[round % 8];
            for (&(a, b), &r) in pairs.iter().zip(rotations).take(N / 2) {
                (x[a], x[b]) = unmix(x[a], x[b], r);
            }
        }
        self.sub_subkey(&mut x, 0);
        x
    }

    /// Encrypts `block`, which must be exactly `BLOCK_LEN` bytes, in place.
    pub fn encrypt_in_place(&self, block: &mut [u8]) -> Result<(), error::InvalidParameter> {
        let words: [u64; N] =
            endian::le_words_from_bytes(block).ok_or_else(error::InvalidParameter::block_len)?;
        endian::write_le_words(&self.encrypt_block(&words), block);
        Ok(())
    }

    /// Decrypts `block`, which must be exactly `BLOCK_LEN` bytes, in place.
    pub fn decrypt_in_place(&self, block: &mut [u8]) -> Result<(), error::InvalidParameter> {
        let words: [u64; N] =
            endian::le_words_from_bytes(block).ok_or_else(error::InvalidParameter::block_len)?;
        endian::write_le_words(&self.decrypt_block(&words), block);
        Ok(())
    }

    // Word `i` of subkey `s`.
    #[inline(always)]
    fn subkey_word(&self, s: usize, i: usize) -> u64 {
        let k = self.key.get((s + i) % (N + 1)).copied().unwrap_or(self.parity);
        let t = if i == N - 3 {
            self.tweak[s % 3]
        } else if i == N - 2 {
            self.tweak[(s + 1) % 3]
        } else if i == N - 1 {
            polyfill::u64_from_usize(s)
        } else {
            0
        };
        k.wrapping_add(t)
    }

    fn add_subkey(&self, x: &mut [u64; N], s: usize) {
        x.iter_mut()
            .enumerate()
            .for_each(|(i, w)| *w = w.wrapping_add(self.subkey_word(s, i)));
    }

    fn sub_subkey(&self, x: &mut [u64; N], s: usize) {
        x.iter_mut()
            .enumerate()
            .for_each(|(i, w)| *w = w.wrapping_sub(self.subkey_word(s, i)));
    }
}

impl<const N: usize> core::fmt::Debug for Threefish<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Threefish")
            .field("block_len", &Self::BLOCK_LEN)
            .finish_non_exhaustive()
    }
}
