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

//! Unique Block Iteration.
//!
//! A UBI pass compresses its input block by block with Threefish keyed by
//! the chaining value, feeding each plaintext block forward into the new
//! chaining value. The last block of every pass is held back until the
//! pass is finished so that it can be flagged as final.

use super::{
    config,
    tweak::{BlockType, Tweak},
};
use crate::{endian, polyfill, threefish::Threefish};

#[derive(Clone)]
pub(crate) struct Ubi<const N: usize> {
    chaining: [u64; N],

    // The chaining value after the key and configuration passes, kept by
    // `save` for `restore`.
    saved: [u64; N],

    tweak: Tweak,

    pending: [[u8; 8]; N],

    // Invariant: `num_pending <= Self::BLOCK_LEN`. Between calls, a full
    // `pending` is only processed once more input arrives.
    num_pending: usize,
}

impl<const N: usize> Ubi<N> {
    pub const BLOCK_LEN: usize = N * 8;

    pub fn new() -> Self {
        Self::from_chaining([0; N])
    }

    pub fn from_chaining(chaining: [u64; N]) -> Self {
        Self {
            chaining,
            saved: [0; N],
            tweak: Tweak::new(BlockType::Message),
            pending: [[0; 8]; N],
            num_pending: 0,
        }
    }

    pub fn chaining_value(&self) -> &[u64; N] {
        &self.chaining
    }

    pub fn tweak(&self) -> &Tweak {
        &self.tweak
    }

    /// Runs the key pass (if `key` isn't empty) and the configuration pass
    /// from a zero chaining value, then starts the message pass.
    pub fn init(&mut self, key: &[u8], hash_bit_len: u64) {
        self.chaining = [0; N];
        if !key.is_empty() {
            self.pass(BlockType::Key, key);
        }
        self.pass(BlockType::Config, &config::encode(hash_bit_len));
        self.start(BlockType::Message);
    }

    pub fn save(&mut self) {
        self.saved = self.chaining;
    }

    /// Returns to the state `save` captured and starts a new message pass.
    pub fn restore(&mut self) {
        self.chaining = self.saved;
        self.start(BlockType::Message);
    }

    /// Starts a new pass from the current chaining value.
    pub fn start(&mut self, block_type: BlockType) {
        self.tweak = Tweak::new(block_type);
        self.num_pending = 0;
    }

    /// A complete pass over `input`.
    pub fn pass(&mut self, block_type: BlockType, input: &[u8]) {
        self.start(block_type);
        self.update(input);
        self.finish_pass();
    }

    pub fn update(&mut self, mut data: &[u8]) {
        let block_len = Self::BLOCK_LEN;
        if self.num_pending + data.len() > block_len {
            if self.num_pending > 0 {
                let (to_copy, rest) = data.split_at(block_len - self.num_pending);
                self.pending.as_flattened_mut()[self.num_pending..].copy_from_slice(to_copy);
                self.process_pending(block_len);
                self.num_pending = 0;
                data = rest;
            }
            while data.len() > block_len {
                let (block, rest) = data.split_at(block_len);
                self.pending.as_flattened_mut().copy_from_slice(block);
                self.process_pending(block_len);
                data = rest;
            }
        }
        self.pending.as_flattened_mut()[self.num_pending..][..data.len()].copy_from_slice(data);
        self.num_pending += data.len();
    }

    /// Pads the last pending byte, of which only the `valid_bits`
    /// most-significant bits are input: the first unused bit is set and the
    /// rest are cleared. The pass is flagged as bit-padded.
    pub fn pad_partial_byte(&mut self, valid_bits: usize) {
        debug_assert!(valid_bits > 0 && valid_bits < 8);
        let mask = 0x80u8 >> valid_bits;
        if let Some(last) = self.pending.as_flattened_mut()[..self.num_pending].last_mut() {
            *last = (*last & mask.wrapping_neg()) | mask;
            self.tweak.set_bit_pad();
        }
    }

    /// Zero-pads and processes the final block of the pass.
    pub fn finish_pass(&mut self) {
        self.pending.as_flattened_mut()[self.num_pending..].fill(0);
        self.tweak.set_final();
        self.process_pending(self.num_pending);
        self.num_pending = 0;
    }

    /// Fills `out` with output passes over successive counter values,
    /// starting from the current chaining value. The chaining value is left
    /// unchanged.
    pub fn output(&mut self, out: &mut [u8]) {
        let message_chaining = self.chaining;
        for (counter, chunk) in out.chunks_mut(Self::BLOCK_LEN).enumerate() {
            self.chaining = message_chaining;
            let counter = polyfill::u64_from_usize(counter).to_le_bytes();
            self.pass(BlockType::Output, &counter);
            endian::write_le_words(&self.chaining, chunk);
        }
        self.chaining = message_chaining;
    }

    // Compresses `pending`, of which `len` bytes are input.
    fn process_pending(&mut self, len: usize) {
        let block = self.pending.map(u64::from_le_bytes);
        self.tweak.add_position(len);
        let cipher = Threefish::<N>::new(&self.chaining, &self.tweak.words());
        let encrypted = cipher.encrypt_block(&block);
        self.chaining
            .iter_mut()
            .zip(encrypted.iter().zip(&block))
            .for_each(|(c, (e, m))| *c = e ^ m);
        self.tweak.clear_first();
    }
}
