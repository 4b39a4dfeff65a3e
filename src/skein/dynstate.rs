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

use super::{ubi::Ubi, StateSize};
use crate::polyfill;
use core::num::NonZeroUsize;

// Invariant: The active variant never changes after construction.
#[derive(Clone)]
pub(crate) enum DynState {
    Skein256(Ubi<4>),
    Skein512(Ubi<8>),
    Skein1024(Ubi<16>),
}

macro_rules! dispatch {
    ( $state:expr, $ubi:ident => $body:expr ) => {
        match $state {
            DynState::Skein256($ubi) => $body,
            DynState::Skein512($ubi) => $body,
            DynState::Skein1024($ubi) => $body,
        }
    };
}

impl DynState {
    pub fn new(state_size: StateSize) -> Self {
        match state_size {
            StateSize::Skein256 => Self::Skein256(Ubi::new()),
            StateSize::Skein512 => Self::Skein512(Ubi::new()),
            StateSize::Skein1024 => Self::Skein1024(Ubi::new()),
        }
    }

    pub fn state_size(&self) -> StateSize {
        match self {
            Self::Skein256(_) => StateSize::Skein256,
            Self::Skein512(_) => StateSize::Skein512,
            Self::Skein1024(_) => StateSize::Skein1024,
        }
    }

    /// Starts a message pass keyed by `key`, which may be empty.
    pub fn init(&mut self, key: &[u8], hash_bit_len: NonZeroUsize) {
        let hash_bit_len = polyfill::u64_from_usize(hash_bit_len.get());
        dispatch!(self, ubi => ubi.init(key, hash_bit_len))
    }

    pub fn save(&mut self) {
        dispatch!(self, ubi => ubi.save())
    }

    pub fn restore(&mut self) {
        dispatch!(self, ubi => ubi.restore())
    }

    pub fn update(&mut self, data: &[u8]) {
        dispatch!(self, ubi => ubi.update(data))
    }

    pub fn pad_partial_byte(&mut self, valid_bits: usize) {
        dispatch!(self, ubi => ubi.pad_partial_byte(valid_bits))
    }

    pub fn is_bit_padded(&self) -> bool {
        dispatch!(self, ubi => ubi.tweak().is_bit_pad())
    }

    /// Finishes the message pass and writes the output. `out` must be
    /// `ceil(hash_bit_len / 8)` bytes long.
    pub fn finish(&mut self, out: &mut [u8], hash_bit_len: NonZeroUsize) {
        debug_assert_eq!(
            out.len(),
            polyfill::bytes_from_bits_rounded_up(hash_bit_len.get())
        );
        dispatch!(self, ubi => {
            ubi.finish_pass();
            ubi.output(out);
        });

        // Output bits are numbered from the most significant bit of each
        // byte, so the unused bits are the low-order ones.
        let used_bits = hash_bit_len.get() % 8;
        if used_bits != 0 {
            if let Some(last) = out.last_mut() {
                *last &= 0xffu8 << (8 - used_bits);
            }
        }
    }
}
