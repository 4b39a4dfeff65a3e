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

//! The configuration block.

/// The schema identifier, "SHA3".
pub const SCHEMA_ID: [u8; 4] = *b"SHA3";

pub const VERSION: u16 = 1;

/// The length of the meaningful part of the configuration block. It is
/// zero-padded to a full block by the UBI pass.
pub const CONFIG_LEN: usize = 32;

/// Encodes the configuration for sequential (non-tree) hashing with the
/// given output length in bits.
pub fn encode(hash_bit_len: u64) -> [u8; CONFIG_LEN] {
    let mut config = [0u8; CONFIG_LEN];
    config[..4].copy_from_slice(&SCHEMA_ID);
    config[4..6].copy_from_slice(&VERSION.to_le_bytes());
    // 6..8 are reserved.
    config[8..16].copy_from_slice(&hash_bit_len.to_le_bytes());
    // The tree leaf size, fan-out, and maximum height (16..19) stay zero.
    config
}
