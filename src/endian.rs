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

//! Conversions between little-endian bytes and 64-bit words.
//!
//! Skein and Threefish interpret every byte string as a sequence of
//! little-endian 64-bit words, regardless of the target's endianness.

/// Reads exactly `N` words from `bytes`, or `None` if `bytes` isn't
/// exactly `8 * N` bytes long.
pub(crate) fn le_words_from_bytes<const N: usize>(bytes: &[u8]) -> Option<[u64; N]> {
    if bytes.len() != N * 8 {
        return None;
    }
    let mut words = [0u64; N];
    words
        .iter_mut()
        .zip(bytes.chunks_exact(8))
        .for_each(|(w, chunk)| {
            let mut b = [0u8; 8];
            b.copy_from_slice(chunk);
            *w = u64::from_le_bytes(b);
        });
    Some(words)
}

/// Writes the little-endian encoding of `words` into `out`, stopping when
/// `out` is full. A partial last word is written as its low-order bytes.
pub(crate) fn write_le_words(words: &[u64], out: &mut [u8]) {
    out.chunks_mut(8).zip(words).for_each(|(chunk, w)| {
        let bytes = w.to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    });
}
