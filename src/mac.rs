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

//! Skein-MAC.
//!
//! Skein is keyed natively: the key is compressed in its own UBI pass before
//! the configuration, so a MAC costs the same as a hash plus one pass over
//! the key. Keys may be any length, including empty; with an empty key the
//! MAC is the plain hash.
//!
//! The high-level API mirrors the usual HMAC interfaces: a `Key` is
//! constructed once, after which any number of messages can be signed with
//! `sign` or `Context`, and tags can be verified with `verify`. Each `Key`
//! processes the key pass once and reuses the keyed state for every message.
//!
//! `MacContext` is the lower-level, incremental interface with explicit
//! control over when the keyed state is reused.
//!
//! # Examples
//!
//! ```
//! use skein::{digest, mac, rand};
//!
//! # fn main() -> Result<(), skein::error::Unspecified> {
//! let msg = "hello, world";
//!
//! let rng = rand::SystemRandom::new();
//! let key = mac::Key::generate(&digest::SKEIN_512_256, &rng)?;
//! let tag = mac::sign(&key, msg.as_bytes());
//!
//! mac::verify(&key, msg.as_bytes(), tag.as_ref())?;
//! # Ok(())
//! # }
//! ```

use crate::{
    constant_time, digest, error, rand,
    skein::{self, StateSize},
};

/// How to initialize a `MacContext`.
#[derive(Clone, Copy, Debug)]
pub enum MacInit<'a> {
    /// Process `key` and save the keyed state on the context.
    Keyed {
        /// The MAC key, of any length.
        key: &'a [u8],

        /// The tag length in bits.
        hash_bit_len: usize,
    },

    /// Start from the keyed state saved by the last `Keyed` initialization
    /// of the same context, with the same output length.
    Reuse,
}

/// A Skein-MAC context that can restart from its keyed state.
///
/// ```
/// use skein::mac::{MacContext, MacInit};
/// use skein::skein::StateSize;
///
/// let mut ctx = MacContext::new(StateSize::Skein256);
/// let mut tags = [[0u8; 32]; 2];
///
/// ctx.init(MacInit::Keyed { key: b"key", hash_bit_len: 256 }).unwrap();
/// ctx.update(b"first message").unwrap();
/// ctx.finish(&mut tags[0]).unwrap();
///
/// ctx.init(MacInit::Reuse).unwrap();
/// ctx.update(b"second message").unwrap();
/// ctx.finish(&mut tags[1]).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct MacContext {
    inner: skein::Context,
}

impl MacContext {
    /// Constructs a context that must be initialized with `init` before use.
    pub fn new(state_size: StateSize) -> Self {
        Self {
            inner: skein::Context::new(state_size),
        }
    }

    /// Like `new`, with the state size given in bits.
    pub fn prepare(state_size_bits: usize) -> Result<Self, error::InvalidParameter> {
        skein::Context::prepare(state_size_bits).map(|inner| Self { inner })
    }

    /// Starts a new message.
    ///
    /// `MacInit::Reuse` fails with a `SequenceError` unless a
    /// `MacInit::Keyed` initialization of this context has succeeded.
    pub fn init(&mut self, init: MacInit) -> Result<(), error::Error> {
        match init {
            MacInit::Keyed { key, hash_bit_len } => self.inner.init_with_key(key, hash_bit_len)?,
            MacInit::Reuse => self.inner.init_from_saved()?,
        }
        Ok(())
    }

    /// See `skein::Context::update`.
    pub fn update(&mut self, data: &[u8]) -> Result<(), error::SequenceError> {
        self.inner.update(data)
    }

    /// See `skein::Context::update_bits`.
    pub fn update_bits(&mut self, data: &[u8], bit_count: usize) -> Result<(), error::Error> {
        self.inner.update_bits(data, bit_count)
    }

    /// See `skein::Context::finish`.
    pub fn finish(&mut self, out: &mut [u8]) -> Result<(), error::Error> {
        self.inner.finish(out)
    }

    /// The internal state size.
    pub fn state_size(&self) -> StateSize {
        self.inner.state_size()
    }

    /// The number of bytes `finish` writes.
    pub fn output_len(&self) -> usize {
        self.inner.output_len()
    }
}

/// A MAC tag.
///
/// For a given tag `t`, use `t.as_ref()` to get the tag value as a byte slice.
#[derive(Clone, Copy, Debug)]
pub struct Tag(digest::Digest);

impl AsRef<[u8]> for Tag {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

/// A key to use for Skein-MAC signing and verification.
#[derive(Clone)]
pub struct Key {
    ctx_prototype: digest::Context,
}

impl core::fmt::Debug for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Key")
            .field("algorithm", self.algorithm())
            .finish()
    }
}

impl Key {
    /// Generate a MAC signing key using the given digest algorithm with a
    /// random value generated from `rng`.
    ///
    /// The key will be `algorithm.block_len()` bytes long, the length of the
    /// chaining value.
    pub fn generate(
        algorithm: &'static digest::Algorithm,
        rng: &dyn rand::SecureRandom,
    ) -> Result<Self, error::Unspecified> {
        let mut key_bytes = [0; skein::MAX_BLOCK_LEN];
        let key_bytes = &mut key_bytes[..algorithm.block_len()];
        rng.fill(key_bytes)?;
        Ok(Self::new(algorithm, key_bytes))
    }

    /// Construct a MAC signing key using the given digest algorithm and key
    /// value.
    ///
    /// `key_value` may be any length. Keys at least as long as the
    /// algorithm's `block_len()` are recommended.
    pub fn new(algorithm: &'static digest::Algorithm, key_value: &[u8]) -> Self {
        Self {
            ctx_prototype: digest::Context::with_key(algorithm, key_value),
        }
    }

    /// The digest algorithm for the key.
    #[inline]
    pub fn algorithm(&self) -> &'static digest::Algorithm {
        self.ctx_prototype.algorithm()
    }
}

/// A context for multi-step (Init-Update-Finish) MAC signing.
///
/// Use `sign` for single-step MAC signing.
#[derive(Clone)]
pub struct Context {
    inner: digest::Context,
}

impl core::fmt::Debug for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("algorithm", self.inner.algorithm())
            .finish()
    }
}

impl Context {
    /// Constructs a new MAC signing context using the given digest algorithm
    /// and key.
    pub fn with_key(signing_key: &Key) -> Self {
        Self {
            inner: signing_key.ctx_prototype.clone(),
        }
    }

    /// Updates the MAC with all the data in `data`. `update` may be called
    /// zero or more times until `finish` is called.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalizes the MAC calculation and returns the MAC value. `sign`
    /// consumes the context so it cannot be (mis-)used after `sign` has been
    /// called.
    ///
    /// It is generally not safe to implement MAC verification by comparing
    /// the return value of `sign` to a tag. Use `verify` for verification
    /// instead.
    pub fn sign(self) -> Tag {
        Tag(self.inner.finish())
    }
}

/// Calculates the MAC of `data` using the key `key` in one step.
///
/// Use `Context` to calculate MACs on input that is available in pieces.
///
/// It is generally not safe to implement MAC verification by comparing the
/// return value of `sign` to a tag. Use `verify` for verification instead.
pub fn sign(key: &Key, data: &[u8]) -> Tag {
    let mut ctx = Context::with_key(key);
    ctx.update(data);
    ctx.sign()
}

/// Calculates the MAC of `data` using the key `key`, and verifies whether
/// the resultant value equals `tag`, in one step.
///
/// The comparison is done in constant time.
pub fn verify(key: &Key, data: &[u8], tag: &[u8]) -> Result<(), error::Unspecified> {
    constant_time::verify_slices_are_equal(sign(key, data).as_ref(), tag)
}
