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

#![allow(missing_docs)]

use skein::{
    digest, error,
    mac::{self, MacContext, MacInit},
    skein::StateSize,
    test::{self, kat},
    test_file,
};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use wasm_bindgen_test::{wasm_bindgen_test as test, wasm_bindgen_test_configure};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
wasm_bindgen_test_configure!(run_in_browser);

#[test]
fn mac_algorithms() {
    test::run(test_file!("mac_tests.txt"), |section, test_case| {
        assert_eq!(section, "");
        let digest_alg = test_case.consume_digest_alg("Hash");
        let key_value = test_case.consume_bytes("Key");
        let mut input = test_case.consume_bytes("Input");
        let output = test_case.consume_bytes("Output");

        mac_test_case_inner(digest_alg, &key_value[..], &mut input[..], &output[..])?;
        mac_test_case_incremental(digest_alg, &key_value[..], &input[..], &output[..]);

        Ok(())
    });
}

fn mac_test_case_inner(
    digest_alg: &'static digest::Algorithm,
    key_value: &[u8],
    input: &mut [u8],
    output: &[u8],
) -> Result<(), error::Unspecified> {
    let key = mac::Key::new(digest_alg, key_value);
    assert_eq!(key.algorithm(), digest_alg);

    // One-shot API.
    {
        let signature = mac::sign(&key, input);
        assert_eq!(signature.as_ref(), output);
        assert!(mac::verify(&key, input, output).is_ok());
    }

    // Multi-part API, one single part.
    {
        let mut s_ctx = mac::Context::with_key(&key);
        s_ctx.update(input);
        let signature = s_ctx.sign();
        assert_eq!(signature.as_ref(), output);
    }

    // Multi-part API, byte by byte.
    {
        let mut ctx = mac::Context::with_key(&key);
        for b in &*input {
            ctx.update(&[*b]);
        }
        let signature = ctx.sign();
        assert_eq!(signature.as_ref(), output);
    }

    // A modified message must not verify.
    if !input.is_empty() {
        input[0] ^= 1;
        assert!(mac::verify(&key, input, output).is_err());
        input[0] ^= 1;
    }

    // Neither may a modified or truncated tag.
    let mut bad_tag = output.to_vec();
    bad_tag[0] ^= 0x80;
    assert!(mac::verify(&key, input, &bad_tag).is_err());
    assert!(mac::verify(&key, input, &output[..output.len() - 1]).is_err());

    mac::verify(&key, input, output)
}

fn mac_test_case_incremental(
    digest_alg: &'static digest::Algorithm,
    key_value: &[u8],
    input: &[u8],
    output: &[u8],
) {
    let hash_bit_len = 8 * digest_alg.output_len();
    let mut ctx = MacContext::new(digest_alg.state_size());
    assert_eq!(ctx.state_size(), digest_alg.state_size());

    let mut tag = vec![0u8; output.len()];
    for init in [
        MacInit::Keyed {
            key: key_value,
            hash_bit_len,
        },
        MacInit::Reuse,
        MacInit::Reuse,
    ] {
        ctx.init(init).unwrap();
        assert_eq!(ctx.output_len(), output.len());
        ctx.update(input).unwrap();
        ctx.finish(&mut tag).unwrap();
        assert_eq!(&tag[..], output);
    }
}

#[test]
fn mac_golden_kat() {
    let mut num_mac_vectors = 0;
    test::kat::run(test_file!("skein_golden_kat.txt"), |v: &kat::Vector| {
        let Some(key) = &v.mac_key else {
            return Ok(());
        };
        num_mac_vectors += 1;

        let mut ctx = MacContext::new(v.state_size);
        let mut tag = vec![0u8; v.result.len()];

        ctx.init(MacInit::Keyed {
            key,
            hash_bit_len: v.hash_bit_len,
        })
        .unwrap();
        ctx.update_bits(&v.message, v.msg_bit_len).unwrap();
        ctx.finish(&mut tag).unwrap();
        assert_eq!(tag, v.result);

        // An unrelated message in between doesn't disturb the saved key.
        ctx.init(MacInit::Reuse).unwrap();
        ctx.update(b"unrelated").unwrap();
        ctx.finish(&mut tag).unwrap();
        assert_ne!(tag, v.result);

        ctx.init(MacInit::Reuse).unwrap();
        ctx.update_bits(&v.message, v.msg_bit_len).unwrap();
        ctx.finish(&mut tag).unwrap();
        assert_eq!(tag, v.result);

        Ok(())
    });
    assert!(num_mac_vectors > 0);
}

#[test]
fn mac_reuse_requires_key() {
    let mut ctx = MacContext::prepare(512).unwrap();
    match ctx.init(MacInit::Reuse) {
        Err(error::Error::Sequence(e)) => assert_eq!(e.to_string(), "NoSavedKeyState"),
        r => panic!("unexpected {:?}", r),
    }

    // Plain hashing doesn't save a key.
    let mut hash_ctx = skein::skein::Context::new(StateSize::Skein512);
    hash_ctx.init(512).unwrap();
    assert!(hash_ctx.init_from_saved().is_err());
}

#[test]
fn mac_reuse_keeps_output_length() {
    let mut ctx = MacContext::new(StateSize::Skein256);
    ctx.init(MacInit::Keyed {
        key: b"key",
        hash_bit_len: 160,
    })
    .unwrap();
    assert_eq!(ctx.output_len(), 20);
    let mut tag = [0u8; 20];
    ctx.finish(&mut tag).unwrap();

    ctx.init(MacInit::Reuse).unwrap();
    assert_eq!(ctx.output_len(), 20);
    let mut again = [0u8; 20];
    ctx.finish(&mut again).unwrap();
    assert_eq!(tag, again);
}

#[test]
fn mac_keyed_invalid_length() {
    let mut ctx = MacContext::new(StateSize::Skein1024);
    match ctx.init(MacInit::Keyed {
        key: b"key",
        hash_bit_len: 0,
    }) {
        Err(error::Error::InvalidParameter(e)) => assert_eq!(e.to_string(), "HashBitLen"),
        r => panic!("unexpected {:?}", r),
    }
    // A failed keyed initialization saves nothing.
    assert!(ctx.init(MacInit::Reuse).is_err());
}

// A MAC with an empty key is the plain hash.
#[test]
fn mac_empty_key_is_hash() {
    let key = mac::Key::new(&digest::SKEIN_512_256, b"");
    let tag = mac::sign(&key, b"abc");
    let hash = digest::digest(&digest::SKEIN_512_256, b"abc");
    assert_eq!(tag.as_ref(), hash.as_ref());

    let key = mac::Key::new(&digest::SKEIN_512_256, b"k");
    assert_ne!(mac::sign(&key, b"abc").as_ref(), hash.as_ref());
}

#[test]
fn mac_key_debug() {
    let key = mac::Key::new(&digest::SKEIN_1024_384, b"secret");
    assert_eq!(format!("{:?}", key), "Key { algorithm: Skein-1024-384 }");
}
