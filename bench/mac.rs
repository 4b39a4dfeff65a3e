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

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skein::{
    digest,
    mac::{self, MacContext, MacInit},
};

static ALGORITHMS: &[(&str, &digest::Algorithm)] = &[
    ("skein_256_256", &digest::SKEIN_256_256),
    ("skein_512_512", &digest::SKEIN_512_512),
    ("skein_1024_1024", &digest::SKEIN_1024_1024),
];

const INPUT_LENGTHS: &[usize] = &[0, 64, 1024, 8192];

fn sign(c: &mut Criterion) {
    let key_value = [0x5c; 64];
    for &(alg_name, algorithm) in ALGORITHMS {
        let key = mac::Key::new(algorithm, &key_value);
        for input_len in INPUT_LENGTHS {
            let input = vec![0u8; *input_len];
            c.bench_with_input(
                BenchmarkId::new(format!("mac::sign::{alg_name}"), input_len),
                &input,
                |b, input| b.iter(|| black_box(mac::sign(&key, input))),
            );
        }
    }
}

// Keying every message versus starting from the saved keyed state.
fn reuse(c: &mut Criterion) {
    let key = [0x36; 64];
    let input = [0u8; 64];
    for &(alg_name, algorithm) in ALGORITHMS {
        let hash_bit_len = 8 * algorithm.output_len();
        let mut tag = [0u8; digest::MAX_OUTPUT_LEN];
        let tag = &mut tag[..algorithm.output_len()];

        c.bench_function(&format!("mac::keyed::{alg_name}"), |b| {
            let mut ctx = MacContext::new(algorithm.state_size());
            b.iter(|| {
                ctx.init(MacInit::Keyed {
                    key: &key,
                    hash_bit_len,
                })
                .unwrap();
                ctx.update(&input).unwrap();
                ctx.finish(&mut tag[..]).unwrap();
                black_box(&tag[..]);
            })
        });

        c.bench_function(&format!("mac::reuse::{alg_name}"), |b| {
            let mut ctx = MacContext::new(algorithm.state_size());
            ctx.init(MacInit::Keyed {
                key: &key,
                hash_bit_len,
            })
            .unwrap();
            b.iter(|| {
                ctx.init(MacInit::Reuse).unwrap();
                ctx.update(&input).unwrap();
                ctx.finish(&mut tag[..]).unwrap();
                black_box(&tag[..]);
            })
        });
    }
}

criterion_group!(mac, sign, reuse);
criterion_main!(mac);
