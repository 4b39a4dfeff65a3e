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

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skein::threefish::{Threefish, Threefish1024, Threefish256, Threefish512};

fn bench_block<const N: usize>(c: &mut Criterion, name: &str, cipher: &Threefish<N>) {
    let block = [0u64; N];
    c.bench_function(&format!("threefish::encrypt_block::{name}"), |b| {
        b.iter(|| black_box(cipher.encrypt_block(black_box(&block))))
    });
    c.bench_function(&format!("threefish::decrypt_block::{name}"), |b| {
        b.iter(|| black_box(cipher.decrypt_block(black_box(&block))))
    });
}

fn blocks(c: &mut Criterion) {
    let tweak = [1, 2];
    bench_block(c, "threefish_256", &Threefish256::new(&[3; 4], &tweak));
    bench_block(c, "threefish_512", &Threefish512::new(&[3; 8], &tweak));
    bench_block(c, "threefish_1024", &Threefish1024::new(&[3; 16], &tweak));
}

criterion_group!(threefish, blocks);
criterion_main!(threefish);
