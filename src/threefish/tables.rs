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

//! Round constants.
//!
//! The word pairs are given as indices into the unpermuted state. The word
//! permutation has period 4 in every block size, so applying the pairs of
//! round `d % 4` in place is equivalent to permuting the words after every
//! round, and the subkeys are always added in natural word order.

pub(super) struct Params {
    pub rounds: usize,
    pub rotations: [[u32; 8]; 8],
    pub pairs: [[(usize, usize); 8]; 4],
}

pub(super) const fn params(words: usize) -> Params {
    match words {
        4 => THREEFISH_256,
        8 => THREEFISH_512,
        16 => THREEFISH_1024,
        _ => panic!("Threefish is only defined for 4, 8, or 16 words"),
    }
}

const THREEFISH_256: Params = Params {
    rounds: 72,
    rotations: [
        [14, 16, 0, 0, 0, 0, 0, 0],
        [52, 57, 0, 0, 0, 0, 0, 0],
        [23, 40, 0, 0, 0, 0, 0, 0],
        [5, 37, 0, 0, 0, 0, 0, 0],
        [25, 33, 0, 0, 0, 0, 0, 0],
        [46, 12, 0, 0, 0, 0, 0, 0],
        [58, 22, 0, 0, 0, 0, 0, 0],
        [32, 32, 0, 0, 0, 0, 0, 0],
    ],
    pairs: [
        [(0, 1), (2, 3), UNUSED, UNUSED, UNUSED, UNUSED, UNUSED, UNUSED],
        [(0, 3), (2, 1), UNUSED, UNUSED, UNUSED, UNUSED, UNUSED, UNUSED],
        [(0, 1), (2, 3), UNUSED, UNUSED, UNUSED, UNUSED, UNUSED, UNUSED],
        [(0, 3), (2, 1), UNUSED, UNUSED, UNUSED, UNUSED, UNUSED, UNUSED],
    ],
};

const THREEFISH_512: Params = Params {
    rounds: 72,
    rotations: [
        [46, 36, 19, 37, 0, 0, 0, 0],
        [33, 27, 14, 42, 0, 0, 0, 0],
        [17, 49, 36, 39, 0, 0, 0, 0],
        [44, 9, 54, 56, 0, 0, 0, 0],
        [39, 30, 34, 24, 0, 0, 0, 0],
        [13, 50, 10, 17, 0, 0, 0, 0],
        [25, 29, 39, 43, 0, 0, 0, 0],
        [8, 35, 56, 22, 0, 0, 0, 0],
    ],
    pairs: [
        [(0, 1), (2, 3), (4, 5), (6, 7), UNUSED, UNUSED, UNUSED, UNUSED],
        [(2, 1), (4, 7), (6, 5), (0, 3), UNUSED, UNUSED, UNUSED, UNUSED],
        [(4, 1), (6, 3), (0, 5), (2, 7), UNUSED, UNUSED, UNUSED, UNUSED],
        [(6, 1), (0, 7), (2, 5), (4, 3), UNUSED, UNUSED, UNUSED, UNUSED],
    ],
};

const THREEFISH_1024: Params = Params {
    rounds: 80,
    rotations: [
        [24, 13, 8, 47, 8, 17, 22, 37],
        [38, 19, 10, 55, 49, 18, 23, 52],
        [33, 4, 51, 13, 34, 41, 59, 17],
        [5, 20, 48, 41, 47, 28, 16, 25],
        [41, 9, 37, 31, 12, 47, 44, 30],
        [16, 34, 56, 51, 4, 53, 42, 41],
        [31, 44, 47, 46, 19, 42, 44, 25],
        [9, 48, 35, 52, 23, 31, 37, 20],
    ],
    pairs: [
        [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        [(0, 9), (2, 13), (6, 11), (4, 15), (10, 7), (12, 3), (14, 5), (8, 1)],
        [(0, 7), (2, 5), (4, 3), (6, 1), (12, 15), (14, 13), (8, 11), (10, 9)],
        [(0, 15), (2, 11), (6, 13), (4, 9), (14, 1), (8, 5), (10, 3), (12, 7)],
    ],
};

// Padding for the narrower block sizes; never reached because only the
// first `N / 2` pairs of a round are used.
const UNUSED: (usize, usize) = (0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    fn check_pairs(p: &Params, words: usize) {
        for round in &p.pairs {
            let mut seen = [false; 16];
            for &(a, b) in round.iter().take(words / 2) {
                assert_eq!(a % 2, 0);
                assert_eq!(b % 2, 1);
                assert!(!seen[a] && !seen[b]);
                seen[a] = true;
                seen[b] = true;
            }
            assert!(seen.iter().take(words).all(|&s| s));
        }
    }

    #[test]
    fn pairs_are_permutations() {
        check_pairs(&THREEFISH_256, 4);
        check_pairs(&THREEFISH_512, 8);
        check_pairs(&THREEFISH_1024, 16);
    }

    #[test]
    fn rotations_in_range() {
        for p in [&THREEFISH_256, &THREEFISH_512, &THREEFISH_1024] {
            assert!(p.rotations.iter().flatten().all(|&r| r < 64));
            assert_eq!(p.rounds % 8, 0);
        }
    }
}
