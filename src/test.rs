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

//! Testing framework.
//!
//! Unlike the rest of this crate, this testing framework uses panics pretty
//! liberally. It was designed for internal use: it drives most of the
//! crate's tests, and so it is optimized for getting tests written quickly
//! at the expense of some usability. The best way to learn it is to look at
//! some examples. The Threefish tests use named sections; the Skein
//! known-answer tests use the separate `kat` module because they come in
//! their own format.
//!
//! # Example
//!
//! Input files look like this:
//!
//! ```text
//! # This is a comment.
//!
//! Hash = Skein-512-256
//! Input = "The quick brown fox jumps over the lazy dog"
//! Output = b3250457e05d3060b1a4bbc1428bc75a3f525ca389aeab96cfa34638d96e492a
//!
//! Hash = Skein-256-128
//! Input = ""
//! Output = 07e8ff2191c5052e1a25914c7c213078
//! ```
//!
//! Test cases are separated with blank lines. Note how the bytes of the
//! `Input` attribute are specified as a quoted string; bytes can also be
//! given as hex, and you can mix and match within the same file. The empty
//! sequence of bytes can only be represented with the quoted string form
//! (`""`).
//!
//! Here's how you would consume the test data:
//!
//! ```ignore
//! use skein::test;
//!
//! test::run(skein::test_file!("digest_tests.txt"), |section, test_case| {
//!     assert_eq!(section, ""); // This test doesn't use named sections.
//!
//!     let digest_alg = test_case.consume_digest_alg("Hash");
//!     let input = test_case.consume_bytes("Input");
//!     let output = test_case.consume_bytes("Output");
//!
//!     // Do the actual testing here
//!     Ok(())
//! });
//! ```
//!
//! Note that `consume_digest_alg` maps the string "Skein-512-256" to a
//! reference to `digest::SKEIN_512_256`, etc.

use crate::{digest, error};
use alloc::{format, string::String, vec::Vec};

#[cfg(any(feature = "std", feature = "test_logging"))]
extern crate std;


/// `compile_time_assert_clone::<T>();` fails to compile if `T` doesn't
/// implement `Clone`.
pub fn compile_time_assert_clone<T: Clone>() {}

/// `compile_time_assert_send::<T>();` fails to compile if `T` doesn't
/// implement `Send`.
pub fn compile_time_assert_send<T: Send>() {}

/// `compile_time_assert_sync::<T>();` fails to compile if `T` doesn't
/// implement `Sync`.
pub fn compile_time_assert_sync<T: Sync>() {}

/// `compile_time_assert_std_error_error::<T>();` fails to compile if `T`
/// doesn't implement `std::error::Error`.
#[cfg(feature = "std")]
pub fn compile_time_assert_std_error_error<T: std::error::Error>() {}

/// `test_file!("file_name")` is equivalent to `test::File { file_name:
/// "file_name", contents: include_str!("file_name") }`.
#[macro_export]
macro_rules! test_file {
    ($file_name:expr) => {
        $crate::test::File {
            file_name: $file_name,
            contents: include_str!($file_name),
        }
    };
}

/// A test input file.
pub struct File<'a> {
    /// The name (path) of the file.
    pub file_name: &'a str,

    /// The contents of the file.
    pub contents: &'a str,
}

/// A test case. A test case consists of a set of named attributes. Every
/// attribute in the test case must be consumed exactly once; this helps catch
/// typos and omissions.
#[derive(Debug)]
pub struct TestCase {
    attributes: Vec<(String, String, bool)>,
}

impl TestCase {
    /// Maps names like "Skein-512-256" to digest algorithms. Panics on
    /// names that aren't one of the `digest` statics.
    pub fn consume_digest_alg(&mut self, key: &str) -> &'static digest::Algorithm {
        let name = self.consume_string(key);
        match name.as_ref() {
            "Skein-256-128" => &digest::SKEIN_256_128,
            "Skein-256-160" => &digest::SKEIN_256_160,
            "Skein-256-224" => &digest::SKEIN_256_224,
            "Skein-256-256" => &digest::SKEIN_256_256,
            "Skein-512-128" => &digest::SKEIN_512_128,
            "Skein-512-160" => &digest::SKEIN_512_160,
            "Skein-512-224" => &digest::SKEIN_512_224,
            "Skein-512-256" => &digest::SKEIN_512_256,
            "Skein-512-384" => &digest::SKEIN_512_384,
            "Skein-512-512" => &digest::SKEIN_512_512,
            "Skein-1024-384" => &digest::SKEIN_1024_384,
            "Skein-1024-512" => &digest::SKEIN_1024_512,
            "Skein-1024-1024" => &digest::SKEIN_1024_1024,
            _ => panic!("Unsupported digest algorithm: {}", name),
        }
    }

    /// Returns the value of an attribute that is encoded as a sequence of an
    /// even number of hex digits, or as a double-quoted UTF-8 string. The
    /// empty (zero-length) value is represented as "".
    pub fn consume_bytes(&mut self, key: &str) -> Vec<u8> {
        self.consume_optional_bytes(key)
            .unwrap_or_else(|| panic!("No attribute named \"{}\"", key))
    }

    /// Like `consume_bytes()` except it returns `None` if the test case
    /// doesn't have the attribute.
    pub fn consume_optional_bytes(&mut self, key: &str) -> Option<Vec<u8>> {
        let s = self.consume_optional_string(key)?;
        let result = if let Some(quoted) = s.strip_prefix('\"') {
            // The value is a quoted UTF-8 string. Inner quotes aren't
            // supported.
            let unquoted = quoted
                .strip_suffix('\"')
                .unwrap_or_else(|| panic!("expected quoted string, found {}", s));
            Vec::from(unquoted.as_bytes())
        } else {
            // The value is hex encoded.
            match from_hex(&s) {
                Ok(s) => s,
                Err(err_str) => {
                    panic!("{} in {}", err_str, s);
                }
            }
        };
        Some(result)
    }

    /// Returns the value of an attribute that is an integer, in decimal
    /// notation.
    pub fn consume_usize(&mut self, key: &str) -> usize {
        let s = self.consume_string(key);
        s.parse::<usize>()
            .unwrap_or_else(|_| panic!("Invalid integer \"{}\" for \"{}\"", s, key))
    }

    /// Returns the raw value of an attribute, without any unquoting or
    /// other interpretation.
    pub fn consume_string(&mut self, key: &str) -> String {
        self.consume_optional_string(key)
            .unwrap_or_else(|| panic!("No attribute named \"{}\"", key))
    }

    /// Like `consume_string()` except it returns `None` if the test case
    /// doesn't have the attribute.
    pub fn consume_optional_string(&mut self, key: &str) -> Option<String> {
        for (name, value, consumed) in &mut self.attributes {
            if key == name {
                if *consumed {
                    panic!("Attribute {} was already consumed", key);
                }
                *consumed = true;
                return Some(value.clone());
            }
        }
        None
    }
}

/// Reads test cases out of the file with the path given by
/// `test_file`, calling `f` on each vector until `f` fails or until all the
/// test vectors have been read. `f` can indicate failure either by returning
/// `Err()` or by panicking.
pub fn run<F>(test_file: File, mut f: F)
where
    F: FnMut(&str, &mut TestCase) -> Result<(), error::Unspecified>,
{
    let lines = &mut test_file.contents.lines();

    let mut current_section = String::from("");
    let mut failed = false;
    let mut num_cases = 0usize;

    while let Some(mut test_case) = parse_test_case(&mut current_section, lines) {
        num_cases += 1;
        let result = match f(&current_section, &mut test_case) {
            Ok(()) => {
                if !test_case
                    .attributes
                    .iter()
                    .any(|&(_, _, consumed)| !consumed)
                {
                    Ok(())
                } else {
                    Err("Test didn't consume all attributes.")
                }
            }
            Err(error::Unspecified) => Err("Test returned Err(error::Unspecified)."),
        };

        if result.is_err() {
            failed = true;
        }

        #[cfg(feature = "test_logging")]
        if let Err(msg) = result {
            std::println!("{}: {}", test_file.file_name, msg);

            for (name, value, consumed) in test_case.attributes {
                let consumed_str = if consumed { "" } else { " (unconsumed)" };
                std::println!("{}{} = {}", name, consumed_str, value);
            }
        };
    }

    if failed {
        panic!("{}: Test failed.", test_file.file_name);
    }
    if num_cases == 0 {
        panic!("{}: No test cases.", test_file.file_name);
    }
}

/// Decode an string of hex digits into a sequence of bytes. The input must
/// have an even number of digits.
pub fn from_hex(hex_str: &str) -> Result<Vec<u8>, String> {
    if hex_str.len() % 2 != 0 {
        return Err(String::from(
            "Hex string does not have an even number of digits",
        ));
    }

    let mut result = Vec::with_capacity(hex_str.len() / 2);
    for digits in hex_str.as_bytes().chunks(2) {
        let hi = from_hex_digit(digits[0])?;
        let lo = from_hex_digit(digits[1])?;
        result.push((hi * 0x10) | lo);
    }
    Ok(result)
}

fn from_hex_digit(d: u8) -> Result<u8, String> {
    use core::ops::RangeInclusive;
    const DECIMAL: (u8, RangeInclusive<u8>) = (0, b'0'..=b'9');
    const HEX_LOWER: (u8, RangeInclusive<u8>) = (10, b'a'..=b'f');
    const HEX_UPPER: (u8, RangeInclusive<u8>) = (10, b'A'..=b'F');
    for (offset, range) in &[DECIMAL, HEX_LOWER, HEX_UPPER] {
        if range.contains(&d) {
            return Ok(d - range.start() + offset);
        }
    }
    Err(format!("Invalid hex digit '{}'", d as char))
}

fn parse_test_case(
    current_section: &mut String,
    lines: &mut dyn Iterator<Item = &str>,
) -> Option<TestCase> {
    let mut attributes = Vec::new();

    let mut is_first_line = true;
    loop {
        let line = lines.next();

        #[cfg(feature = "test_logging")]
        if let Some(text) = &line {
            std::println!("Line: {}", text);
        }

        match line {
            // If we get to EOF when we're not in the middle of a test case,
            // then we're done.
            None if is_first_line => {
                return None;
            }

            // End of the file on a non-empty test cases ends the test case.
            None => {
                return Some(TestCase { attributes });
            }

            // A blank line ends a test case if the test case isn't empty.
            Some("") => {
                if !is_first_line {
                    return Some(TestCase { attributes });
                }
                // Ignore leading blank lines.
            }

            // Comments start with '#'; ignore them.
            Some(line) if line.starts_with('#') => (),

            Some(line) if line.starts_with('[') => {
                assert!(is_first_line);
                assert!(line.ends_with(']'));
                current_section.truncate(0);
                current_section.push_str(line);
                let _: Option<char> = current_section.pop();
                let _: char = current_section.remove(0);
            }

            Some(line) => {
                is_first_line = false;

                let parts: Vec<&str> = line.splitn(2, " = ").collect();
                if parts.len() != 2 {
                    panic!("Syntax error: Expected Key = Value.");
                };

                let key = parts[0].trim();
                let value = parts[1].trim();

                // Don't allow the value to be omitted. An empty value can be
                // represented as an empty quoted string.
                assert_ne!(value.len(), 0);

                attributes.push((String::from(key), String::from(value), false));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ok() {
        run(test_file!("test/test_1_tests.txt"), |_, test_case| {
            let _: String = test_case.consume_string("Key");
            Ok(())
        });
    }

    #[test]
    #[should_panic(expected = "Test failed.")]
    fn one_err() {
        run(test_file!("test/test_1_tests.txt"), |_, test_case| {
            let _: String = test_case.consume_string("Key");
            Err(error::Unspecified)
        });
    }

    #[test]
    #[should_panic(expected = "Oh noes!")]
    fn one_panics() {
        run(test_file!("test/test_1_tests.txt"), |_, test_case| {
            let _: String = test_case.consume_string("Key");
            panic!("Oh noes!");
        });
    }

    #[test]
    #[should_panic(expected = "Test failed.")]
    fn first_err() {
        err_one(0)
    }

    #[test]
    #[should_panic(expected = "Test failed.")]
    fn middle_err() {
        err_one(1)
    }

    #[test]
    #[should_panic(expected = "Test failed.")]
    fn last_err() {
        err_one(2)
    }

    fn err_one(test_to_fail: usize) {
        let mut n = 0;
        run(test_file!("test/test_3_tests.txt"), |_, test_case| {
            let _: String = test_case.consume_string("Key");
            let result = if n != test_to_fail {
                Ok(())
            } else {
                Err(error::Unspecified)
            };
            n += 1;
            result
        });
    }

    #[test]
    #[should_panic(expected = "Test failed.")]
    fn unconsumed_attribute() {
        run(test_file!("test/test_1_tests.txt"), |_, _| Ok(()));
    }

    #[test]
    #[should_panic(expected = "Syntax error: Expected Key = Value.")]
    fn syntax_error() {
        run(test_file!("test/test_1_syntax_error_tests.txt"), |_, _| {
            Ok(())
        });
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("00ff7F"), Ok(alloc::vec![0x00, 0xff, 0x7f]));
        assert!(from_hex("0").is_err());
        assert!(from_hex("0g").is_err());
    }

    #[test]
    fn test_consume_bytes() {
        run(test_file!("test/test_1_tests.txt"), |_, test_case| {
            assert_eq!(test_case.consume_bytes("Key"), b"Value");
            Ok(())
        });
    }
}
