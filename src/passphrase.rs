//! XKCD-style passphrase assembly.
//!
//! Words are drawn from a pool, some of them capitalized, then digits and
//! symbols are inserted one at a time at a random position of the growing
//! fragment list. Every insertion sees the list as left by the previous one.

pub mod random;
pub mod words;

use crate::utils::error::{Error, Result};
use random::RandomSource;

pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const SYMBOLS: &[char] = &['~', '!', '@', '#', '$', '%', '^', '&', '*', '.', ':', ';'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub word_count: u32,
    pub cap_count: u32,
    pub number_count: u32,
    pub symbol_count: u32,
}

impl Default for PasswordRequest {
    fn default() -> Self {
        PasswordRequest {
            word_count: 4,
            cap_count: 0,
            number_count: 0,
            symbol_count: 0,
        }
    }
}

impl PasswordRequest {
    /// Bounds the word, number and symbol counts by `limit`.
    pub fn clamped(self, limit: u32) -> PasswordRequest {
        let word_count = self.word_count.min(limit);
        PasswordRequest {
            word_count,
            cap_count: self.cap_count.min(word_count),
            number_count: self.number_count.min(limit),
            symbol_count: self.symbol_count.min(limit),
        }
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn insert_random<S: RandomSource>(fragments: &mut Vec<String>, alphabet: &[char], rng: &mut S) {
    let at = rng.int_inclusive(fragments.len());
    if let Some(c) = rng.choose(alphabet) {
        fragments.insert(at, c.to_string());
    }
}

pub fn generate_password<S: RandomSource>(
    words: &[String],
    request: &PasswordRequest,
    rng: &mut S,
) -> Result<String> {
    if words.is_empty() && request.word_count > 0 {
        return Err(Error::EmptyPool(request.word_count));
    }
    let word_count = request.word_count as usize;
    let cap_count = (request.cap_count as usize).min(word_count);

    let mut capitalized = vec![false; word_count];
    for i in rng.sample_distinct(word_count, cap_count) {
        capitalized[i] = true;
    }

    let mut fragments: Vec<String> = Vec::with_capacity(
        word_count + request.number_count as usize + request.symbol_count as usize,
    );
    for cap in capitalized {
        let word = rng.choose(words).ok_or(Error::EmptyPool(request.word_count))?;
        fragments.push(match cap {
            true => capitalize(word),
            false => word.to_owned(),
        });
    }

    for _ in 0..request.number_count {
        insert_random(&mut fragments, DIGITS, rng);
    }
    for _ in 0..request.symbol_count {
        insert_random(&mut fragments, SYMBOLS, rng);
    }

    Ok(fragments.concat())
}
