// src/generators/charset.rs
use crate::generators::RandomSource;
use crate::models::{CharacterClass, PasswordRequest};

/// Rolls below this value produce a letter.
pub const LETTER_CUTOFF: usize = 70;
/// Rolls in `LETTER_CUTOFF..NUMBER_CUTOFF` produce a number when numbers are enabled.
pub const NUMBER_CUTOFF: usize = 90;
/// Rolls in `NUMBER_CUTOFF..ROLL_RANGE` produce a special character when enabled.
pub const ROLL_RANGE: usize = 100;

/// Uniform draw from the alphabet of `class`.
pub fn sample_from_class<S: RandomSource>(rng: &mut S, class: CharacterClass) -> char {
    let alphabet = class.alphabet();
    alphabet[rng.next_below(alphabet.len())] as char
}

/// Draw for a filler character.
///
/// About 70% of draws are letters, split evenly between lowercase and
/// uppercase, 20% numbers and 10% special characters. A roll that lands in
/// the range of a disabled class becomes a letter; the other optional class
/// never picks up that share.
pub fn sample_weighted<S: RandomSource>(rng: &mut S, request: &PasswordRequest) -> char {
    let roll = rng.next_below(ROLL_RANGE);

    if roll < LETTER_CUTOFF {
        sample_letter(rng)
    } else if roll < NUMBER_CUTOFF {
        if request.with_numbers {
            sample_from_class(rng, CharacterClass::Number)
        } else {
            sample_letter(rng)
        }
    } else if request.with_special_chars {
        sample_from_class(rng, CharacterClass::Special)
    } else {
        sample_letter(rng)
    }
}

fn sample_letter<S: RandomSource>(rng: &mut S) -> char {
    let class = if rng.next_below(2) == 0 {
        CharacterClass::Lowercase
    } else {
        CharacterClass::Uppercase
    };
    sample_from_class(rng, class)
}
