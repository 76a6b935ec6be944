//! Bounded random string generator.
//!
//! Length is measured in characters. Spacing and casing rewrite characters
//! in place, so they never change the drawn length.

use super::ordered;
use crate::options::{Casing, CharacterSet, Language, Spaces, StringRequest};
use rand::Rng;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!#$%&()*+,-./:;<=>?@[]^_{}~";

/// Chance that an eligible position becomes a space.
const SPACE_PROBABILITY: f64 = 0.15;

/// Generate a random string satisfying `request`.
pub fn random_string<R: Rng>(rng: &mut R, request: &StringRequest) -> String {
    let (min, max) = ordered(request.min_length, request.max_length);
    let length = rng.random_range(min..=max);
    let alphabet = alphabet(request.character_set, request.language);

    let mut chars: Vec<char> = (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect();

    insert_spaces(rng, &mut chars, request.spaces);
    apply_casing(&mut chars, request.casing);

    chars.into_iter().collect()
}

/// Characters available for a character set in a language.
pub fn alphabet(character_set: CharacterSet, language: Language) -> Vec<char> {
    let letters = || {
        LOWERCASE
            .chars()
            .chain(UPPERCASE.chars())
            .chain(language.extra_letters().chars())
            .chain(language.extra_letters().chars().map(to_upper))
    };

    match character_set {
        CharacterSet::Alphabetic => letters().collect(),
        CharacterSet::Numeric => DIGITS.chars().collect(),
        CharacterSet::AlphaNumeric => letters().chain(DIGITS.chars()).collect(),
        CharacterSet::Anything => letters()
            .chain(DIGITS.chars())
            .chain(SYMBOLS.chars())
            .collect(),
    }
}

fn insert_spaces<R: Rng>(rng: &mut R, chars: &mut [char], spaces: Spaces) {
    let positions = match spaces {
        Spaces::None => return,
        Spaces::Middle => 1..chars.len().saturating_sub(1),
        Spaces::Any => 0..chars.len(),
    };

    for idx in positions {
        let after_space = idx > 0 && chars[idx - 1] == ' ';
        if !after_space && rng.random_bool(SPACE_PROBABILITY) {
            chars[idx] = ' ';
        }
    }
}

fn apply_casing(chars: &mut [char], casing: Casing) {
    match casing {
        Casing::Any => {}
        Casing::Lowercase => chars.iter_mut().for_each(|c| *c = to_lower(*c)),
        Casing::Uppercase => chars.iter_mut().for_each(|c| *c = to_upper(*c)),
        Casing::ProperCase => {
            let mut word_start = true;
            for c in chars.iter_mut() {
                if *c == ' ' {
                    word_start = true;
                    continue;
                }
                *c = if word_start { to_upper(*c) } else { to_lower(*c) };
                word_start = false;
            }
        }
    }
}

// Single-character mappings only; 'ß' has no one-character uppercase and stays as is.
fn to_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

fn to_lower(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(lower), None) => lower,
        _ => c,
    }
}
