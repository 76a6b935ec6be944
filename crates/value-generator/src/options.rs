//! String generation options.

use serde::{Deserialize, Serialize};

/// Characters a random string is drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterSet {
    /// Letters only
    Alphabetic,
    /// Digits only
    Numeric,
    /// Letters and digits
    #[default]
    AlphaNumeric,
    /// Letters, digits and punctuation
    Anything,
}

/// Where spaces may appear in a random string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spaces {
    /// No spaces
    #[default]
    None,
    /// Spaces between words, never leading or trailing
    Middle,
    /// Spaces anywhere
    Any,
}

/// Letter casing applied to a random string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Casing {
    /// Mixed case as drawn
    #[default]
    Any,
    Lowercase,
    Uppercase,
    /// First letter of each word upper, the rest lower
    ProperCase,
}

/// Language whose extra letters join the alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
}

impl Language {
    /// Letters beyond `a-z` used by this language (lowercase).
    pub fn extra_letters(self) -> &'static str {
        match self {
            Self::English => "",
            Self::German => "äöüß",
            Self::French => "àâçéèêëîïôûù",
            Self::Spanish => "áéíñóúü",
        }
    }
}

/// Request for a bounded random string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRequest {
    /// Minimum length in characters (inclusive)
    pub min_length: usize,
    /// Maximum length in characters (inclusive)
    pub max_length: usize,
    #[serde(default)]
    pub character_set: CharacterSet,
    #[serde(default)]
    pub spaces: Spaces,
    #[serde(default)]
    pub casing: Casing,
    #[serde(default)]
    pub language: Language,
}

impl StringRequest {
    /// Request a string with length in `[min_length, max_length]` and default options.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            character_set: CharacterSet::default(),
            spaces: Spaces::default(),
            casing: Casing::default(),
            language: Language::default(),
        }
    }

    /// Request a string of exactly `length` characters.
    pub fn exact(length: usize) -> Self {
        Self::new(length, length)
    }

    pub fn with_character_set(mut self, character_set: CharacterSet) -> Self {
        self.character_set = character_set;
        self
    }

    pub fn with_spaces(mut self, spaces: Spaces) -> Self {
        self.spaces = spaces;
        self
    }

    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
