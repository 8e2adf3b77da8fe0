//! Rule-based English noun lemmatizer.
//!
//! Words are treated as nouns, so only plural inflection is undone:
//! `running` stays `running` while `runs` becomes `run`. Irregular plurals
//! come from a fixed exception table, a small set of words that only look
//! plural is left alone, and the remaining words go through ordered suffix
//! rules where the first match wins:
//!
//! | suffix | replacement | example              |
//! |--------|-------------|----------------------|
//! | `sses` | `ss`        | classes → class      |
//! | `xes`  | `x`         | boxes → box          |
//! | `zzes` | `zz`        | buzzes → buzz        |
//! | `ches` | `ch`        | churches → church    |
//! | `shes` | `sh`        | dishes → dish        |
//! | `ies`  | `y`         | bodies → body        |
//! | `s`    | (none)      | engines → engine     |
//!
//! Words of three characters or fewer, and words ending in `ss`, `us` or
//! `is`, are never reduced.
//!
//! # Examples
//!
//! ```
//! use ngbayes::analysis::token_filter::lemma::{EnglishLemmatizer, Lemmatizer};
//!
//! let lemmatizer = EnglishLemmatizer::new();
//! assert_eq!(lemmatizer.lemmatize("cars"), "car");
//! assert_eq!(lemmatizer.lemmatize("children"), "child");
//! assert_eq!(lemmatizer.lemmatize("virus"), "virus");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::analysis::token_filter::lemma::Lemmatizer;

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("crises", "crisis"),
    ("diagnoses", "diagnosis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("lives", "life"),
    ("wives", "wife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("calories", "calorie"),
    ("aches", "ache"),
    ("caches", "cache"),
    ("headaches", "headache"),
    ("niches", "niche"),
];

const UNINFLECTED: &[&str] = &[
    "news",
    "series",
    "species",
    "means",
    "mathematics",
    "physics",
    "politics",
    "economics",
    "ethics",
    "graphics",
    "electronics",
    "athletics",
    "always",
    "perhaps",
    "whereas",
    "sometimes",
    "nevertheless",
];

const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("xes", "x"),
    ("zzes", "zz"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("ies", "y"),
    ("s", ""),
];

static IRREGULAR_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_PLURALS.iter().copied().collect());

static UNINFLECTED_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| UNINFLECTED.iter().copied().collect());

/// Rule-based English lemmatizer for plural nouns.
#[derive(Debug, Clone, Default)]
pub struct EnglishLemmatizer;

impl EnglishLemmatizer {
    pub fn new() -> Self {
        EnglishLemmatizer
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR_MAP.get(word) {
            return (*lemma).to_string();
        }

        if UNINFLECTED_SET.contains(word)
            || word.chars().count() <= 3
            || word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("is")
        {
            return word.to_string();
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                // "ies" -> "y" needs at least two characters of stem ("ties" -> "tie").
                if *suffix == "ies" && stem.chars().count() < 2 {
                    continue;
                }
                return format!("{stem}{replacement}");
            }
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "english"
    }
}
