//! Plural categories per language.
//!
//! Plural keys are written once per category of the target language, e.g.
//! `item_one` and `item_other` for English. Categories come from CLDR data via
//! `icu_plurals`; languages without data fall back to the single `other` form.

use std::collections::HashMap;

use icu_locid::Locale;
use icu_plurals::{PluralCategory, PluralRules as IcuPluralRules};

/// Category used for languages without plural data.
pub const FALLBACK_CATEGORY: &str = "other";

/// Canonical category order used in output.
const CATEGORY_ORDER: [PluralCategory; 6] = [
    PluralCategory::Zero,
    PluralCategory::One,
    PluralCategory::Two,
    PluralCategory::Few,
    PluralCategory::Many,
    PluralCategory::Other,
];

/// Source of plural categories for a language tag.
pub trait PluralRules {
    /// Ordered category names for `lang`. Never empty.
    fn categories_for(&self, lang: &str) -> Vec<String>;
}

/// Cardinal plural categories from the CLDR data compiled into `icu_plurals`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CldrPluralRules;

impl PluralRules for CldrPluralRules {
    fn categories_for(&self, lang: &str) -> Vec<String> {
        cldr_categories(lang).unwrap_or_else(fallback_categories)
    }
}

fn cldr_categories(lang: &str) -> Option<Vec<String>> {
    let trimmed = lang.trim();
    if trimmed.is_empty() {
        return None;
    }

    let locale: Locale = trimmed.parse().ok()?;
    let data_locale = locale.into();
    let rules = IcuPluralRules::try_new_cardinal(&data_locale).ok()?;
    let supported: Vec<PluralCategory> = rules.categories().collect();

    let categories: Vec<String> = CATEGORY_ORDER
        .into_iter()
        .filter(|category| supported.contains(category))
        .map(|category| category_name(category).to_string())
        .collect();

    if categories.is_empty() {
        None
    } else {
        Some(categories)
    }
}

fn category_name(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

fn fallback_categories() -> Vec<String> {
    vec![FALLBACK_CATEGORY.to_string()]
}

/// Explicit category table, for tests and overrides.
#[derive(Debug, Default, Clone)]
pub struct FixedPluralRules {
    categories: HashMap<String, Vec<String>>,
}

impl FixedPluralRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, lang: &str, categories: &[&str]) -> Self {
        self.categories.insert(
            lang.to_string(),
            categories.iter().map(|c| c.to_string()).collect(),
        );
        self
    }
}

impl PluralRules for FixedPluralRules {
    fn categories_for(&self, lang: &str) -> Vec<String> {
        self.categories
            .get(lang)
            .filter(|categories| !categories.is_empty())
            .cloned()
            .unwrap_or_else(fallback_categories)
    }
}
