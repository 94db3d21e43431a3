// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Filename-based gallery classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix used by the camera for portrait shots
pub const PORTRAIT_PREFIX: &str = "IMG_";

/// Prefix of numbered exports, categorized by their number
pub const NUMBERED_PREFIX: &str = "RIK-";

const EVENT_NUMBERS: &[u32] = &[4487, 4501, 4504, 4508, 6640, 6663, 6672, 6682, 6715];
const GROUP_NUMBERS: &[u32] = &[4512, 4513, 4515];
const LANDSCAPE_NUMBERS: &[u32] = &[3694, 6631, 6696];
const NEW_PORTRAIT_NUMBERS: &[u32] = &[6452, 6478, 6479, 6744];

/// Gallery category, in display precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Retratos,
    Eventos,
    Grupos,
    Paisagens,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Retratos,
        Category::Eventos,
        Category::Grupos,
        Category::Paisagens,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Retratos => "retratos",
            Category::Eventos => "eventos",
            Category::Grupos => "grupos",
            Category::Paisagens => "paisagens",
        }
    }

    /// Human-readable label used as image alt text
    pub fn alt_text(self) -> &'static str {
        match self {
            Category::Retratos => "Retrato profissional",
            Category::Eventos => "Fotografia de evento",
            Category::Grupos => "Fotografia de grupo",
            Category::Paisagens => "Fotografia de paisagem",
        }
    }

    /// Position in the gallery ordering
    pub fn precedence(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Fallback label for a category value outside the known set
pub const DEFAULT_ALT_TEXT: &str = "Fotografia profissional";

/// Alt text for a free-form category label
pub fn alt_text_for(label: &str) -> &'static str {
    label
        .parse::<Category>()
        .map(Category::alt_text)
        .unwrap_or(DEFAULT_ALT_TEXT)
}

/// Classify an image by its filename (stem or full name).
///
/// Total: every input maps to exactly one category.
pub fn classify(filename: &str) -> Category {
    if filename.starts_with(PORTRAIT_PREFIX) {
        return Category::Retratos;
    }

    match filename.strip_prefix(NUMBERED_PREFIX).and_then(leading_number) {
        Some(number) => classify_number(number),
        None => Category::Retratos,
    }
}

/// Category of a numbered export; unknown numbers are portraits
pub fn classify_number(number: u32) -> Category {
    if EVENT_NUMBERS.contains(&number) {
        Category::Eventos
    } else if GROUP_NUMBERS.contains(&number) {
        Category::Grupos
    } else if LANDSCAPE_NUMBERS.contains(&number) {
        Category::Paisagens
    } else {
        // NEW_PORTRAIT_NUMBERS land here too
        Category::Retratos
    }
}

/// Every number with an explicit category assignment
pub fn known_numbers() -> impl Iterator<Item = (u32, Category)> {
    let sets: [(&'static [u32], Category); 4] = [
        (EVENT_NUMBERS, Category::Eventos),
        (GROUP_NUMBERS, Category::Grupos),
        (LANDSCAPE_NUMBERS, Category::Paisagens),
        (NEW_PORTRAIT_NUMBERS, Category::Retratos),
    ];
    sets.into_iter()
        .flat_map(|(numbers, category)| numbers.iter().map(move |&n| (n, category)))
}

// "4487", "4487-2", "4487 (copy)", " +4487" all yield 4487
fn leading_number(rest: &str) -> Option<u32> {
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let digits: &str = match rest.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &rest[..end],
        None => rest,
    };
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_portrait_prefix() {
        assert_eq!(classify("IMG_0001"), Category::Retratos);
        assert_eq!(classify("IMG_4487"), Category::Retratos);
    }

    #[test]
    fn test_numbered_sets() {
        assert_eq!(classify("RIK-4487"), Category::Eventos);
        assert_eq!(classify("RIK-6715"), Category::Eventos);
        assert_eq!(classify("RIK-4513"), Category::Grupos);
        assert_eq!(classify("RIK-3694"), Category::Paisagens);
        assert_eq!(classify("RIK-6744"), Category::Retratos);
    }

    #[test]
    fn test_numbered_suffixes_ignored() {
        assert_eq!(classify("RIK-6631-2"), Category::Paisagens);
        assert_eq!(classify("RIK-4512.jpg"), Category::Grupos);
    }

    #[test]
    fn test_numbered_leading_space_and_sign() {
        assert_eq!(classify("RIK- 4487"), Category::Eventos);
        assert_eq!(classify("RIK-+4513"), Category::Grupos);
        assert_eq!(classify("RIK- +"), Category::Retratos);
        assert_eq!(classify("RIK--4487"), Category::Retratos);
    }

    #[test]
    fn test_unknown_defaults_to_portraits() {
        assert_eq!(classify("RIK-9999"), Category::Retratos);
        assert_eq!(classify("RIK-"), Category::Retratos);
        assert_eq!(classify("RIK-abc"), Category::Retratos);
        assert_eq!(classify("DSC_4487"), Category::Retratos);
        assert_eq!(classify(""), Category::Retratos);
    }

    #[test]
    fn test_number_sets_disjoint() {
        let mut seen = HashSet::new();
        for (number, _) in known_numbers() {
            assert!(seen.insert(number), "{} appears in more than one set", number);
        }
    }

    #[test]
    fn test_alt_text() {
        assert_eq!(Category::Eventos.alt_text(), "Fotografia de evento");
        assert_eq!(alt_text_for("paisagens"), "Fotografia de paisagem");
        assert_eq!(alt_text_for("Grupos"), "Fotografia de grupo");
        assert_eq!(alt_text_for("macro"), DEFAULT_ALT_TEXT);
    }

    #[test]
    fn test_precedence_order() {
        let order: Vec<usize> = Category::ALL.iter().map(|c| c.precedence()).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_portrait_prefix_always_retratos(suffix in ".*") {
            prop_assert_eq!(classify(&format!("IMG_{}", suffix)), Category::Retratos);
        }

        #[test]
        fn prop_numbered_depends_only_on_number(number in 0u32..10000, tail in "[-_ a-z]{0,6}") {
            let bare = classify(&format!("RIK-{}", number));
            prop_assert_eq!(classify(&format!("RIK-{}{}", number, tail)), bare);
            prop_assert_eq!(bare, classify_number(number));
        }

        #[test]
        fn prop_classify_is_total(name in "\\PC*") {
            let category = classify(&name);
            prop_assert!(Category::ALL.contains(&category));
        }
    }
}
