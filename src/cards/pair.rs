//! Pair definitions - the fixed authoring content.
//!
//! A `PairDefinition` names one intended pair: the text shown in the left
//! column, the text shown in the right column, and the key that links them.
//! A `PairSet` is the validated collection a game is built from.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// One intended pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairDefinition {
    /// Identifier shared by the left and right card.
    pub key: String,

    /// Text on the left-column card.
    pub left_value: String,

    /// Text on the right-column card.
    pub right_value: String,
}

impl PairDefinition {
    /// Create a pair definition.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        left_value: impl Into<String>,
        right_value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            left_value: left_value.into(),
            right_value: right_value.into(),
        }
    }
}

/// Validated, non-empty pair dataset with unique keys.
///
/// Backed by `im::Vector`, so sessions can keep their own copy for resets
/// at O(1) cost.
///
/// ## Example
///
/// ```
/// use pair_match::cards::{PairDefinition, PairSet};
///
/// let set = PairSet::new(vec![
///     PairDefinition::new("A", "Red", "Rojo"),
///     PairDefinition::new("B", "Blue", "Azul"),
/// ])
/// .unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get("B").map(|p| p.right_value.as_str()), Some("Azul"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PairDefinition>", into = "Vec<PairDefinition>")]
pub struct PairSet {
    pairs: Vector<PairDefinition>,
}

impl PairSet {
    /// Build a pair set, rejecting empty input and duplicate keys.
    pub fn new(pairs: Vec<PairDefinition>) -> Result<Self, ConfigError> {
        if pairs.is_empty() {
            return Err(ConfigError::EmptyPairSet);
        }

        let mut seen = FxHashSet::default();
        for pair in &pairs {
            if !seen.insert(pair.key.as_str()) {
                return Err(ConfigError::DuplicateKey {
                    key: pair.key.clone(),
                });
            }
        }

        Ok(Self {
            pairs: pairs.into_iter().collect(),
        })
    }

    /// The five-pair philosophy dataset the game ships with (keys A-E).
    #[must_use]
    pub fn philosophy() -> Self {
        let pairs = [
            ("A", "Sócrates", "“Conócete a ti mismo” y método mayéutico"),
            ("B", "Platón", "Teoría de las Ideas: el mundo sensible y el mundo inteligible"),
            ("C", "Aristóteles", "La virtud como hábito y el término medio"),
            (
                "D",
                "Racionalismo",
                "Corriente filosófica que defiende que el conocimiento proviene de la razón (Descartes)",
            ),
            (
                "E",
                "Empirismo",
                "Doctrina que sostiene que el conocimiento se origina en la experiencia sensorial (Locke, Hume)",
            ),
        ];

        Self {
            pairs: pairs
                .iter()
                .map(|&(key, left, right)| PairDefinition::new(key, left, right))
                .collect(),
        }
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Never true for a validated set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = &PairDefinition> {
        self.pairs.iter()
    }

    /// Look up a definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PairDefinition> {
        self.pairs.iter().find(|p| p.key == key)
    }

    /// Copy the definitions out in authoring order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<PairDefinition> {
        self.pairs.iter().cloned().collect()
    }
}

impl TryFrom<Vec<PairDefinition>> for PairSet {
    type Error = ConfigError;

    fn try_from(pairs: Vec<PairDefinition>) -> Result<Self, Self::Error> {
        Self::new(pairs)
    }
}

impl From<PairSet> for Vec<PairDefinition> {
    fn from(set: PairSet) -> Self {
        set.to_vec()
    }
}
