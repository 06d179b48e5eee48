//! Companion relationships between plant kinds.
//!
//! A [`CompanionMatrix`] stores a qualitative [`CompanionRelationship`] for pairs of kinds.
//! Storage is directional (`a -> b`), but meaning is symmetric: [`CompanionMatrix::relationship`]
//! consults both directions and falls back to [`CompanionRelationship::Neutral`].
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::KindId;
use crate::error::Error;

/// Qualitative compatibility of two kinds grown next to each other, best first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompanionRelationship {
    Excellent,
    Good,
    #[default]
    Neutral,
    Avoid,
    Bad,
}

impl CompanionRelationship {
    pub const ALL: [CompanionRelationship; 5] = [
        CompanionRelationship::Excellent,
        CompanionRelationship::Good,
        CompanionRelationship::Neutral,
        CompanionRelationship::Avoid,
        CompanionRelationship::Bad,
    ];

    /// Placement score contributed by one neighbouring cell with this relationship.
    pub fn weight(self) -> i32 {
        match self {
            CompanionRelationship::Excellent => 10,
            CompanionRelationship::Good => 5,
            CompanionRelationship::Neutral => 0,
            CompanionRelationship::Avoid => -5,
            CompanionRelationship::Bad => -15,
        }
    }

    pub fn is_beneficial(self) -> bool {
        matches!(
            self,
            CompanionRelationship::Excellent | CompanionRelationship::Good
        )
    }

    pub fn is_harmful(self) -> bool {
        matches!(self, CompanionRelationship::Avoid | CompanionRelationship::Bad)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompanionRelationship::Excellent => "excellent",
            CompanionRelationship::Good => "good",
            CompanionRelationship::Neutral => "neutral",
            CompanionRelationship::Avoid => "avoid",
            CompanionRelationship::Bad => "bad",
        }
    }
}

impl fmt::Display for CompanionRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanionRelationship {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(CompanionRelationship::Excellent),
            "good" => Ok(CompanionRelationship::Good),
            "neutral" => Ok(CompanionRelationship::Neutral),
            "avoid" => Ok(CompanionRelationship::Avoid),
            "bad" => Ok(CompanionRelationship::Bad),
            other => Err(Error::InvalidCatalog(format!(
                "unknown companion relationship '{other}'"
            ))),
        }
    }
}

/// Rule of thumb for a plant family.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FamilyPrinciple {
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub good_with: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub avoid_with: Vec<String>,
}

/// Pairwise companion relationships plus the descriptive material shown by reports.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanionMatrix {
    /// Directional storage: `relationships[a][b]`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub relationships: BTreeMap<KindId, BTreeMap<KindId, CompanionRelationship>>,
    /// Human-readable meaning of each relationship level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub legend: BTreeMap<CompanionRelationship, String>,
    /// Family-level guidance keyed by family name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub principles: BTreeMap<String, FamilyPrinciple>,
}

impl CompanionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `a -> b`. The reverse direction is implied by [`Self::relationship`].
    pub fn insert(
        &mut self,
        a: impl Into<KindId>,
        b: impl Into<KindId>,
        relationship: CompanionRelationship,
    ) -> &mut Self {
        self.relationships
            .entry(a.into())
            .or_default()
            .insert(b.into(), relationship);
        self
    }

    /// Builder form of [`Self::insert`].
    pub fn with(
        mut self,
        a: impl Into<KindId>,
        b: impl Into<KindId>,
        relationship: CompanionRelationship,
    ) -> Self {
        self.insert(a, b, relationship);
        self
    }

    /// Relationship between `a` and `b`, checking `a -> b` first, then `b -> a`.
    pub fn relationship(&self, a: &str, b: &str) -> CompanionRelationship {
        self.direct(a, b)
            .or_else(|| self.direct(b, a))
            .unwrap_or_default()
    }

    fn direct(&self, a: &str, b: &str) -> Option<CompanionRelationship> {
        self.relationships.get(a).and_then(|row| row.get(b)).copied()
    }

    /// Every kind with a recorded relationship to `kind`, in either direction.
    ///
    /// Entries from `kind`'s own row take precedence over reverse entries.
    pub fn partners_of(&self, kind: &str) -> BTreeMap<KindId, CompanionRelationship> {
        let mut partners: BTreeMap<KindId, CompanionRelationship> = self
            .relationships
            .iter()
            .filter(|(other, _)| other.as_str() != kind)
            .filter_map(|(other, row)| row.get(kind).map(|r| (other.clone(), *r)))
            .collect();
        if let Some(row) = self.relationships.get(kind) {
            for (other, relationship) in row {
                if other != kind {
                    partners.insert(other.clone(), *relationship);
                }
            }
        }
        partners
    }

    /// All kind ids mentioned anywhere in the matrix.
    pub fn mentioned_kinds(&self) -> impl Iterator<Item = &KindId> {
        self.relationships
            .iter()
            .flat_map(|(a, row)| std::iter::once(a).chain(row.keys()))
    }
}
