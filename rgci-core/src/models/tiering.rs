//! Ordered partition of node indices into contiguous tiers.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_TIERS;
use crate::errors::SynthError;

/// Tiers `T_0 … T_{k-1}`, each a contiguous run of node indices.
///
/// Construction guarantees at least three non-empty tiers covering
/// `0..node_count` in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")]
pub struct Tiering {
    tiers: Vec<Vec<usize>>,
}

impl Tiering {
    /// Lay out `sizes.iter().sum()` nodes tier by tier, e.g. `[1, 2, 1]`
    /// gives `[[0], [1, 2], [3]]`.
    pub fn from_sizes(sizes: &[usize]) -> Result<Self, SynthError> {
        validate_sizes(sizes)?;
        let mut next = 0;
        let tiers = sizes
            .iter()
            .map(|&size| {
                let tier: Vec<usize> = (next..next + size).collect();
                next += size;
                tier
            })
            .collect();
        Ok(Self { tiers })
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn tiers(&self) -> &[Vec<usize>] {
        &self.tiers
    }

    pub fn tier(&self, index: usize) -> Option<&[usize]> {
        self.tiers.get(index).map(Vec::as_slice)
    }

    pub fn first(&self) -> &[usize] {
        &self.tiers[0]
    }

    pub fn last(&self) -> &[usize] {
        &self.tiers[self.tiers.len() - 1]
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.tiers.iter().map(Vec::len).collect()
    }

    pub fn node_count(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    /// All nodes in tier order, which is also ascending index order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.tiers.iter().flatten().copied()
    }

    /// Tier index holding `node`, if any.
    pub fn tier_of(&self, node: usize) -> Option<usize> {
        self.tiers.iter().position(|tier| tier.contains(&node))
    }
}

fn validate_sizes(sizes: &[usize]) -> Result<(), SynthError> {
    if sizes.len() < MIN_TIERS {
        return Err(SynthError::TooFewTiers {
            count: sizes.len(),
            min: MIN_TIERS,
        });
    }
    if let Some(tier) = sizes.iter().position(|&size| size == 0) {
        return Err(SynthError::EmptyTier { tier });
    }
    Ok(())
}

impl TryFrom<Vec<Vec<usize>>> for Tiering {
    type Error = SynthError;

    fn try_from(tiers: Vec<Vec<usize>>) -> Result<Self, Self::Error> {
        let sizes: Vec<usize> = tiers.iter().map(Vec::len).collect();
        let expected = Self::from_sizes(&sizes)?;
        if expected.tiers != tiers {
            return Err(SynthError::DimensionMismatch {
                what: "contiguous tier layout",
                expected: expected.node_count(),
                actual: tiers.iter().flatten().count(),
            });
        }
        Ok(expected)
    }
}

impl From<Tiering> for Vec<Vec<usize>> {
    fn from(tiering: Tiering) -> Self {
        tiering.tiers
    }
}
