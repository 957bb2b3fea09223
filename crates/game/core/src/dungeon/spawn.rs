//! Floor-gated weighted tables.
//!
//! Three kinds of table drive population:
//! - [`SpawnTable`]: which templates can appear, with relative weights
//! - [`FloorTable`]: step function for per-room caps
//! - [`ScalingTable`]: monster stat multipliers, highest threshold first

use std::collections::BTreeMap;

use rand::Rng;
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use tracing::warn;

use crate::env::ActorTemplate;
use crate::state::FighterStats;

/// One weighted template in a spawn tier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnEntry {
    pub template: String,
    pub weight: u32,
}

impl SpawnEntry {
    pub fn new(template: impl Into<String>, weight: u32) -> Self {
        Self {
            template: template.into(),
            weight,
        }
    }
}

/// Weighted entries grouped by the first floor they unlock on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpawnTable {
    tiers: BTreeMap<u32, Vec<SpawnEntry>>,
}

impl SpawnTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds entries unlocked from `threshold` on (builder pattern).
    #[must_use]
    pub fn with_tier(mut self, threshold: u32, entries: Vec<SpawnEntry>) -> Self {
        self.tiers.entry(threshold).or_default().extend(entries);
        self
    }

    /// Every template mentioned in any tier.
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.tiers
            .values()
            .flatten()
            .map(|entry| entry.template.as_str())
    }

    /// Flat template→weight mapping for `floor`.
    ///
    /// Tiers with a threshold at or below the floor are merged in ascending
    /// order; a later tier replaces the weight of a template it repeats
    /// instead of adding to it. Templates keep the order they first appear in.
    pub fn weights_at(&self, floor: u32) -> Vec<(&str, u32)> {
        let mut weights: Vec<(&str, u32)> = Vec::new();
        for entry in self.tiers.range(..=floor).flat_map(|(_, tier)| tier) {
            match weights
                .iter_mut()
                .find(|(name, _)| *name == entry.template)
            {
                Some((_, weight)) => *weight = entry.weight,
                None => weights.push((entry.template.as_str(), entry.weight)),
            }
        }
        weights
    }

    /// Draws `count` templates with replacement.
    ///
    /// Returns an empty list when `count` is zero or nothing is unlocked yet.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R, floor: u32, count: usize) -> Vec<&str> {
        if count == 0 {
            return Vec::new();
        }
        let weights = self.weights_at(floor);
        if weights.is_empty() {
            return Vec::new();
        }
        let distribution = match WeightedIndex::new(weights.iter().map(|(_, weight)| *weight)) {
            Ok(distribution) => distribution,
            Err(error) => {
                warn!(floor, %error, "spawn table has no usable weights");
                return Vec::new();
            }
        };
        (0..count)
            .map(|_| weights[distribution.sample(rng)].0)
            .collect()
    }
}

/// Step function from floor to a value: the entry with the highest threshold
/// at or below the floor wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FloorTable {
    steps: Vec<(u32, u32)>,
}

impl FloorTable {
    /// Builds the table; steps are sorted by threshold.
    pub fn new(mut steps: Vec<(u32, u32)>) -> Self {
        steps.sort_by_key(|(threshold, _)| *threshold);
        Self { steps }
    }

    /// Value for `floor`, or 0 below the first threshold.
    pub fn value_at(&self, floor: u32) -> u32 {
        self.steps
            .iter()
            .take_while(|(threshold, _)| *threshold <= floor)
            .last()
            .map_or(0, |(_, value)| *value)
    }
}

/// Monster stat multipliers by floor.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScalingTable {
    steps: Vec<(u32, f32)>,
}

impl ScalingTable {
    /// Builds the table; steps are sorted by descending threshold.
    pub fn new(mut steps: Vec<(u32, f32)>) -> Self {
        steps.sort_by(|a, b| b.0.cmp(&a.0));
        Self { steps }
    }

    /// Multiplier of the highest threshold at or below `floor`, if any.
    pub fn factor_at(&self, floor: u32) -> Option<f32> {
        self.steps
            .iter()
            .find(|(threshold, _)| *threshold <= floor)
            .map(|(_, factor)| *factor)
    }
}

/// Per-floor memo of scaled monster stats, keyed by template id.
///
/// The first instance of a template spawned on a floor fixes its scaled stats;
/// every later instance on the same floor reuses them. A fresh accumulator is
/// used for each floor so scaling always starts from the authored defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScaledTemplates {
    factor: Option<f32>,
    stats: BTreeMap<String, FighterStats>,
}

impl ScaledTemplates {
    pub fn for_floor(scaling: &ScalingTable, floor: u32) -> Self {
        Self {
            factor: scaling.factor_at(floor),
            stats: BTreeMap::new(),
        }
    }

    pub fn factor(&self) -> Option<f32> {
        self.factor
    }

    /// Stats every `def_id` instance on this floor should spawn with.
    pub fn stats_for(&mut self, def_id: &str, template: &ActorTemplate) -> FighterStats {
        let factor = self.factor;
        *self
            .stats
            .entry(def_id.to_owned())
            .or_insert_with(|| match factor {
                Some(factor) => template.stats.scaled(factor),
                None => template.stats,
            })
    }

    /// Number of templates scaled so far on this floor.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
