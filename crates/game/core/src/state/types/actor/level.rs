//! Experience and level progression.

use strum::{Display, EnumIter, IntoStaticStr};

/// Attribute the player grows when resolving a level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelUpChoice {
    #[strum(serialize = "constitution")]
    MaxHp,
    #[strum(serialize = "strength")]
    Power,
    #[strum(serialize = "agility")]
    Defense,
}

/// Progression component.
///
/// Experience only ever grows; it is added by the kill-credit path in
/// [`crate::combat`]. The threshold for the next level is
/// `level_up_base + current_level * level_up_factor`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    current_level: u32,
    current_xp: u32,
    level_up_base: u32,
    level_up_factor: u32,
    xp_given: u32,
}

impl Level {
    pub const DEFAULT_LEVEL_UP_FACTOR: u32 = 150;

    pub fn new(level_up_base: u32, level_up_factor: u32, xp_given: u32) -> Self {
        Self {
            current_level: 1,
            current_xp: 0,
            level_up_base,
            level_up_factor,
            xp_given,
        }
    }

    /// Progression for a monster: never levels, rewards `xp_given` on death.
    pub fn reward(xp_given: u32) -> Self {
        Self::new(0, Self::DEFAULT_LEVEL_UP_FACTOR, xp_given)
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn current_xp(&self) -> u32 {
        self.current_xp
    }

    pub fn xp_given(&self) -> u32 {
        self.xp_given
    }

    pub fn experience_to_next_level(&self) -> u32 {
        self.level_up_base + self.current_level * self.level_up_factor
    }

    pub fn requires_level_up(&self) -> bool {
        self.level_up_base > 0 && self.current_xp >= self.experience_to_next_level()
    }

    /// Adds experience and reports whether a level-up is now pending.
    ///
    /// Adding zero leaves the pending flag as it was: a reached threshold stays
    /// reached until [`Level::increase_level`] consumes it.
    pub fn add_xp(&mut self, xp: u32) -> bool {
        if self.level_up_base > 0 {
            self.current_xp = self.current_xp.saturating_add(xp);
        }
        self.requires_level_up()
    }

    /// Consumes one threshold worth of experience and advances the level.
    pub(crate) fn increase_level(&mut self) {
        self.current_xp -= self.experience_to_next_level();
        self.current_level += 1;
    }

    /// Deterministic score derived from level and experience.
    ///
    /// Every level past the first is worth `150 * i` plus a flat 350 bonus,
    /// and reaching level one at all is worth another 350.
    pub fn score(&self) -> u64 {
        let levels: u64 = (0..self.current_level.saturating_sub(1) as u64)
            .map(|i| i * 150 + if i > 0 { 350 } else { 0 })
            .sum();
        let reached = if self.current_level > 0 { 350 } else { 0 };
        levels + self.current_xp as u64 + reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_level() -> Level {
        Level::new(200, Level::DEFAULT_LEVEL_UP_FACTOR, 0)
    }

    #[test]
    fn threshold_grows_with_level() {
        let mut level = player_level();
        assert_eq!(level.experience_to_next_level(), 350);
        level.add_xp(350);
        level.increase_level();
        assert_eq!(level.current_level(), 2);
        assert_eq!(level.current_xp(), 0);
        assert_eq!(level.experience_to_next_level(), 500);
    }

    #[test]
    fn reaching_threshold_stays_pending_until_resolved() {
        let mut level = player_level();
        assert!(!level.add_xp(349));
        assert!(level.add_xp(1));
        assert!(level.add_xp(0));
        assert!(level.requires_level_up());

        level.increase_level();
        assert!(!level.add_xp(0));
    }

    #[test]
    fn monsters_never_accrue_experience() {
        let mut level = Level::reward(25);
        assert!(!level.add_xp(1_000));
        assert_eq!(level.current_xp(), 0);
        assert_eq!(level.xp_given(), 25);
    }

    #[test]
    fn score_accumulates_levels_and_xp() {
        let mut level = player_level();
        assert_eq!(level.score(), 350);

        level.add_xp(360);
        level.increase_level();
        // level 2, 10 xp left: (0) + 10 + 350
        assert_eq!(level.score(), 360);

        level.add_xp(500);
        level.increase_level();
        // level 3, 10 xp left: (0) + (150 + 350) + 10 + 350
        assert_eq!(level.score(), 860);
    }
}
