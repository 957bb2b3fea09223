//! Combat component for actors.
//!
//! A [`Fighter`] keeps its hit points inside `[0, max_hp]` at all times. The
//! death transition itself needs the owning entity (glyph, name, AI), so it
//! lives in [`crate::combat`]; this type only reports when HP reaches zero.

/// Authored combat numbers of an actor template.
///
/// Also kept on every [`Fighter`] as the unscaled snapshot that floor
/// rescaling starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterStats {
    pub max_hp: u32,
    pub power: i32,
    pub defense: i32,
}

impl FighterStats {
    pub const fn new(max_hp: u32, power: i32, defense: i32) -> Self {
        Self {
            max_hp,
            power,
            defense,
        }
    }

    /// Multiplies every stat by `factor`, rounding to the nearest integer.
    ///
    /// Max HP never drops below 1 so a scaled monster is still alive on spawn.
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |value: f32| (value * factor).round();
        Self {
            max_hp: (scale(self.max_hp as f32) as u32).max(1),
            power: scale(self.power as f32) as i32,
            defense: scale(self.defense as f32) as i32,
        }
    }
}

/// Hit points and base attributes of an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    hp: u32,
    max_hp: u32,
    base_power: i32,
    base_defense: i32,
    defaults: FighterStats,
}

impl Fighter {
    /// Creates a fighter at full health from the given stats.
    pub fn new(stats: FighterStats) -> Self {
        Self {
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            base_power: stats.power,
            base_defense: stats.defense,
            defaults: stats,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn base_power(&self) -> i32 {
        self.base_power
    }

    pub fn base_defense(&self) -> i32 {
        self.base_defense
    }

    /// Unscaled stats this fighter was created from.
    pub fn defaults(&self) -> FighterStats {
        self.defaults
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Sets HP, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, value: u32) {
        self.hp = value.min(self.max_hp);
    }

    /// Removes up to `amount` HP and returns how much was actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.set_hp(self.hp.saturating_sub(amount));
        before - self.hp
    }

    /// Restores up to `amount` HP and returns how much was actually recovered.
    ///
    /// Never exceeds the current deficit; a fighter at full health recovers 0.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.hp == self.max_hp {
            return 0;
        }
        let before = self.hp;
        self.set_hp(self.hp.saturating_add(amount));
        self.hp - before
    }

    /// Replaces the current stats with `stats` and refills HP.
    ///
    /// The default snapshot is left untouched so rescaling is never cumulative.
    pub fn rescale(&mut self, stats: FighterStats) {
        self.max_hp = stats.max_hp;
        self.hp = stats.max_hp;
        self.base_power = stats.power;
        self.base_defense = stats.defense;
    }

    pub fn increase_max_hp(&mut self, amount: u32) {
        self.max_hp += amount;
        self.hp += amount;
    }

    pub fn increase_power(&mut self, amount: i32) {
        self.base_power += amount;
    }

    pub fn increase_defense(&mut self, amount: i32) {
        self.base_defense += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fighter(max_hp: u32) -> Fighter {
        Fighter::new(FighterStats::new(max_hp, 3, 1))
    }

    #[test]
    fn overkill_damage_clamps_to_zero() {
        let mut f = fighter(10);
        assert_eq!(f.take_damage(15), 10);
        assert_eq!(f.hp(), 0);
        assert!(f.is_dead());
    }

    #[test]
    fn heal_at_full_health_recovers_nothing() {
        let mut f = fighter(10);
        assert_eq!(f.heal(5), 0);
        assert_eq!(f.hp(), 10);
    }

    #[test]
    fn heal_is_capped_by_deficit() {
        let mut f = fighter(10);
        f.take_damage(3);
        assert_eq!(f.heal(10), 3);
        assert_eq!(f.hp(), 10);

        f.take_damage(6);
        assert_eq!(f.heal(2), 2);
        assert_eq!(f.hp(), 6);
    }

    #[test]
    fn rescale_starts_from_defaults() {
        let mut f = Fighter::new(FighterStats::new(10, 3, 0));
        let scaled = f.defaults().scaled(1.5);
        f.rescale(scaled);
        f.rescale(f.defaults().scaled(1.5));
        assert_eq!(f.max_hp(), 15);
        assert_eq!(f.hp(), 15);
        assert_eq!(f.base_power(), 5);
        assert_eq!(f.defaults(), FighterStats::new(10, 3, 0));
    }

    #[test]
    fn scaling_keeps_at_least_one_hp() {
        let stats = FighterStats::new(2, 1, 0).scaled(0.25);
        assert_eq!(stats.max_hp, 1);
    }

    #[derive(Clone, Debug)]
    enum HpOp {
        Damage(u32),
        Heal(u32),
    }

    fn hp_op() -> impl Strategy<Value = HpOp> {
        prop_oneof![
            (0u32..50).prop_map(HpOp::Damage),
            (0u32..50).prop_map(HpOp::Heal),
        ]
    }

    proptest! {
        #[test]
        fn hp_stays_within_bounds(max_hp in 1u32..100, ops in prop::collection::vec(hp_op(), 0..64)) {
            let mut f = fighter(max_hp);
            for op in ops {
                match op {
                    HpOp::Damage(amount) => {
                        let before = f.hp();
                        let lost = f.take_damage(amount);
                        prop_assert_eq!(lost, amount.min(before));
                    }
                    HpOp::Heal(amount) => {
                        let deficit = f.max_hp() - f.hp();
                        let recovered = f.heal(amount);
                        prop_assert_eq!(recovered, amount.min(deficit));
                    }
                }
                prop_assert!(f.hp() <= f.max_hp());
            }
        }
    }
}
