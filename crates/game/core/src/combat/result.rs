use crate::state::{EntityId, GameState, MessageKind};

use super::damage::{apply_damage, calculate_damage};

/// Summary of one melee exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: EntityId,
    pub target: EntityId,
    pub damage: u32,
    pub killed: bool,
}

/// Resolves a melee attack from `attacker` on `target`, logging the hit.
///
/// Returns `None` if either entity is not an actor on the active map.
pub fn resolve_attack(
    state: &mut GameState,
    attacker: EntityId,
    target: EntityId,
) -> Option<AttackOutcome> {
    let (attacker_name, power) = {
        let entity = state.map.entity(attacker)?;
        (entity.name.clone(), entity.as_actor()?.power())
    };
    let (target_name, defense) = {
        let entity = state.map.entity(target)?;
        (entity.name.clone(), entity.as_actor()?.defense())
    };

    let damage = calculate_damage(power, defense);
    let kind = if attacker.is_player() {
        MessageKind::PlayerAttack
    } else {
        MessageKind::EnemyAttack
    };
    let description = format!("{attacker_name} attacks {target_name}");
    if damage > 0 {
        state
            .messages
            .add(format!("{description} for {damage} hit points."), kind);
    } else {
        state
            .messages
            .add(format!("{description} but does no damage."), kind);
    }

    let result = apply_damage(state, target, damage)?;
    Some(AttackOutcome {
        attacker,
        target,
        damage,
        killed: result.killed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::death::CORPSE_GLYPH;
    use crate::state::{Position, RenderOrder};
    use crate::testing::{Arena, TestContent};

    #[test]
    fn melee_logs_damage_from_power_minus_defense() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 10, 10, Position::new(3, 3));
        let orc = arena.spawn_monster(&content, "orc", Position::new(4, 3));

        // player power 2 vs orc defense 0
        let outcome = resolve_attack(&mut arena.state, EntityId::PLAYER, orc).unwrap();
        assert_eq!(outcome.damage, 2);
        assert!(!outcome.killed);
        assert_eq!(arena.hp(orc), 8);
        assert_eq!(arena.last_message(), "Player attacks Orc for 2 hit points.");

        // orc power 3 vs player defense 1
        resolve_attack(&mut arena.state, orc, EntityId::PLAYER).unwrap();
        assert_eq!(arena.hp(EntityId::PLAYER), 28);
        assert_eq!(
            arena.state.messages.last().unwrap().kind,
            MessageKind::EnemyAttack
        );
    }

    #[test]
    fn weak_attacks_do_no_damage() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 10, 10, Position::new(3, 3));
        let troll = arena.spawn_monster(&content, "troll", Position::new(4, 3));
        arena
            .state
            .player_actor_mut()
            .fighter
            .increase_power(-1);

        let outcome = resolve_attack(&mut arena.state, EntityId::PLAYER, troll).unwrap();
        assert_eq!(outcome.damage, 0);
        assert_eq!(arena.hp(troll), 16);
        assert_eq!(arena.last_message(), "Player attacks Troll but does no damage.");
    }

    #[test]
    fn killing_blow_leaves_corpse_and_grants_xp() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 10, 10, Position::new(3, 3));
        let orc = arena.spawn_monster(&content, "orc", Position::new(4, 3));
        arena.state.player_actor_mut().fighter.increase_power(8);

        let outcome = resolve_attack(&mut arena.state, EntityId::PLAYER, orc).unwrap();
        assert!(outcome.killed);

        let corpse = arena.entity(orc);
        assert_eq!(corpse.name, "remains of Orc");
        assert_eq!(corpse.glyph, CORPSE_GLYPH);
        assert!(!corpse.blocks_movement);
        assert!(!corpse.is_alive());
        assert_eq!(corpse.render_order, RenderOrder::Corpse);
        assert!(arena.state.map.is_passable(Position::new(4, 3)));

        assert_eq!(arena.state.player_actor().level.current_xp(), 35);
        let texts: Vec<_> = arena
            .state
            .messages
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert!(texts.contains(&"Orc is dead!"));
        assert_eq!(arena.last_message(), "You gain 35 experience points.");
    }

    #[test]
    fn corpses_are_not_killed_twice() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 10, 10, Position::new(3, 3));
        let orc = arena.spawn_monster(&content, "orc", Position::new(4, 3));
        arena.state.player_actor_mut().fighter.increase_power(20);

        resolve_attack(&mut arena.state, EntityId::PLAYER, orc).unwrap();
        let xp = arena.state.player_actor().level.current_xp();
        let again = apply_damage(&mut arena.state, orc, 5).unwrap();
        assert!(!again.killed);
        assert_eq!(arena.state.player_actor().level.current_xp(), xp);
    }

    #[test]
    fn reaching_threshold_announces_level() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 10, 10, Position::new(3, 3));
        crate::combat::grant_xp(&mut arena.state, 350);
        assert!(arena.state.player_actor().level.requires_level_up());
        assert_eq!(arena.last_message(), "You advance to level 2!");
    }

    #[test]
    fn player_death_is_announced() {
        let content = TestContent::new();
        let mut arena = Arena::new(&content, 10, 10, Position::new(3, 3));
        apply_damage(&mut arena.state, EntityId::PLAYER, 100).unwrap();
        assert!(!arena.state.is_player_alive());
        assert_eq!(arena.last_message(), "You died!");
        assert_eq!(arena.entity(EntityId::PLAYER).name, "remains of Player");
    }
}
