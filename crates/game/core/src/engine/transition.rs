//! Action transition dispatch.

use crate::action::{Action, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Runs a transition through the three-phase pipeline, tagging any error
/// with the phase that produced it.
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}

macro_rules! dispatch_transition {
    ($action:expr, $state:expr, $env:expr, [$($variant:ident),+ $(,)?]) => {{
        let name = $action.name();
        match $action {
            $(
                Action::$variant(transition) => {
                    drive_transition(transition, $state, $env).map_err(ExecuteError::action(name))
                }
            )+
        }
    }};
}

/// Routes an action to its transition.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<(), ExecuteError> {
    dispatch_transition!(
        action,
        state,
        env,
        [Move, Melee, Bump, Wait, Pickup, Drop, Equip, UseItem, TakeStairs]
    )
}
