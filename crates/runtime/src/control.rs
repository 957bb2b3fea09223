//! Outer-loop control values.
//!
//! Menu navigation leaves a running game through one of these variants rather
//! than unwinding; the loop that owns the session decides what each one does
//! to the save file via [`crate::GameSession::conclude`].

/// What the outer loop should do after handling one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopControl {
    /// Keep playing.
    Continue,
    /// Suspend the game and show the main menu. A live game is saved.
    ReturnToMenu,
    /// Drop the current game and start over from the main menu.
    Restart,
    /// Exit the process without writing the save.
    QuitWithoutSaving,
}

impl LoopControl {
    /// Whether the current game should be written to the save before leaving.
    pub fn saves_game(self) -> bool {
        matches!(self, Self::ReturnToMenu)
    }

    pub fn leaves_game(self) -> bool {
        !matches!(self, Self::Continue)
    }
}
