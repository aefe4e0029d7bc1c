//! Core game logic for Throwdown
//!
//! Round resolution for a browser rock-paper-scissors game: the player
//! submits a move, the session draws a random counter-move, resolves the
//! outcome, and keeps the score and a short history. This crate is
//! compiled to:
//! - Native (for tests and embedding hosts)
//! - WASM (for the browser frontend)
//!
//! Rendering, animation, and raw input events stay in the frontend; only
//! validated moves cross into this crate.

mod chooser;
mod moves;
mod pace;
mod random;
mod session;
mod theme;

#[cfg(feature = "wasm")]
mod wasm;

pub use chooser::{Chooser, RandomChooser};
pub use moves::{Move, Outcome, ParseMoveError};
pub use pace::{NoDelay, Pacer};
pub use random::SessionRng;
pub use session::{GameSession, HistoryEntry, MatchState, RoundRecord, HISTORY_CAP};
pub use theme::{MemoryStore, ParseThemeError, Theme, ThemeStore, THEME_KEY};

/// Outcome table for one round, from the player's perspective.
pub fn resolve(player: Move, opponent: Move) -> Outcome {
    if player == opponent {
        Outcome::Tie
    } else if player.beats() == opponent {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
