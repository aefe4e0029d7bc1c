//! Round execution and match bookkeeping

use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::chooser::Chooser;
use crate::moves::{Move, Outcome};
use crate::pace::Pacer;
use crate::resolve;

/// Number of history entries retained; the oldest is evicted first.
pub const HISTORY_CAP: usize = 10;

/// Turn state machine
///
/// `Resolving` covers the whole window from move submission to lock
/// release, including the presentation pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum TurnPhase {
    #[default]
    Idle,
    Resolving,
}

/// Scoreboard snapshot
///
/// Holds after every completed round:
/// `round == player_score + opponent_score + draws`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u32,
    pub opponent_score: u32,
    pub draws: u32,
    pub round: u32,
    pub locked: bool,
}

/// One completed round in the history log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub round: u32,
    pub player: Move,
    pub opponent: Move,
    pub outcome: Outcome,
}

/// Result record handed to the presentation layer after each round
///
/// `state` is captured at resolution time, so it reports `locked: true`;
/// the lock is still held while the result animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub player: Move,
    pub opponent: Move,
    pub outcome: Outcome,
    pub state: MatchState,
}

impl RoundRecord {
    /// Commentary line for the result banner
    pub fn summary(&self) -> String {
        match self.outcome {
            Outcome::Win => format!("You won! {} beats {}", self.player, self.opponent),
            Outcome::Lose => format!("You lost! {} beats {}", self.opponent, self.player),
            Outcome::Tie => format!("It's a tie! Both picked {}", self.player),
        }
    }
}

/// One player-versus-house game session
///
/// Owns all match state exclusively; nothing else writes it. Sessions are
/// independent, so several can coexist (one per browser tab, one per test).
pub struct GameSession<C> {
    chooser: C,
    phase: TurnPhase,
    player_score: u32,
    opponent_score: u32,
    draws: u32,
    round: u32,
    history: VecDeque<HistoryEntry>,
}

impl<C: Chooser> GameSession<C> {
    /// Create a fresh session: all counters zero, unlocked, empty history.
    pub fn new(chooser: C) -> Self {
        Self {
            chooser,
            phase: TurnPhase::Idle,
            player_score: 0,
            opponent_score: 0,
            draws: 0,
            round: 0,
            history: VecDeque::with_capacity(HISTORY_CAP),
        }
    }

    /// Whether a round is currently resolving (new input is ignored).
    pub fn is_locked(&self) -> bool {
        self.phase == TurnPhase::Resolving
    }

    /// Scoreboard snapshot.
    pub fn snapshot(&self) -> MatchState {
        MatchState {
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            draws: self.draws,
            round: self.round,
            locked: self.is_locked(),
        }
    }

    /// History log, most recent round first.
    pub fn history(&self) -> &VecDeque<HistoryEntry> {
        &self.history
    }

    /// Start and resolve one round.
    ///
    /// Returns `None` while a previous round is still resolving; rapid
    /// double-clicks and repeated keypresses land here and change nothing.
    /// On success the turn lock is left held; call [`release`] (or use
    /// [`play`]) once the presentation is done.
    ///
    /// [`release`]: GameSession::release
    /// [`play`]: GameSession::play
    pub fn submit(&mut self, player: Move) -> Option<RoundRecord> {
        if self.phase == TurnPhase::Resolving {
            debug!("ignoring {} submitted mid-round", player);
            return None;
        }
        self.phase = TurnPhase::Resolving;

        let opponent = self.chooser.choose();
        let outcome = resolve(player, opponent);
        match outcome {
            Outcome::Win => self.player_score += 1,
            Outcome::Lose => self.opponent_score += 1,
            Outcome::Tie => self.draws += 1,
        }
        self.round += 1;

        self.history.push_front(HistoryEntry {
            round: self.round,
            player,
            opponent,
            outcome,
        });
        self.history.truncate(HISTORY_CAP);

        debug!("round {}: {} vs {} -> {}", self.round, player, opponent, outcome);
        Some(RoundRecord {
            round: self.round,
            player,
            opponent,
            outcome,
            state: self.snapshot(),
        })
    }

    /// Release the turn lock once the presentation is done. Idempotent.
    pub fn release(&mut self) {
        self.phase = TurnPhase::Idle;
    }

    /// Run one full round: resolve, hold the lock across the pacer's
    /// pause, then release.
    ///
    /// The result is final before the pause begins; the suspension only
    /// delays when input re-opens and cannot abort the round.
    pub async fn play<P: Pacer + ?Sized>(
        &mut self,
        player: Move,
        pacer: &P,
    ) -> Option<RoundRecord> {
        let record = self.submit(player)?;
        pacer.pause().await;
        self.release();
        Some(record)
    }

    /// Zero every counter and the history and force the session back to
    /// idle. Callable at any time, including mid-round (clears the lock).
    pub fn reset(&mut self) {
        debug!("session reset at round {}", self.round);
        self.phase = TurnPhase::Idle;
        self.player_score = 0;
        self.opponent_score = 0;
        self.draws = 0;
        self.round = 0;
        self.history.clear();
    }
}
