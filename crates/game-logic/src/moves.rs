//! Move catalog and outcome vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A move in rock-paper-scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// Outcome of a round, always from the player's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Move {
    /// Every move, in catalog order (also the frontend's button order).
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The one move this move defeats.
    ///
    /// The dominance relation is a single 3-cycle: each move beats exactly
    /// one other move and is beaten by exactly one.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Display label for the scoreboard and commentary line.
    pub fn label(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Map a 1-based index to a move (number keys "1"/"2"/"3").
    pub fn from_index(index: u8) -> Option<Move> {
        match index {
            1 => Some(Move::Rock),
            2 => Some(Move::Paper),
            3 => Some(Move::Scissors),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when raw player input does not name a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMoveError {
    input: String,
}

impl ParseMoveError {
    /// The rejected input, as received.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized move {:?}", self.input)
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse free text into a move: trimmed, case-insensitive.
    ///
    /// `"scissor"` is accepted alongside `"scissors"`: the original
    /// frontend prompted for the singular form and players type both.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" | "scissor" => Ok(Move::Scissors),
            _ => Err(ParseMoveError { input: s.to_string() }),
        }
    }
}

impl Outcome {
    /// The same round seen from the opponent's side (ties stay ties).
    pub fn reversed(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Tie => "tie",
        })
    }
}
