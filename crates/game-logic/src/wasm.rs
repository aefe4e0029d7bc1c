//! WASM bindings for the browser frontend

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::chooser::RandomChooser;
use crate::moves::Move;
use crate::session::{GameSession, RoundRecord};
use crate::theme::{Theme, THEME_KEY};

/// One game session for one browser tab
#[wasm_bindgen]
pub struct Game {
    session: GameSession<RandomChooser>,
}

#[wasm_bindgen]
impl Game {
    /// Create a session from a 32-byte seed
    ///
    /// The frontend passes `crypto.getRandomValues` output; replaying the
    /// same seed replays the same opponent sequence.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: &[u8]) -> Result<Game, JsError> {
        let seed: [u8; 32] = seed
            .try_into()
            .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))?;

        Ok(Game {
            session: GameSession::new(RandomChooser::new(&seed)),
        })
    }

    /// Play the move named by `raw` (a button id or typed text)
    ///
    /// Returns the round record, or `null` while a previous round is still
    /// resolving (double-clicks are ignored, not errors). Text that names
    /// no move is an error; it never reaches the resolver.
    pub fn submit(&mut self, raw: &str) -> Result<JsValue, JsError> {
        let mv: Move = raw
            .parse()
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        self.submit_move(mv)
    }

    /// Play the move on a number key ("1" rock, "2" paper, "3" scissors)
    pub fn submit_key(&mut self, key: u8) -> Result<JsValue, JsError> {
        let mv = Move::from_index(key)
            .ok_or_else(|| JsError::new(&format!("No move on key {}", key)))?;
        self.submit_move(mv)
    }

    /// Re-enable input once the result animation is done
    pub fn release(&mut self) {
        self.session.release();
    }

    /// Zero the scoreboard and the history
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Whether a round is currently resolving
    pub fn is_locked(&self) -> bool {
        self.session.is_locked()
    }

    /// Current scoreboard snapshot
    pub fn state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.session.snapshot())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// History log, most recent round first
    pub fn history(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.session.history())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    fn submit_move(&mut self, mv: Move) -> Result<JsValue, JsError> {
        match self.session.submit(mv) {
            None => Ok(JsValue::NULL),
            Some(record) => serde_wasm_bindgen::to_value(&record)
                .map_err(|e| JsError::new(&format!("Serialization error: {}", e))),
        }
    }
}

#[derive(serde::Serialize)]
struct MoveInfo {
    id: String,
    label: String,
    key: u8,
    beats: String,
}

/// Catalog of moves for rendering the buttons
///
/// Each entry carries the move id, its display label, the number key bound
/// to it, and the id of the move it defeats.
#[wasm_bindgen]
pub fn move_catalog() -> Result<JsValue, JsError> {
    let catalog: Vec<MoveInfo> = Move::ALL
        .iter()
        .enumerate()
        .map(|(i, m)| MoveInfo {
            id: m.label().to_string(),
            label: m.label().to_string(),
            key: i as u8 + 1,
            beats: m.beats().label().to_string(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&catalog)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Commentary line for a round record ("You won! rock beats scissors")
///
/// Takes the JSON form of a record previously returned by `submit`.
#[wasm_bindgen]
pub fn describe_round(record_json: &str) -> Result<String, JsError> {
    let record: RoundRecord = serde_json::from_str(record_json)
        .map_err(|e| JsError::new(&format!("Invalid round record: {}", e)))?;

    Ok(record.summary())
}

/// Storage key the frontend uses for the saved theme
#[wasm_bindgen]
pub fn theme_storage_key() -> String {
    THEME_KEY.to_string()
}

/// Resolve a raw stored theme value to a palette name
///
/// Anything missing or unrecognized (a cleared or corrupted preference)
/// falls back to the default palette.
#[wasm_bindgen]
pub fn load_theme(raw: Option<String>) -> String {
    raw.and_then(|s| s.parse::<Theme>().ok())
        .unwrap_or_default()
        .as_str()
        .to_string()
}

/// Validate a theme name before saving ("day" | "dark")
///
/// Returns the canonical stored form, or an error for unknown names.
#[wasm_bindgen]
pub fn save_theme(raw: &str) -> Result<String, JsError> {
    let theme: Theme = raw
        .parse()
        .map_err(|e| JsError::new(&format!("{}", e)))?;

    Ok(theme.as_str().to_string())
}
