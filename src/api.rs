//! WASM-facing API surface.
//!
//! Live games sit in a process-global registry keyed by id; each entry is
//! an independent engine instance and the registry lock serializes access
//! to it, so the JS side can drive any number of boards at once.

use crate::game::GameInstance;
use crate::types::{Color, MoveReply, Point};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

static GAMES: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(Registry::default()));

#[derive(Default)]
struct Registry {
    next_id: u32,
    games: HashMap<u32, GameInstance>,
}

fn with_registry<T>(f: impl FnOnce(&mut Registry) -> Result<T, JsError>) -> Result<T, JsError> {
    let mut registry = GAMES
        .lock()
        .map_err(|_| JsError::new("game registry is poisoned"))?;
    f(&mut registry)
}

fn with_game<T>(
    game_id: u32,
    f: impl FnOnce(&mut GameInstance) -> Result<T, JsError>,
) -> Result<T, JsError> {
    with_registry(|registry| {
        let game = registry
            .games
            .get_mut(&game_id)
            .ok_or_else(|| JsError::new("unknown game id"))?;
        f(game)
    })
}

fn parse_color(color: u8) -> Result<Color, JsError> {
    Color::new(color).ok_or_else(|| JsError::new("color values are 1-based"))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Creates a game and returns its id.
#[wasm_bindgen]
pub fn new_game(rows: u8, cols: u8, num_colors: u8) -> Result<u32, JsError> {
    let game = GameInstance::new(rows, cols, num_colors).map_err(|e| JsError::new(&e))?;
    with_registry(|registry| {
        registry.next_id += 1;
        let id = registry.next_id;
        registry.games.insert(id, game);
        Ok(id)
    })
}

/// Plays a stone for `color` at the 1-based point `(x, y)`.
///
/// Rule rejections come back as a normal [`MoveReply`] with `accepted`
/// false; only caller bugs (unknown game, color `0`) become errors.
#[wasm_bindgen]
pub fn play_move(game_id: u32, x: u8, y: u8, color: u8) -> Result<JsValue, JsError> {
    let color = parse_color(color)?;
    let reply = with_game(game_id, |game| {
        Ok(match game.play(Point::new(x, y), color) {
            Ok(outcome) => MoveReply {
                accepted: true,
                reason: None,
                captured: outcome.captured,
                scores: outcome.scores,
            },
            Err(err) => MoveReply::rejected(err),
        })
    })?;
    to_js(&reply)
}

/// Passes the turn for `color`.
#[wasm_bindgen]
pub fn pass_turn(game_id: u32, color: u8) -> Result<JsValue, JsError> {
    let color = parse_color(color)?;
    let reply = with_game(game_id, |game| {
        Ok(match game.pass(color) {
            Ok(()) => MoveReply {
                accepted: true,
                reason: None,
                captured: Vec::new(),
                scores: game.score().totals.clone(),
            },
            Err(err) => MoveReply::rejected(err),
        })
    })?;
    to_js(&reply)
}

/// Full public state of one game.
#[wasm_bindgen]
pub fn game_state(game_id: u32) -> Result<JsValue, JsError> {
    let state = with_game(game_id, |game| Ok(game.to_game_state()))?;
    to_js(&state)
}

/// Restarts a game in place, clearing its position history.
#[wasm_bindgen]
pub fn reset_game(game_id: u32, rows: u8, cols: u8, num_colors: u8) -> Result<(), JsError> {
    with_game(game_id, |game| {
        game.reset(rows, cols, num_colors)
            .map_err(|e| JsError::new(&e))
    })
}

/// Removes a game from the registry. Returns whether it existed.
#[wasm_bindgen]
pub fn drop_game(game_id: u32) -> bool {
    GAMES
        .lock()
        .map(|mut registry| registry.games.remove(&game_id).is_some())
        .unwrap_or(false)
}
