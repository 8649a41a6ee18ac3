//! Go rules engine: group analysis, capture resolution, ko tracking, and
//! area scoring behind a WASM-friendly surface. Board rendering and input
//! handling belong to the embedding presentation layer.

use wasm_bindgen::prelude::*;

pub mod analysis;
pub mod api;
pub mod board;
pub mod game;
pub mod history;
pub mod rules;
pub mod score;
pub mod types;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
