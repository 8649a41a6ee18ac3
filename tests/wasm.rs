//! Smoke tests of the JS-facing surface. Run with `wasm-pack test` or
//! `cargo test --target wasm32-unknown-unknown`.

#![cfg(target_arch = "wasm32")]

use goban::api;
use goban::wasm_ready;
use js_sys::Reflect;
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::wasm_bindgen_test;

fn ok<T>(result: Result<T, JsError>) -> T {
    result.unwrap_or_else(|_| panic!("API call failed"))
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).expect("field present")
}

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn play_and_read_state_through_the_wasm_surface() {
    let id = ok(api::new_game(9, 9, 2));

    let reply = ok(api::play_move(id, 3, 3, 1));
    assert_eq!(field(&reply, "accepted").as_bool(), Some(true));
    assert!(field(&reply, "reason").is_null() || field(&reply, "reason").is_undefined());

    let state = ok(api::game_state(id));
    assert_eq!(field(&state, "current_color").as_f64(), Some(2.0));
    assert_eq!(field(&state, "move_count").as_f64(), Some(1.0));

    assert!(api::drop_game(id));
}

#[wasm_bindgen_test]
fn rejections_surface_as_replies_not_errors() {
    let id = ok(api::new_game(5, 5, 2));
    ok(api::play_move(id, 3, 3, 1));

    let reply = ok(api::play_move(id, 3, 3, 2));
    assert_eq!(field(&reply, "accepted").as_bool(), Some(false));
    assert_eq!(
        field(&reply, "reason").as_string().as_deref(),
        Some("occupied")
    );

    assert!(api::drop_game(id));
}

#[wasm_bindgen_test]
fn passing_out_ends_the_game() {
    let id = ok(api::new_game(5, 5, 2));
    ok(api::pass_turn(id, 1));
    ok(api::pass_turn(id, 2));

    let state = ok(api::game_state(id));
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(true));

    let reply = ok(api::play_move(id, 1, 1, 1));
    assert_eq!(
        field(&reply, "reason").as_string().as_deref(),
        Some("game_ended")
    );

    assert!(api::drop_game(id));
}

#[wasm_bindgen_test]
fn invalid_configuration_is_an_error() {
    assert!(api::new_game(0, 9, 2).is_err());
    assert!(api::new_game(9, 9, 1).is_err());
}
