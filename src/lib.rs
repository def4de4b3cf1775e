// src/lib.rs
//! クロンダイク (ひとり用ソリティア) の操作部分だよ！🃏
//!
//! カードの山の管理、ドラッグ＆ドロップ、置けるかどうかのルール判定、描画データ作りまで。
//! ブラウザ (wasm) からは `GameApp` を使って、ネイティブからは `GameState` を直接使う。

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod logic;
pub mod systems;

pub use app::drag_handler::{DragController, DragOutcome, PressOutcome};
pub use app::game_app::GameApp;
pub use app::renderer::{CardSprite, RenderSnapshot, Renderer, SlotSprite};
pub use board::Board;
pub use config::{EmptyTableauRule, GameConfig, LayoutConfig};
pub use error::{GameError, Result};
pub use game::GameState;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if app::console_logger::init().is_ok() {
        log::info!("Panic hook and console logger set!");
    }
}
