// src/app/game_app.rs
//! JavaScript から使う窓口 (`GameApp`) だよ！🌉
//!
//! JS 側はキャンバスのマウスイベントの座標をそのまま渡して、あとは `render` を呼ぶだけ。
//! ゲームの中身は全部 `GameState` が持ってるよ。

use js_sys::Error;
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::drag_handler::{DragOutcome, PressOutcome};
use super::renderer::{self, CanvasRenderer};
use crate::components::{GameStatus, Position};
use crate::config::layout::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::GameState;

fn to_js_error(e: GameError) -> JsValue {
    JsValue::from(Error::new(&e.to_string()))
}

/// id からキャンバスを探して、2D コンテキストを取り出す。
fn initialize_canvas(canvas_id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from(Error::new("document is not available")))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from(Error::new(&format!("canvas #{} not found", canvas_id))))?
        .dyn_into::<HtmlCanvasElement>()?;
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from(Error::new("2d context is not available")))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    canvas.set_width(BOARD_WIDTH as u32);
    canvas.set_height(BOARD_HEIGHT as u32);
    Ok((canvas, context))
}

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct GameApp {
    state: GameState,
    renderer: CanvasRenderer,
}

impl GameApp {
    fn create(canvas_id: &str, config: GameConfig) -> Result<GameApp, JsValue> {
        info!("GameApp: initializing on canvas #{}", canvas_id);
        let (_canvas, context) = initialize_canvas(canvas_id)?;
        let state = GameState::new(config).map_err(to_js_error)?;
        let mut app = GameApp { state, renderer: CanvasRenderer::new(context) };
        app.render();
        Ok(app)
    }
}

#[wasm_bindgen]
impl GameApp {
    /// デフォルト設定でゲームを始める。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<GameApp, JsValue> {
        Self::create(canvas_id, GameConfig::default())
    }

    /// JSON の設定 (省略したところはデフォルト) でゲームを始める。
    pub fn new_with_config(canvas_id: &str, config_json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json).map_err(to_js_error)?;
        Self::create(canvas_id, config)
    }

    /// 同じ設定で配り直す。
    pub fn new_game(&mut self) -> Result<(), JsValue> {
        self.state.new_game().map_err(to_js_error)?;
        self.render();
        Ok(())
    }

    /// mousedown。カードを掴んだか山札を触ったら true (再描画した)。
    pub fn handle_mouse_down(&mut self, x: f32, y: f32) -> Result<bool, JsValue> {
        let outcome = self.state.press(Position::new(x, y)).map_err(|e| {
            error!("GameApp: mouse down failed: {}", e);
            to_js_error(e)
        })?;
        let changed = outcome != PressOutcome::Ignored;
        if changed {
            self.render();
        }
        Ok(changed)
    }

    /// mousemove。ドラッグ中なら true (再描画した)。
    pub fn handle_mouse_move(&mut self, x: f32, y: f32) -> bool {
        let moved = self.state.drag_to(Position::new(x, y));
        if moved {
            self.render();
        }
        moved
    }

    /// mouseup。移動が確定したら true。
    pub fn handle_mouse_up(&mut self, x: f32, y: f32) -> Result<bool, JsValue> {
        let result = self.state.release(Position::new(x, y));
        // 失敗しても session は消えてるので、元の位置で描き直す
        self.render();
        match result {
            Ok(DragOutcome::Committed(report)) => {
                info!("GameApp: moved {} card(s) {:?} -> {:?}", report.moved, report.from, report.to);
                Ok(true)
            }
            Ok(DragOutcome::Cancelled { .. } | DragOutcome::NotDragging) => Ok(false),
            Err(e) => {
                error!("GameApp: mouse up failed: {}", e);
                Err(to_js_error(e))
            }
        }
    }

    /// mouseleave。ドラッグ中ならキャンセルしてカードを元の場所に描き直す。
    pub fn handle_mouse_leave(&mut self) -> bool {
        let cancelled = self.state.cancel_drag().is_some();
        if cancelled {
            info!("GameApp: pointer left the canvas, drag cancelled");
            self.render();
        }
        cancelled
    }

    /// dblclick。組札へ自動で送れたら true。
    pub fn handle_double_click(&mut self, x: f32, y: f32) -> Result<bool, JsValue> {
        let moved = self
            .state
            .double_click(Position::new(x, y))
            .map_err(to_js_error)?
            .is_some();
        if moved {
            self.render();
        }
        Ok(moved)
    }

    /// キャンバスに今の状態を描く。
    pub fn render(&mut self) {
        let snapshot = self.state.render_snapshot();
        renderer::render_game(&snapshot, &mut self.renderer);
    }

    /// 描画データを JSON で返す (JS 側で画像を使って描きたいとき用)。
    pub fn get_render_snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.render_snapshot())
            .map_err(|e| JsValue::from(Error::new(&format!("Failed to serialize snapshot: {}", e))))
    }

    pub fn is_won(&self) -> bool {
        self.state.status() == GameStatus::Won
    }
}
