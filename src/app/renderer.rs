// src/app/renderer.rs
//! GameApp の描画関連ロジック。
//!
//! 描画は2段階: まず `GameState` から描くものの一覧 (`RenderSnapshot`) を作って、
//! それを `Renderer` トレイトを実装したもの (Canvas とか、テスト用の記録係とか) に渡すよ。

use log::warn;
use serde::Serialize;
use web_sys::CanvasRenderingContext2d;

use super::drag_handler::dragged_group_positions;
use super::layout_calculator::{calculate_card_position, stack_base_position};
use crate::components::{Card, CardColor, GameStatus, StackType};
use crate::config::layout::{BACKGROUND_COLOR, BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::GameState;

const SLOT_COLOR: &str = "#0e7a2c";
const SLOT_BORDER_COLOR: &str = "#c8e6c9";
const CARD_FACE_COLOR: &str = "#ffffff";
const CARD_BORDER_COLOR: &str = "#333333";
const RED_SUIT_COLOR: &str = "#c62828";
const BLACK_SUIT_COLOR: &str = "#212121";
const SELECTED_BORDER_COLOR: &str = "#ff0000";
const LABEL_FONT: &str = "16px sans-serif";

/// カード1枚分の描画情報。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSprite {
    /// 画像のパス (`Card::image_path`)。JS 側で画像を使うならこれを見てね。
    pub image_key: String,
    /// 表向きなら "Q♥" みたいな短い表記。裏向きなら空。
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub face_up: bool,
    /// ドラッグ中のカード (赤枠で囲む)。
    pub selected: bool,
    pub red: bool,
}

/// スタックの土台 (空のときに見える枠)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotSprite {
    pub stack_type: StackType,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// 1フレーム分の描画データ。`cards` は奥から手前の順番。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub slots: Vec<SlotSprite>,
    pub cards: Vec<CardSprite>,
    pub status: GameStatus,
}

/// 描画先の抽象化だよ。
pub trait Renderer {
    fn clear(&mut self, background: &str, width: f32, height: f32);
    fn draw_slot(&mut self, slot: &SlotSprite);
    fn draw_card(&mut self, sprite: &CardSprite);
}

fn card_sprite(card: &Card, x: f32, y: f32, width: f32, height: f32, selected: bool) -> CardSprite {
    CardSprite {
        image_key: card.image_path(),
        label: if card.is_face_up() { card.to_string() } else { String::new() },
        x,
        y,
        width,
        height,
        face_up: card.is_face_up(),
        selected,
        red: card.color() == CardColor::Red,
    }
}

/// `GameState` から描画データを作る。
///
/// - 場札は全部のカードを段差つきで並べる
/// - 組札・山札・捨て札はぴったり重なっているので一番上の1枚だけ
/// - ドラッグ中のカードは元の場所からは消えて、最後 (一番手前) に描く
pub fn build_render_snapshot(state: &GameState) -> RenderSnapshot {
    let layout = &state.config().layout;
    let session = state.drag_session();
    let (width, height) = (layout.card_width, layout.card_height);

    let mut slots = Vec::new();
    let mut cards = Vec::new();

    for stack in state.board().stacks() {
        let stack_type = stack.stack_type();
        let base = stack_base_position(stack_type, layout);
        slots.push(SlotSprite { stack_type, x: base.x, y: base.y, width, height });

        // ドラッグ中なら、掴んだカードから上は元の場所に描かない
        let visible = match session {
            Some(s) if s.origin_stack == stack_type => &stack.cards()[..s.origin_index.min(stack.len())],
            _ => stack.cards(),
        };

        let first = match stack_type {
            StackType::Tableau(_) => 0,
            _ => visible.len().saturating_sub(1),
        };
        for (index, card) in visible.iter().enumerate().skip(first) {
            let pos = calculate_card_position(stack_type, index, layout);
            cards.push(card_sprite(card, pos.x, pos.y, width, height, false));
        }
    }

    if let Some(session) = session {
        let positions = dragged_group_positions(session, state.config());
        for (k, (card, pos)) in session.group().zip(positions).enumerate() {
            cards.push(card_sprite(card, pos.x, pos.y, width, height, k == 0));
        }
    }

    RenderSnapshot {
        width: BOARD_WIDTH,
        height: BOARD_HEIGHT,
        background: BACKGROUND_COLOR.to_string(),
        slots,
        cards,
        status: state.status(),
    }
}

/// 背景 → 空き枠 → カード (奥から手前) の順に描く。
pub fn render_game<R: Renderer + ?Sized>(snapshot: &RenderSnapshot, renderer: &mut R) {
    renderer.clear(&snapshot.background, snapshot.width, snapshot.height);
    for slot in &snapshot.slots {
        renderer.draw_slot(slot);
    }
    for sprite in &snapshot.cards {
        renderer.draw_card(sprite);
    }
}

/// HTML の Canvas に描くレンダラー。画像は読み込まず、四角形と文字だけで描くよ。
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, background: &str, width: f32, height: f32) {
        let (w, h) = (f64::from(width), f64::from(height));
        self.context.clear_rect(0.0, 0.0, w, h);
        self.context.set_fill_style_str(background);
        self.context.fill_rect(0.0, 0.0, w, h);
    }

    fn draw_slot(&mut self, slot: &SlotSprite) {
        let (x, y) = (f64::from(slot.x), f64::from(slot.y));
        let (w, h) = (f64::from(slot.width), f64::from(slot.height));
        self.context.set_fill_style_str(SLOT_COLOR);
        self.context.fill_rect(x, y, w, h);
        self.context.set_line_width(1.0);
        self.context.set_stroke_style_str(SLOT_BORDER_COLOR);
        self.context.stroke_rect(x, y, w, h);
    }

    fn draw_card(&mut self, sprite: &CardSprite) {
        let (x, y) = (f64::from(sprite.x), f64::from(sprite.y));
        let (w, h) = (f64::from(sprite.width), f64::from(sprite.height));

        if sprite.face_up {
            self.context.set_fill_style_str(CARD_FACE_COLOR);
            self.context.fill_rect(x, y, w, h);
            let text_color = if sprite.red { RED_SUIT_COLOR } else { BLACK_SUIT_COLOR };
            self.context.set_fill_style_str(text_color);
            self.context.set_font(LABEL_FONT);
            if let Err(e) = self.context.fill_text(&sprite.label, x + 6.0, y + 20.0) {
                warn!("CanvasRenderer: fill_text failed for {}: {:?}", sprite.label, e);
            }
        } else {
            self.context.set_fill_style_str(SLOT_COLOR);
            self.context.fill_rect(x, y, w, h);
        }

        if sprite.selected {
            self.context.set_line_width(3.0);
            self.context.set_stroke_style_str(SELECTED_BORDER_COLOR);
        } else {
            self.context.set_line_width(1.0);
            self.context.set_stroke_style_str(CARD_BORDER_COLOR);
        }
        self.context.stroke_rect(x, y, w, h);
    }
}
