// src/app/layout_calculator.rs
//! Calculates the drawing position of cards in different stacks.
//!
//! ここの関数は全部、副作用なしの計算だけ。カードが「論理的に」どこにあるかは
//! いつも `Board` が正解で、座標はそこから毎回計算し直す投影だよ。

use crate::components::{Position, Rect, Stack, StackType};
use crate::config::layout::{FOUNDATION_FIRST_COLUMN, STOCK_COLUMN, WASTE_COLUMN};
use crate::config::LayoutConfig;

/// スタックタイプとスタック内での順序に基づいて、カードの描画位置 (左上) を計算します。
///
/// - 場札: 列ごとに左から右へ。列の中では `overlap_fraction` × カードの高さずつ下にずらす
/// - 組札・山札・捨て札: 全部ぴったり同じ位置に重ねる (一番上だけが見える)
pub fn calculate_card_position(
    stack_type: StackType,
    position_in_stack: usize,
    layout: &LayoutConfig,
) -> Position {
    match stack_type {
        StackType::Tableau(index) => Position {
            x: layout.column_x(index),
            y: layout.tableau_start_y + layout.tableau_step() * position_in_stack as f32,
        },
        StackType::Foundation(index) => Position {
            x: layout.column_x(FOUNDATION_FIRST_COLUMN + index),
            y: layout.top_row_y,
        },
        StackType::Stock => Position { x: layout.column_x(STOCK_COLUMN), y: layout.top_row_y },
        StackType::Waste => Position { x: layout.column_x(WASTE_COLUMN), y: layout.top_row_y },
    }
}

/// スタックの土台の位置 (空のときの枠の位置)。
pub fn stack_base_position(stack_type: StackType, layout: &LayoutConfig) -> Position {
    calculate_card_position(stack_type, 0, layout)
}

/// スナップ判定の基準点: 一番上のカードの位置。空なら土台の位置。
pub fn snap_anchor(stack: &Stack, layout: &LayoutConfig) -> Position {
    let top_index = stack.len().saturating_sub(1);
    calculate_card_position(stack.stack_type(), top_index, layout)
}

/// 左上がこの位置のカード1枚分の当たり判定矩形。
pub fn card_rect(position: Position, layout: &LayoutConfig) -> Rect {
    Rect::new(position, layout.card_width, layout.card_height)
}
