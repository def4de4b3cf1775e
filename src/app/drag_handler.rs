// src/app/drag_handler.rs
//! Handles card dragging logic (start, update, end).
//!
//! 状態は `Idle` (session が None) と `Dragging` (session が Some) の2つだけ。
//! 離したときに「確定 (Committed)」か「キャンセル (Cancelled)」のどちらかになって、
//! どっちでも session は捨てられて `Idle` に戻るよ。

use log::{debug, info, warn};

use super::drag_apply_handler::{self, MoveReport};
use super::event_handler::{self, ClickTarget};
use super::layout_calculator::{calculate_card_position, snap_anchor};
use crate::board::Board;
use crate::components::{Card, DraggingInfo, Position, StackType};
use crate::config::GameConfig;
use crate::error::Result;

/// マウスを押したときに何が起きたか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// カード (とその上の列) を掴んだ。
    DragStarted { stack_type: StackType, index: usize },
    /// 山札の場所が押された。山札をめくる/戻すのは呼ぶ側の仕事。
    StockClicked,
    /// 何も起きなかった (背景、裏向きカード、ドラッグ中の二重押しなど)。
    Ignored,
}

/// マウスを離したときの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// 近くに置ける場所があって、移動が確定した。
    Committed(MoveReport),
    /// 置ける場所がなかったので元に戻した。盤面は何も変わってない。
    Cancelled { origin: StackType },
    /// そもそもドラッグしてなかった。
    NotDragging,
}

/// ドラッグ＆ドロップの状態機械だよ！🖱️
#[derive(Debug, Default, Clone)]
pub struct DragController {
    session: Option<DraggingInfo>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// 今のドラッグ情報 (ドラッグ中じゃなければ None)。
    pub fn session(&self) -> Option<&DraggingInfo> {
        self.session.as_ref()
    }

    /// ドラッグ開始時の処理。
    ///
    /// 一番手前の表向きカードを掴む。場札なら、その上に積まれたカードも一緒に動く列になる。
    /// 掴んだ点とカード左上のずれを覚えておいて、動かしている間もそのずれを保つよ。
    pub fn press(&mut self, board: &Board, config: &GameConfig, pointer: Position) -> Result<PressOutcome> {
        if self.session.is_some() {
            debug!("press at {:?} ignored: already dragging", pointer);
            return Ok(PressOutcome::Ignored);
        }
        let layout = &config.layout;

        if let Some(ClickTarget::Card { stack_type, index }) =
            event_handler::find_topmost_face_up_card(board, layout, pointer)
        {
            let cards = board.stack(stack_type)?.cards();
            let is_top = index + 1 == cards.len();
            // 場札以外 (捨て札・組札) は一番上の1枚しか動かせない
            if !matches!(stack_type, StackType::Tableau(_)) && !is_top {
                return Ok(PressOutcome::Ignored);
            }
            let Some((dragged_card, dependent_run)) = cards[index..].split_first() else {
                return Ok(PressOutcome::Ignored);
            };

            let card_position = calculate_card_position(stack_type, index, layout);
            info!(
                "Drag start: {} (+{} card(s)) from {:?}[{}]",
                dragged_card,
                dependent_run.len(),
                stack_type,
                index
            );
            self.session = Some(DraggingInfo {
                dragged_card: dragged_card.clone(),
                dependent_run: dependent_run.to_vec(),
                origin_stack: stack_type,
                origin_index: index,
                pointer_offset: pointer - card_position,
                current: card_position,
            });
            return Ok(PressOutcome::DragStarted { stack_type, index });
        }

        match event_handler::find_clicked_element(board, layout, pointer) {
            Some(ClickTarget::Stack(StackType::Stock)) => Ok(PressOutcome::StockClicked),
            _ => Ok(PressOutcome::Ignored),
        }
    }

    /// ドラッグ中の位置更新。ルールチェックはしない (見た目だけ)。
    /// ドラッグ中じゃなければ false。
    pub fn drag_to(&mut self, pointer: Position) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.current = session.card_origin_for_pointer(pointer);
                true
            }
            None => false,
        }
    }

    /// ドラッグ終了時の処理。
    ///
    /// 近くに置ける場所があればそこへ移動を確定、なければキャンセル。
    /// どっちの場合も session は捨てられて、選択のハイライトも消えるよ。
    pub fn release(&mut self, board: &mut Board, config: &GameConfig, pointer: Position) -> Result<DragOutcome> {
        let Some(mut session) = self.session.take() else {
            return Ok(DragOutcome::NotDragging);
        };
        session.current = session.card_origin_for_pointer(pointer);

        // 掴んでいる間に元のスタックが変わっていたら、そのまま動かすと別のカードまで運んじゃう
        let origin_cards = board.stack(session.origin_stack)?.cards();
        let unchanged = origin_cards.len() == session.origin_index + session.group_len()
            && origin_cards[session.origin_index..].iter().eq(session.group());
        if !unchanged {
            warn!(
                "Drag cancelled: {:?} changed while {} was held",
                session.origin_stack, session.dragged_card
            );
            return Ok(DragOutcome::Cancelled { origin: session.origin_stack });
        }

        match find_snap_target(board, config, &session) {
            Some(target) => {
                let report = drag_apply_handler::apply_move(
                    board,
                    session.origin_stack,
                    session.origin_index,
                    target,
                )?;
                Ok(DragOutcome::Committed(report))
            }
            None => {
                info!("Drag cancelled: {} returns to {:?}", session.dragged_card, session.origin_stack);
                Ok(DragOutcome::Cancelled { origin: session.origin_stack })
            }
        }
    }

    /// ドラッグを途中でやめる。盤面には触らない。
    pub fn cancel(&mut self) -> Option<DraggingInfo> {
        self.session.take()
    }
}

/// スナップ先を探す。
///
/// 移動元以外の全スタックについて、一番上のカードの位置 (空なら土台) と
/// 掴んだカードの今の位置の距離を測る。`snap_distance` 以内で、列ごと置けるものの中から
/// 一番近いものを選ぶよ。同じ距離ならスタックの走査順で先のもの。
pub fn find_snap_target(board: &Board, config: &GameConfig, session: &DraggingInfo) -> Option<StackType> {
    let layout = &config.layout;
    let group: Vec<Card> = session.group().cloned().collect();

    board
        .stacks()
        .iter()
        .filter(|stack| stack.stack_type() != session.origin_stack)
        .filter_map(|stack| {
            let distance = snap_anchor(stack, layout).distance_to(session.current);
            (distance <= layout.snap_distance).then_some((stack, distance))
        })
        .filter(|(stack, _)| stack.can_accept_run(&group, config.empty_tableau_rule))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(stack, distance)| {
            debug!("Snap target {:?} at distance {:.1}", stack.stack_type(), distance);
            stack.stack_type()
        })
}

/// ドラッグ中のグループ全体の描画位置を計算する。
///
/// 掴んだカードは `session.current`、上に積まれたカードは元の列での段差をそのまま保つよ。
pub fn dragged_group_positions(session: &DraggingInfo, config: &GameConfig) -> Vec<Position> {
    let layout = &config.layout;
    let origin = calculate_card_position(session.origin_stack, session.origin_index, layout);
    (0..session.group_len())
        .map(|k| {
            let resting = calculate_card_position(session.origin_stack, session.origin_index + k, layout);
            session.current + (resting - origin)
        })
        .collect()
}

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;
