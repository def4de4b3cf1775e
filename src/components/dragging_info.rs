// src/components/dragging_info.rs

use crate::components::card::Card;
use crate::components::position::Position;
use crate::components::stack::StackType;

/// ドラッグ中のカードに関する情報だよ！🖱️➡️🃏
///
/// マウスを押した瞬間に作られて、離した瞬間 (確定でもキャンセルでも) に捨てられる一時的な状態。
/// `dragged_card` と `dependent_run` は描画用のスナップショットで、
/// 本物のカードはドロップが確定するまで元のスタックに残ったままだよ。
#[derive(Debug, Clone, PartialEq)]
pub struct DraggingInfo {
    /// 掴んだカード。
    pub dragged_card: Card,
    /// 掴んだカードの上に積まれていて、一緒に動くカードたち (場札のときだけ)。
    pub dependent_run: Vec<Card>,
    /// ドラッグ開始前のスタック。
    pub origin_stack: StackType,
    /// ドラッグ開始前の、スタック内での順番 (0 が一番下)。
    pub origin_index: usize,
    /// 掴んだ点とカード左上のずれ。移動中もこのずれを保つ。
    pub pointer_offset: Position,
    /// 掴んだカードの今の描画位置 (左上)。
    pub current: Position,
}

impl DraggingInfo {
    /// 掴んだカードと一緒に動くカード全部の枚数。
    pub fn group_len(&self) -> usize {
        1 + self.dependent_run.len()
    }

    /// 掴んだカードから順に、グループ全体を並べて返すよ。
    pub fn group(&self) -> impl Iterator<Item = &Card> {
        std::iter::once(&self.dragged_card).chain(self.dependent_run.iter())
    }

    /// 描画用: ポインタ位置から掴んだカードの左上を求める。
    pub fn card_origin_for_pointer(&self, pointer: Position) -> Position {
        pointer - self.pointer_offset
    }
}
