//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::{Card, Suit, ALL_SUITS};

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Heart ❤️, 1: Diamond ♦️, 2: Club ♣️, 3: Spade ♠️
pub fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    ALL_SUITS.get(usize::from(foundation_index)).copied()
}

/// `lower` のすぐ上に `upper` を積めるか (色違いで、ランクがちょうど1つ下)。
pub(crate) fn is_alternating_step(lower: &Card, upper: &Card) -> bool {
    lower.color() != upper.color() && upper.rank().value() + 1 == lower.rank().value()
}
