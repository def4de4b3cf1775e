//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::get_foundation_suit;
use crate::components::card::{Card, Rank};

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// - スートがその組札のスートと一致すること
/// - 空なら Ace だけ
/// - そうでなければ一番上のカードよりランクがちょうど1つ上
pub fn can_move_to_foundation(
    target_foundation_index: u8,
    target_top: Option<&Card>,
    card_to_move: &Card,
) -> bool {
    let Some(target_suit) = get_foundation_suit(target_foundation_index) else {
        debug!("[Foundation Rule] Invalid Foundation index: {}", target_foundation_index);
        return false;
    };
    if card_to_move.suit() != target_suit {
        debug!(
            "[Foundation Rule] {} -> Foundation({}): suit mismatch (target {:?})",
            card_to_move, target_foundation_index, target_suit
        );
        return false;
    }

    let result = match target_top {
        None => card_to_move.rank() == Rank::Ace,
        Some(top) => card_to_move.rank().value() == top.rank().value() + 1,
    };
    debug!(
        "[Foundation Rule] {} -> Foundation({}) (top: {:?}): {}",
        card_to_move,
        target_foundation_index,
        target_top.map(ToString::to_string),
        result
    );
    result
}
