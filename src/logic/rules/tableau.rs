//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use itertools::Itertools;
use log::debug;

use super::common::is_alternating_step;
use crate::components::card::{Card, Rank};
use crate::config::EmptyTableauRule;

/// 指定されたカードが、場札の一番上 (`target_top`) に置けるかチェックする。
///
/// 空の列のときは `empty_rule` に従うよ (普通は King だけ)。
pub fn can_move_to_tableau(
    target_top: Option<&Card>,
    card_to_move: &Card,
    empty_rule: EmptyTableauRule,
) -> bool {
    match target_top {
        Some(top) => {
            let valid = top.is_face_up() && is_alternating_step(top, card_to_move);
            debug!("[Tableau Rule] Moving {} onto {}: {}", card_to_move, top, valid);
            valid
        }
        None => {
            let valid = match empty_rule {
                EmptyTableauRule::KingOnly => card_to_move.rank() == Rank::King,
                EmptyTableauRule::AnyCard => true,
            };
            debug!(
                "[Tableau Rule] Moving {} onto empty Tableau ({:?}): {}",
                card_to_move, empty_rule, valid
            );
            valid
        }
    }
}

/// 一緒に動かすカードの列が、ちゃんと「色違い・ランク降順」で組まれているか。
/// 1枚だけなら常に OK。
pub fn is_valid_tableau_run(run: &[Card]) -> bool {
    run.iter().all(Card::is_face_up)
        && run
            .iter()
            .tuple_windows()
            .all(|(lower, upper)| is_alternating_step(lower, upper))
}
