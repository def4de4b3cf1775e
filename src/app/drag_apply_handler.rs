// src/app/drag_apply_handler.rs
//! Handles applying the consequences of a successful drag-and-drop move.

use log::{debug, info};

use crate::board::Board;
use crate::components::StackType;
use crate::error::{GameError, Result};

/// 確定した移動の結果だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub from: StackType,
    pub to: StackType,
    /// 一緒に移動したカードの枚数 (掴んだカード込み)。
    pub moved: usize,
    /// 移動元の場札で、裏向きだったカードを表にしたか。
    pub revealed: bool,
}

/// `origin` の `origin_index` 番目から上のカードを全部 `target` に移す。
///
/// 順番はそのまま。移動元が場札で、新しく一番上になったカードが裏向きなら表にするよ。
/// 置けるかどうかのルールチェックは呼ぶ側の仕事。ここでは範囲チェックだけしてから動かすので、
/// `Err` のときは盤面は何も変わってない！
pub fn apply_move(
    board: &mut Board,
    origin: StackType,
    origin_index: usize,
    target: StackType,
) -> Result<MoveReport> {
    if origin == target {
        return Err(GameError::SameStack(origin));
    }
    // 先に移動先が存在するか確かめておく (取り出してから失敗するとカードが消えちゃう)
    board.stack(target)?;
    let run = board.stack_mut(origin)?.split_off(origin_index)?;
    let moved = run.len();
    debug!("  Moving {} card(s) from {:?}[{}] to {:?}", moved, origin, origin_index, target);
    board.stack_mut(target)?.extend_run(run);

    let revealed = reveal_underlying_card_if_needed(board, origin)?;
    info!(
        "Moved {} card(s) {:?} -> {:?}{}",
        moved,
        origin,
        target,
        if revealed { " (revealed a card)" } else { "" }
    );
    Ok(MoveReport { from: origin, to: target, moved, revealed })
}

/// 移動元のスタックが場札で、一番上のカードが裏向きなら、それを表にする。
/// 列が空になったときは何もしないよ。
fn reveal_underlying_card_if_needed(board: &mut Board, origin: StackType) -> Result<bool> {
    if !matches!(origin, StackType::Tableau(_)) {
        return Ok(false);
    }
    match board.stack_mut(origin)?.peek_top_mut() {
        Some(card) if !card.is_face_up() => {
            card.flip();
            debug!("    Revealing card {} on {:?}", card, origin);
            Ok(true)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Card, Rank, Suit};
    use crate::logic::deck::Deck;

    fn up(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.flip();
        card
    }

    #[test]
    fn moving_a_run_keeps_order_and_reveals() {
        let mut board = Board::new(Deck::shuffled_new());
        {
            let origin = board.stack_mut(StackType::Tableau(1)).expect("列はあるはず");
            origin.push(Card::new(Suit::Club, Rank::Two)); // 裏向き
            origin.push(up(Suit::Heart, Rank::Nine));
            origin.push(up(Suit::Spade, Rank::Eight));
        }
        board
            .stack_mut(StackType::Tableau(4))
            .expect("列はあるはず")
            .push(up(Suit::Club, Rank::Ten));

        let report = apply_move(&mut board, StackType::Tableau(1), 1, StackType::Tableau(4))
            .expect("移動できるはず");
        assert_eq!(report.moved, 2);
        assert!(report.revealed);

        let target: Vec<Rank> = board
            .stack(StackType::Tableau(4))
            .expect("列はあるはず")
            .cards()
            .iter()
            .map(Card::rank)
            .collect();
        assert_eq!(target, vec![Rank::Ten, Rank::Nine, Rank::Eight]);

        let origin = board.stack(StackType::Tableau(1)).expect("列はあるはず");
        assert_eq!(origin.len(), 1);
        assert!(origin.peek_top().map(Card::is_face_up).unwrap_or(false));
    }

    #[test]
    fn emptied_column_does_not_flip() {
        let mut board = Board::new(Deck::shuffled_new());
        board
            .stack_mut(StackType::Tableau(0))
            .expect("列はあるはず")
            .push(up(Suit::Heart, Rank::Ace));
        let report = apply_move(&mut board, StackType::Tableau(0), 0, StackType::Foundation(0))
            .expect("移動できるはず");
        assert!(!report.revealed);
        assert!(board.stack(StackType::Tableau(0)).expect("列はあるはず").is_empty());
    }

    #[test]
    fn bad_index_leaves_board_untouched() {
        let mut board = Board::new(Deck::shuffled_new());
        let before = board.clone();
        assert!(apply_move(&mut board, StackType::Waste, 0, StackType::Tableau(0)).is_err());
        assert!(apply_move(&mut board, StackType::Waste, 0, StackType::Tableau(8)).is_err());
        assert_eq!(
            apply_move(&mut board, StackType::Waste, 0, StackType::Waste),
            Err(GameError::SameStack(StackType::Waste))
        );
        assert_eq!(board, before);
    }
}
