// src/systems/deal_system.rs

use log::info;

use super::System;
use crate::components::stack::{StackType, TABLEAU_COUNT};
use crate::error::Result;
use crate::game::GameState;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札 (Deck) から7つの場札と山札 (Stock) にカードを配る役割だよ。
#[derive(Debug, Default, Clone, Copy)]
pub struct DealInitialCardsSystem;

impl System for DealInitialCardsSystem {
    /// クロンダイクのルールで配るよ！🎉
    ///
    /// - 場札 i 列目には i+1 枚 (Deck の上から順番に引く)
    /// - 各列で最後に配った1枚だけ表向き
    /// - 残り 24 枚は全部、裏向きのまま山札 (Stock) へ
    fn run(&mut self, state: &mut GameState) -> Result<()> {
        let board = state.board_mut();

        for tableau_index in 0..TABLEAU_COUNT {
            for card_in_tableau in 0..=tableau_index {
                let mut card = board.deck_mut().draw()?;
                // その列の一番上のカードだけ表向きにするよ！👀
                if card_in_tableau == tableau_index {
                    card.flip();
                }
                board.stack_mut(StackType::Tableau(tableau_index))?.push(card);
            }
        }

        // 残りは順番を変えずに山札へ。Deck の一番上がそのまま Stock の一番上になる。
        let remaining = board.deck_mut().drain_remaining();
        let stock_count = remaining.len();
        board.stack_mut(StackType::Stock)?.extend_run(remaining);

        info!("DealInitialCardsSystem: dealt 28 cards to tableau, {} to stock", stock_count);
        Ok(())
    }
}

// --- テストコード ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::components::stack::Stack;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn deal_matches_klondike_layout() {
        let mut rng = StdRng::seed_from_u64(42);
        let state = GameState::new_with_rng(GameConfig::default(), &mut rng)
            .expect("配れるはず");
        let board = state.board();

        // 1. 場札の枚数と表裏
        for i in 0..TABLEAU_COUNT {
            let column = board.stack(StackType::Tableau(i)).expect("列はあるはず");
            assert_eq!(column.len(), usize::from(i) + 1, "場札 {} の枚数が違う", i);
            let (last, rest) = column.cards().split_last().expect("空じゃないはず");
            assert!(last.is_face_up(), "場札 {} の一番上は表向きのはず", i);
            assert!(rest.iter().all(|card| !card.is_face_up()), "場札 {} の下は裏向きのはず", i);
        }

        // 2. 山札は 24 枚全部裏向き、Deck は空
        let stock = board.stack(StackType::Stock).expect("山札はあるはず");
        assert_eq!(stock.len(), 24);
        assert!(stock.cards().iter().all(|card| !card.is_face_up()));
        assert!(board.deck().is_empty());
        assert!(board.stack(StackType::Waste).map(Stack::is_empty).unwrap_or(false));

        // 3. 全部で 52 枚、重複なし
        let unique: HashSet<_> = board.all_cards().map(|card| (card.suit(), card.rank())).collect();
        assert_eq!(unique.len(), 52);
        assert_eq!(board.total_card_count(), 52);
        println!("DealInitialCardsSystem のテスト、成功！🎉");
    }

    #[test]
    fn dealing_twice_runs_out_of_cards() {
        let mut state = GameState::new(GameConfig::default()).expect("配れるはず");
        let err = DealInitialCardsSystem.run(&mut state).expect_err("Deck はもう空のはず");
        assert_eq!(err, crate::error::GameError::EmptyDeck);
    }
}
