// src/app/stock_handler.rs
//! Handles logic related to clicking the Stock pile (dealing to Waste, resetting Waste).

use log::info;

use crate::board::Board;
use crate::components::StackType;
use crate::error::Result;
use crate::logic::rules::stock_waste;

/// 山札クリックで何が起きたか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// 1枚めくって捨て札に置いた。
    Dealt,
    /// 山札が空だったので、捨て札を裏向きで山札に戻した。
    Recycled,
    /// 山札も捨て札も空っぽ。
    Nothing,
}

/// Deals one card from the Stock pile to the Waste pile.
/// Returns true if a card was dealt, false otherwise.
pub fn deal_one_card_from_stock(board: &mut Board) -> Result<bool> {
    let stock_is_empty = board.stack(StackType::Stock)?.is_empty();
    if !stock_waste::can_deal_from_stock(stock_is_empty) {
        info!("Stock is empty. Cannot deal.");
        return Ok(false);
    }

    let mut card = board.stack_mut(StackType::Stock)?.pop()?;
    if !card.is_face_up() {
        card.flip();
    }
    info!("Dealt {} from Stock to Waste", card);
    board.stack_mut(StackType::Waste)?.push(card);
    Ok(true)
}

/// Moves all cards from the Waste pile back to the Stock pile.
///
/// 捨て札の一番上が山札の一番下になるように逆順で戻して、全部裏向きにする。
/// これで次にめくる順番が最初の一巡と同じになるよ。
pub fn reset_waste_to_stock(board: &mut Board) -> Result<bool> {
    let stock_is_empty = board.stack(StackType::Stock)?.is_empty();
    let waste_is_empty = board.stack(StackType::Waste)?.is_empty();
    if !stock_waste::can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
        return Ok(false);
    }

    let waste = board.stack_mut(StackType::Waste)?;
    let len = waste.len();
    let mut cards = waste.split_off(0)?;
    cards.reverse();
    for card in cards.iter_mut().filter(|card| card.is_face_up()) {
        card.flip();
    }
    board.stack_mut(StackType::Stock)?.extend_run(cards);
    info!("Recycled {} card(s) from Waste back to Stock", len);
    Ok(true)
}

/// 山札クリックの処理。めくれるならめくる、空なら捨て札を戻す。
pub fn draw_or_recycle(board: &mut Board) -> Result<StockAction> {
    if deal_one_card_from_stock(board)? {
        return Ok(StockAction::Dealt);
    }
    if reset_waste_to_stock(board)? {
        return Ok(StockAction::Recycled);
    }
    Ok(StockAction::Nothing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Card, Rank, Suit};
    use crate::logic::deck::Deck;

    fn board_with_stock(ranks: &[Rank]) -> Board {
        let mut deck = Deck::shuffled_new();
        deck.drain_remaining();
        let mut board = Board::new(deck);
        let stock = board.stack_mut(StackType::Stock).expect("山札はあるはず");
        for &rank in ranks {
            stock.push(Card::new(Suit::Club, rank));
        }
        board
    }

    fn ranks(board: &Board, stack_type: StackType) -> Vec<Rank> {
        board
            .stack(stack_type)
            .expect("スタックはあるはず")
            .cards()
            .iter()
            .map(Card::rank)
            .collect()
    }

    #[test]
    fn deal_moves_top_card_face_up() {
        let mut board = board_with_stock(&[Rank::Ace, Rank::Two]);
        assert_eq!(deal_one_card_from_stock(&mut board), Ok(true));
        assert_eq!(ranks(&board, StackType::Stock), vec![Rank::Ace]);
        let waste = board.stack(StackType::Waste).expect("捨て札はあるはず");
        assert_eq!(waste.peek_top().map(Card::rank), Some(Rank::Two));
        assert!(waste.peek_top().map(Card::is_face_up).unwrap_or(false));
    }

    #[test]
    fn recycle_restores_original_draw_order() {
        let mut board = board_with_stock(&[Rank::Ace, Rank::Two, Rank::Three]);
        let before = ranks(&board, StackType::Stock);

        for _ in 0..3 {
            assert_eq!(draw_or_recycle(&mut board), Ok(StockAction::Dealt));
        }
        assert_eq!(ranks(&board, StackType::Waste), vec![Rank::Three, Rank::Two, Rank::Ace]);

        assert_eq!(draw_or_recycle(&mut board), Ok(StockAction::Recycled));
        assert_eq!(ranks(&board, StackType::Stock), before);
        assert!(board.stack(StackType::Waste).expect("捨て札はあるはず").is_empty());
        assert!(board
            .stack(StackType::Stock)
            .expect("山札はあるはず")
            .cards()
            .iter()
            .all(|card| !card.is_face_up()));
    }

    #[test]
    fn nothing_to_do_when_both_empty() {
        let mut board = board_with_stock(&[]);
        assert_eq!(draw_or_recycle(&mut board), Ok(StockAction::Nothing));
        assert_eq!(deal_one_card_from_stock(&mut board), Ok(false));
        assert_eq!(reset_waste_to_stock(&mut board), Ok(false));
    }
}
