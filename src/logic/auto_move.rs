// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! ダブルクリックされたカードを、置ける組札へ自動で送るときに使うんだ。

use log::debug;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::stack::{StackType, FOUNDATION_COUNT};
use crate::logic::rules;

/// カードを自動で置ける組札 (Foundation) を探す。
///
/// 組札を 0 から順番に見て、最初に置けたところを返すよ。
/// スートごとに組札が決まってるので、実際に候補になるのはいつも1か所だけ。
pub fn find_automatic_foundation_move(board: &Board, card: &Card) -> Option<StackType> {
    let found = (0..FOUNDATION_COUNT).map(StackType::Foundation).find(|&target| {
        board
            .stack(target)
            .map(|stack| stack.peek_top())
            .is_ok_and(|top| {
                let StackType::Foundation(index) = target else {
                    return false;
                };
                rules::can_move_to_foundation(index, top, card)
            })
    });
    debug!("[AutoMove] {} -> {:?}", card, found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::logic::deck::Deck;

    fn up(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.flip();
        card
    }

    fn empty_board() -> Board {
        let mut deck = Deck::shuffled_new();
        deck.drain_remaining();
        Board::new(deck)
    }

    #[test]
    fn ace_goes_to_its_suit_foundation() {
        let board = empty_board();
        assert_eq!(
            find_automatic_foundation_move(&board, &up(Suit::Club, Rank::Ace)),
            Some(StackType::Foundation(2))
        );
        assert_eq!(
            find_automatic_foundation_move(&board, &up(Suit::Spade, Rank::Ace)),
            Some(StackType::Foundation(3))
        );
        assert_eq!(find_automatic_foundation_move(&board, &up(Suit::Club, Rank::Two)), None);
    }

    #[test]
    fn next_rank_follows_top_card() {
        let mut board = empty_board();
        board
            .stack_mut(StackType::Foundation(1))
            .expect("組札はあるはず")
            .push(up(Suit::Diamond, Rank::Ace));
        assert_eq!(
            find_automatic_foundation_move(&board, &up(Suit::Diamond, Rank::Two)),
            Some(StackType::Foundation(1))
        );
        assert_eq!(find_automatic_foundation_move(&board, &up(Suit::Diamond, Rank::Three)), None);
        assert_eq!(find_automatic_foundation_move(&board, &up(Suit::Heart, Rank::Two)), None);
    }
}
